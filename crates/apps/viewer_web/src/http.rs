use foundation::ParkId;
use gloo_net::http::{Request, Response};
use mapview::{ApiError, ParkApi};
use parks::wire::{decode_facility_types, decode_park_ids, decode_park_records};
use parks::{FilterRequest, ParkRecord};

use crate::config::Endpoints;

/// `ParkApi` over the browser's `fetch`.
#[derive(Debug, Clone)]
pub struct GlooParkApi {
    endpoints: Endpoints,
}

impl GlooParkApi {
    pub fn new(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }
}

impl ParkApi for GlooParkApi {
    async fn facility_types(&self) -> Result<Vec<String>, ApiError> {
        let url = &self.endpoints.facilities_url;
        let resp = Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let text = response_text(url, resp).await?;
        decode_facility_types(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn parks(&self) -> Result<Vec<ParkRecord>, ApiError> {
        let url = &self.endpoints.parks_url;
        let resp = Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let text = response_text(url, resp).await?;
        decode_park_records(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn filtered_ids(&self, request: &FilterRequest) -> Result<Vec<ParkId>, ApiError> {
        let url = &self.endpoints.filters_url;
        let resp = Request::post(url)
            .json(request)
            .map_err(|e| ApiError::Invalid(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let text = response_text(url, resp).await?;
        decode_park_ids(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

async fn response_text(url: &str, resp: Response) -> Result<String, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Status {
            status: resp.status(),
            url: url.to_string(),
        });
    }
    resp.text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}
