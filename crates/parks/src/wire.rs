//! JSON payloads exchanged with the parks API.
//!
//! - `GET facilities` -> `["Playground", ...]`
//! - `GET parks` -> `[ParkRecord, ...]`
//! - `POST filters` with `FilterRequest` -> `[id, ...]`

use foundation::ParkId;
use serde::{Deserialize, Serialize};

/// Park id as it appears on the wire: any JSON number or a JSON string.
///
/// Variant order matters for the untagged decode: integers that fit `i64`
/// land in `Int`, larger ones in `UInt`, everything else numeric in `Float`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawParkId {
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
}

impl From<RawParkId> for ParkId {
    fn from(raw: RawParkId) -> Self {
        match raw {
            RawParkId::Int(n) => ParkId::from(n),
            RawParkId::UInt(n) => ParkId::from(n),
            RawParkId::Float(f) => float_id(f),
            RawParkId::Text(s) => ParkId::from(s),
        }
    }
}

/// Whole floats collapse to integer text so `1.0` and `1` are the same park.
fn float_id(f: f64) -> ParkId {
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        ParkId::from(f as i64)
    } else {
        ParkId::from(f.to_string())
    }
}

/// Coordinate component as it appears on the wire.
///
/// The API sends decimal strings; plain numbers are accepted too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCoord {
    Number(f64),
    Text(String),
}

/// One element of the `GET parks` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkRecord {
    pub id: RawParkId,
    pub name: String,
    #[serde(default)]
    pub address: String,
    /// `"Y"` when the park has washrooms; anything else (or absent) means no.
    #[serde(default)]
    pub washrooms: Option<String>,
    pub lat: RawCoord,
    pub lng: RawCoord,
    #[serde(default)]
    pub facilities: Vec<String>,
}

/// Body of the `POST filters` request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterRequest {
    pub filters: Vec<String>,
}

impl FilterRequest {
    pub fn new(filters: Vec<String>) -> Self {
        Self { filters }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

pub fn decode_facility_types(text: &str) -> Result<Vec<String>, serde_json::Error> {
    serde_json::from_str(text)
}

pub fn decode_park_records(text: &str) -> Result<Vec<ParkRecord>, serde_json::Error> {
    serde_json::from_str(text)
}

pub fn decode_park_ids(text: &str) -> Result<Vec<ParkId>, serde_json::Error> {
    let raw: Vec<RawParkId> = serde_json::from_str(text)?;
    Ok(raw.into_iter().map(ParkId::from).collect())
}
