use foundation::{CoordError, LatLng, ParkId};

use crate::error::ParkParseError;
use crate::wire::{ParkRecord, RawCoord};

/// Wire value meaning "this park has washrooms".
pub const WASHROOMS_YES: &str = "Y";

/// Named amenity category used as a filter dimension (e.g. `"Playground"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FacilityType(pub String);

impl FacilityType {
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FacilityType {
    fn from(name: &str) -> Self {
        FacilityType(name.to_string())
    }
}

impl From<String> for FacilityType {
    fn from(name: String) -> Self {
        FacilityType(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Park {
    pub id: ParkId,
    pub name: String,
    pub address: String,
    pub washrooms: bool,
    pub position: LatLng,
    pub facilities: Vec<String>,
}

impl Park {
    /// True when the park has anything to list below its address.
    pub fn has_amenities(&self) -> bool {
        self.washrooms || !self.facilities.is_empty()
    }
}

impl TryFrom<ParkRecord> for Park {
    type Error = ParkParseError;

    fn try_from(record: ParkRecord) -> Result<Self, Self::Error> {
        let id = ParkId::from(record.id);
        if record.name.trim().is_empty() {
            return Err(ParkParseError::EmptyName { id });
        }
        let position = parse_position(&record.lat, &record.lng)
            .map_err(|source| ParkParseError::InvalidCoordinate {
                id: id.clone(),
                source,
            })?;
        Ok(Park {
            id,
            name: record.name,
            address: record.address,
            washrooms: record.washrooms.as_deref() == Some(WASHROOMS_YES),
            position,
            facilities: record.facilities,
        })
    }
}

fn parse_position(lat: &RawCoord, lng: &RawCoord) -> Result<LatLng, CoordError> {
    match (lat, lng) {
        (RawCoord::Text(lat), RawCoord::Text(lng)) => LatLng::parse(lat, lng),
        (RawCoord::Number(lat), RawCoord::Number(lng)) => LatLng::new(*lat, *lng),
        (RawCoord::Text(lat), RawCoord::Number(lng)) => LatLng::parse(lat, &lng.to_string()),
        (RawCoord::Number(lat), RawCoord::Text(lng)) => LatLng::parse(&lat.to_string(), lng),
    }
}
