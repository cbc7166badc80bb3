//! Park data model and the JSON wire format of the parks API.
//!
//! Wire records (`ParkRecord`, raw ids) are decoded first and then validated
//! into the model types (`Park`, `ParkCatalog`). Nothing downstream of this
//! crate sees unvalidated coordinates.

pub mod catalog;
pub mod error;
pub mod model;
pub mod wire;

pub use catalog::ParkCatalog;
pub use error::{ParkListError, ParkParseError};
pub use model::{FacilityType, Park};
pub use wire::{FilterRequest, ParkRecord, RawCoord, RawParkId};
