//! View state for the park map.
//!
//! `ParkMapView` is the single owner of all mutable session state (filters,
//! visible set, selection). Presentation (`present`) is a set of pure
//! functions over it, and `loader::ParkMapController` glues it to an async
//! `ParkApi`.

pub mod error;
pub mod filters;
pub mod loader;
pub mod present;
pub mod selection;
pub mod view;
pub mod visible;

pub use error::ApiError;
pub use filters::{CheckboxItem, FilterState};
pub use loader::{ParkApi, ParkMapController};
pub use present::{Marker, PopupContent, PopupLine};
pub use selection::Selection;
pub use view::{FilterQuery, ParkMapView};
pub use visible::VisibleSet;
