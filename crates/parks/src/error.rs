use foundation::{CoordError, ParkId};

/// A single park record failed validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ParkParseError {
    InvalidCoordinate { id: ParkId, source: CoordError },
    EmptyName { id: ParkId },
}

impl std::fmt::Display for ParkParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParkParseError::InvalidCoordinate { id, source } => {
                write!(f, "park {id}: invalid coordinate: {source}")
            }
            ParkParseError::EmptyName { id } => write!(f, "park {id}: empty name"),
        }
    }
}

impl std::error::Error for ParkParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParkParseError::InvalidCoordinate { source, .. } => Some(source),
            ParkParseError::EmptyName { .. } => None,
        }
    }
}

/// A park list payload was rejected as a whole.
#[derive(Debug, Clone, PartialEq)]
pub enum ParkListError {
    /// Record at `index` failed validation.
    Record { index: usize, error: ParkParseError },
    /// Two records share the same id.
    DuplicateId(ParkId),
}

impl std::fmt::Display for ParkListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParkListError::Record { index, error } => write!(f, "record #{index}: {error}"),
            ParkListError::DuplicateId(id) => write!(f, "duplicate park id {id}"),
        }
    }
}

impl std::error::Error for ParkListError {}
