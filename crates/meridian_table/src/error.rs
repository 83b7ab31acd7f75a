use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("Coordinates cannot be combined with sources or destinations.")]
    AmbiguousMode,

    #[error("At least {required} {kind} are required, got {given}.")]
    NotEnoughCoordinates {
        kind: &'static str,
        required: usize,
        given: usize,
    },

    #[error("Coordinate {index} is invalid.")]
    InvalidCoordinate { index: usize },

    #[error("Number of bearings does not match number of coordinates.")]
    BearingCountMismatch { bearings: usize, coordinates: usize },

    #[error("Bearing {index} is out of range.")]
    InvalidBearing { index: usize },

    #[error("Could not find a matching segment for coordinate {index}.")]
    UnresolvableLocation { index: usize },

    #[error("No distance table could be computed for these locations.")]
    EngineUnavailable,

    #[error("Resolved location {index} does not belong to the loaded network.")]
    CorruptSnapshot { index: usize },
}

impl TableError {
    /// Rejected before any location was resolved.
    pub fn is_malformed_request(&self) -> bool {
        matches!(
            self,
            TableError::AmbiguousMode
                | TableError::NotEnoughCoordinates { .. }
                | TableError::InvalidCoordinate { .. }
                | TableError::BearingCountMismatch { .. }
                | TableError::InvalidBearing { .. }
        )
    }

    pub fn status_code(&self) -> u16 {
        match self {
            TableError::CorruptSnapshot { .. } => 500,
            _ => 400,
        }
    }
}
