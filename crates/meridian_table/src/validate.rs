use meridian_routing::coordinate::FixedPointCoordinate;

use crate::{error::TableError, parameters::TableParameters, slots::LocationSlots};

pub const MIN_SYMMETRIC_COORDINATES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMode {
    /// All pairs between the coordinates.
    Symmetric,
    /// Sources × destinations.
    Asymmetric,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub mode: RequestMode,
    pub slots: LocationSlots,
}

impl ValidatedRequest {
    pub fn total_points(&self) -> usize {
        self.slots.total()
    }
}

fn check_count(kind: &'static str, required: usize, given: usize) -> Result<(), TableError> {
    if given < required {
        return Err(TableError::NotEnoughCoordinates {
            kind,
            required,
            given,
        });
    }

    Ok(())
}

fn check_range(coordinates: &[FixedPointCoordinate], first_index: usize) -> Result<(), TableError> {
    match coordinates.iter().position(|c| !c.is_valid()) {
        Some(offset) => Err(TableError::InvalidCoordinate {
            index: first_index + offset,
        }),
        None => Ok(()),
    }
}

/// Determines the addressing mode and rejects malformed requests before any
/// location is resolved.
pub fn validate(parameters: &TableParameters) -> Result<ValidatedRequest, TableError> {
    let has_coordinates = !parameters.coordinates.is_empty();
    let has_groups = !parameters.sources.is_empty() || !parameters.destinations.is_empty();

    let (mode, slots) = match (has_coordinates, has_groups) {
        (true, true) => return Err(TableError::AmbiguousMode),
        (true, false) => {
            check_count(
                "coordinates",
                MIN_SYMMETRIC_COORDINATES,
                parameters.coordinates.len(),
            )?;
            check_range(&parameters.coordinates, 0)?;

            (
                RequestMode::Symmetric,
                LocationSlots::symmetric(parameters.coordinates.len()),
            )
        }
        (false, true) => {
            check_count("destinations", 1, parameters.destinations.len())?;
            check_count("sources", 1, parameters.sources.len())?;

            let slots =
                LocationSlots::asymmetric(parameters.destinations.len(), parameters.sources.len());
            check_range(&parameters.destinations, slots.targets().start)?;
            check_range(&parameters.sources, slots.sources().start)?;

            (RequestMode::Asymmetric, slots)
        }
        (false, false) => {
            return Err(TableError::NotEnoughCoordinates {
                kind: "coordinates",
                required: MIN_SYMMETRIC_COORDINATES,
                given: 0,
            });
        }
    };

    if !parameters.bearings.is_empty() && parameters.bearings.len() != slots.total() {
        return Err(TableError::BearingCountMismatch {
            bearings: parameters.bearings.len(),
            coordinates: slots.total(),
        });
    }

    if let Some(index) = parameters.bearings.iter().position(|b| !b.is_valid()) {
        return Err(TableError::InvalidBearing { index });
    }

    Ok(ValidatedRequest { mode, slots })
}
