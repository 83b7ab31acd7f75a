use meridian_routing::{bearing::Bearing, coordinate::FixedPointCoordinate};
use serde::{Deserialize, Serialize};

use crate::error::TableError;

/// A table request as it arrives on the wire. Locations are `[lat, lon]`
/// pairs in degrees.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableRequest {
    pub coordinates: Vec<[f64; 2]>,
    pub sources: Vec<[f64; 2]>,
    pub destinations: Vec<[f64; 2]>,
    pub bearings: Vec<Bearing>,
    pub hints: Vec<String>,
    pub checksum: Option<u32>,
    pub mapped_points: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableParameters {
    pub coordinates: Vec<FixedPointCoordinate>,
    pub sources: Vec<FixedPointCoordinate>,
    pub destinations: Vec<FixedPointCoordinate>,
    pub bearings: Vec<Bearing>,
    /// Indexed like the bearings, empty strings stand for "no hint".
    pub hints: Vec<String>,
    pub checksum: Option<u32>,
    pub mapped_points: bool,
}

impl TableParameters {
    pub fn symmetric(coordinates: Vec<FixedPointCoordinate>) -> Self {
        TableParameters {
            coordinates,
            ..Default::default()
        }
    }

    pub fn asymmetric(
        destinations: Vec<FixedPointCoordinate>,
        sources: Vec<FixedPointCoordinate>,
    ) -> Self {
        TableParameters {
            destinations,
            sources,
            ..Default::default()
        }
    }

    pub fn with_bearings(mut self, bearings: Vec<Bearing>) -> Self {
        self.bearings = bearings;
        self
    }

    pub fn with_hints(mut self, hints: Vec<String>, checksum: u32) -> Self {
        self.hints = hints;
        self.checksum = Some(checksum);
        self
    }

    pub fn with_mapped_points(mut self) -> Self {
        self.mapped_points = true;
        self
    }
}

fn convert(
    locations: &[[f64; 2]],
    first_index: usize,
) -> Result<Vec<FixedPointCoordinate>, TableError> {
    locations
        .iter()
        .enumerate()
        .map(|(offset, [lat, lon])| {
            FixedPointCoordinate::from_degrees(*lat, *lon).map_err(|_| {
                TableError::InvalidCoordinate {
                    index: first_index + offset,
                }
            })
        })
        .collect()
}

impl TryFrom<TableRequest> for TableParameters {
    type Error = TableError;

    /// Errors carry the index the location would occupy in the bearing and
    /// hint lists: destinations first, sources after them.
    fn try_from(request: TableRequest) -> Result<Self, Self::Error> {
        Ok(TableParameters {
            coordinates: convert(&request.coordinates, 0)?,
            destinations: convert(&request.destinations, 0)?,
            sources: convert(&request.sources, request.destinations.len())?,
            bearings: request.bearings,
            hints: request.hints,
            checksum: request.checksum,
            mapped_points: request.mapped_points,
        })
    }
}
