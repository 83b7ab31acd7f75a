use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BEARING_RANGE, UNRESTRICTED_BEARING_RANGE};

/// A bearing as supplied by a client, in whole degrees.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bearing {
    pub bearing: i16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<i16>,
}

impl Bearing {
    pub fn new(bearing: i16, range: Option<i16>) -> Self {
        Bearing { bearing, range }
    }

    pub fn is_valid(&self) -> bool {
        (0..=360).contains(&self.bearing)
            && self
                .range
                .is_none_or(|range| (0..=UNRESTRICTED_BEARING_RANGE).contains(&range))
    }
}

/// The window `[bearing - range, bearing + range]` a segment direction must
/// fall into to be eligible during nearest segment lookup.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BearingFilter {
    pub bearing: i16,
    pub range: i16,
}

impl BearingFilter {
    pub const UNRESTRICTED: BearingFilter = BearingFilter {
        bearing: 0,
        range: UNRESTRICTED_BEARING_RANGE,
    };

    /// Without any bearing the filter accepts every direction, a bearing
    /// without range gets the default tolerance.
    pub fn from_input(bearing: Option<&Bearing>) -> Self {
        match bearing {
            None => BearingFilter::UNRESTRICTED,
            Some(bearing) => BearingFilter {
                bearing: bearing.bearing,
                range: bearing.range.unwrap_or(DEFAULT_BEARING_RANGE),
            },
        }
    }

    pub fn is_unrestricted(&self) -> bool {
        self.range >= UNRESTRICTED_BEARING_RANGE
    }

    pub fn contains(&self, bearing: f64) -> bool {
        self.is_unrestricted() || angular_difference(bearing, self.bearing as f64) <= self.range as f64
    }
}

impl Default for BearingFilter {
    fn default() -> Self {
        BearingFilter::UNRESTRICTED
    }
}

/// Smallest angle between two bearings, in `[0, 180]`.
pub fn angular_difference(a: f64, b: f64) -> f64 {
    let difference = (a - b).abs() % 360.0;
    if difference > 180.0 {
        360.0 - difference
    } else {
        difference
    }
}
