use crate::types::{EdgeWeight, NodeId, SegmentId};

/// Number of fixed point units in one degree.
pub const COORDINATE_PRECISION: f64 = 1_000_000.0;

pub(crate) const MAX_LATITUDE: i32 = 90 * 1_000_000;
pub(crate) const MAX_LONGITUDE: i32 = 180 * 1_000_000;

pub const INVALID_NODE: NodeId = NodeId::MAX;
pub const INVALID_SEGMENT: SegmentId = SegmentId::MAX;

/// Sentinel for unreachable pairs in a distance table.
pub const INVALID_EDGE_WEIGHT: EdgeWeight = EdgeWeight::MAX;

/// Tolerance applied when a bearing is given without a range.
pub const DEFAULT_BEARING_RANGE: i16 = 10;
pub const UNRESTRICTED_BEARING_RANGE: i16 = 180;

pub(crate) const EARTH_RADIUS_METERS: f64 = 6_371_000.0;
