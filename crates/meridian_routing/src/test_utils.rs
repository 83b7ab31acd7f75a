use crate::{
    coordinate::FixedPointCoordinate,
    network::{NetworkFile, RoadNetwork, SegmentRecord},
};

pub fn coordinate(lat: f64, lon: f64) -> FixedPointCoordinate {
    FixedPointCoordinate::from_degrees(lat, lon).unwrap()
}

fn segment(from: u32, to: u32, weight: i32, bidirectional: bool) -> SegmentRecord {
    SegmentRecord {
        from,
        to,
        weight,
        bidirectional,
    }
}

/// Three streets meeting at node 1, the northern one is one-way, plus a
/// detached street far away.
///
/// ```text
///           3
///           ^
///           |
///  0 ------ 1 ------ 2        4 ------ 5
/// ```
pub fn fixture_network_file() -> NetworkFile {
    NetworkFile {
        nodes: vec![
            [50.0, 4.0],
            [50.0, 4.01],
            [50.0, 4.02],
            [50.01, 4.01],
            [51.0, 5.0],
            [51.0, 5.01],
        ],
        segments: vec![
            segment(0, 1, 100, true),
            segment(1, 2, 100, true),
            segment(1, 3, 50, false),
            segment(4, 5, 10, true),
        ],
    }
}

pub fn fixture_network() -> RoadNetwork {
    RoadNetwork::from_network_file(fixture_network_file()).unwrap()
}
