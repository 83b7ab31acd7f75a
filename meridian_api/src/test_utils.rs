use std::sync::Arc;

use meridian_routing::network::{NetworkFile, RoadNetwork, SegmentRecord};
use meridian_table::DistanceTablePlugin;

use crate::state::AppState;

/// Two 100 weight streets in a row, along latitude 50.
pub fn state() -> Arc<AppState> {
    let network = RoadNetwork::from_network_file(NetworkFile {
        nodes: vec![[50.0, 4.0], [50.0, 4.01], [50.0, 4.02]],
        segments: vec![
            SegmentRecord {
                from: 0,
                to: 1,
                weight: 100,
                bidirectional: true,
            },
            SegmentRecord {
                from: 1,
                to: 2,
                weight: 100,
                bidirectional: true,
            },
        ],
    })
    .unwrap();

    Arc::new(AppState {
        table: DistanceTablePlugin::new(Arc::new(network), 10),
    })
}
