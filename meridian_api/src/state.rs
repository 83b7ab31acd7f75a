use meridian_routing::network::RoadNetwork;
use meridian_table::DistanceTablePlugin;

pub struct AppState {
    pub table: DistanceTablePlugin<RoadNetwork>,
}
