mod location_index;
mod many_to_many;

use std::fs::File;
use std::hash::{Hash, Hasher};
use std::io::BufReader;
use std::path::Path;

use fxhash::FxHasher64;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::bearing::BearingFilter;
use crate::constants::{INVALID_NODE, INVALID_SEGMENT};
use crate::coordinate::{CoordinateError, FixedPointCoordinate};
use crate::error::NetworkError;
use crate::facade::DataFacade;
use crate::phantom_node::{PhantomNode, PhantomNodeCandidates};
use crate::timer::ScopedTimer;
use crate::types::{ComponentId, EdgeWeight, NodeId, SegmentId};

use location_index::{LocationIndex, SegmentProjection};

fn default_bidirectional() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentRecord {
    pub from: NodeId,
    pub to: NodeId,
    /// Cost of traversing the whole segment
    pub weight: EdgeWeight,
    #[serde(default = "default_bidirectional")]
    pub bidirectional: bool,
}

/// On-disk representation of an already weighted road network. Nodes are
/// `[lat, lon]` pairs in degrees.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkFile {
    pub nodes: Vec<[f64; 2]>,
    pub segments: Vec<SegmentRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: NodeId,
    pub end: NodeId,
    pub weight: EdgeWeight,
    pub bidirectional: bool,
    pub component_id: ComponentId,
}

impl Segment {
    pub(crate) fn new(start: NodeId, end: NodeId, weight: EdgeWeight, bidirectional: bool) -> Self {
        Segment {
            start,
            end,
            weight,
            bidirectional,
            component_id: 0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct OutgoingArc {
    pub head: NodeId,
    pub weight: EdgeWeight,
}

/// In-memory road network snapshot answering nearest segment lookups and
/// distance tables.
pub struct RoadNetwork {
    nodes: Vec<FixedPointCoordinate>,
    segments: Vec<Segment>,
    adjacency_list: Vec<Vec<OutgoingArc>>,
    index: LocationIndex,
    checksum: u32,
}

impl RoadNetwork {
    pub fn from_file(path: impl AsRef<Path>) -> Result<RoadNetwork, NetworkError> {
        let path = path.as_ref();
        debug!("Reading network from path {}", path.display());

        let file = File::open(path)?;
        let network_file: NetworkFile = serde_json::from_reader(BufReader::new(file))?;

        RoadNetwork::from_network_file(network_file)
    }

    pub fn from_network_file(file: NetworkFile) -> Result<RoadNetwork, NetworkError> {
        let _timer = ScopedTimer::start("network/build");

        if file.nodes.len() >= INVALID_NODE as usize
            || file.segments.len() >= INVALID_SEGMENT as usize
        {
            return Err(NetworkError::TooLarge);
        }

        let nodes = file
            .nodes
            .iter()
            .enumerate()
            .map(|(index, &[lat, lon])| {
                FixedPointCoordinate::from_degrees(lat, lon)
                    .and_then(|coordinate| {
                        if coordinate.is_valid() {
                            Ok(coordinate)
                        } else {
                            Err(CoordinateError::OutOfRange)
                        }
                    })
                    .map_err(|source| NetworkError::InvalidCoordinate { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut segments = Vec::with_capacity(file.segments.len());
        for (segment_id, record) in file.segments.iter().enumerate() {
            let segment_id = segment_id as SegmentId;

            for node in [record.from, record.to] {
                if node as usize >= nodes.len() {
                    return Err(NetworkError::UnknownNode {
                        segment: segment_id,
                        node,
                    });
                }
            }

            if record.weight < 0 {
                return Err(NetworkError::NegativeWeight {
                    segment: segment_id,
                });
            }

            segments.push(Segment::new(
                record.from,
                record.to,
                record.weight,
                record.bidirectional,
            ));
        }

        let components = label_components(nodes.len(), &segments);
        for segment in segments.iter_mut() {
            segment.component_id = components[segment.start as usize];
        }

        let adjacency_list = build_adjacency_list(nodes.len(), &segments);
        let checksum = compute_checksum(&nodes, &segments);
        let index = LocationIndex::build(&nodes, &segments);

        info!(
            nodes = nodes.len(),
            segments = segments.len(),
            checksum,
            "Built road network"
        );

        Ok(RoadNetwork {
            nodes,
            segments,
            adjacency_list,
            index,
            checksum,
        })
    }

    pub fn nodes(&self) -> &[FixedPointCoordinate] {
        &self.nodes
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub(crate) fn arcs(&self, node_id: NodeId) -> &[OutgoingArc] {
        self.adjacency_list
            .get(node_id as usize)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn phantom_node(
        &self,
        projection: &SegmentProjection,
        filter: BearingFilter,
    ) -> Option<PhantomNode> {
        let segment = &self.segments[projection.segment_id as usize];
        let start = &self.nodes[segment.start as usize];
        let end = &self.nodes[segment.end as usize];

        // A direction outside of the bearing window cannot be used from this point
        let forward_enabled = filter.contains(start.bearing_to(end));
        let reverse_enabled = segment.bidirectional && filter.contains(end.bearing_to(start));

        if !forward_enabled && !reverse_enabled {
            return None;
        }

        let start_offset = (segment.weight as f64 * projection.ratio).round() as EdgeWeight;

        Some(PhantomNode {
            location: projection.location,
            segment_id: projection.segment_id,
            start_node: segment.start,
            end_node: segment.end,
            start_offset,
            end_offset: segment.weight - start_offset,
            forward_enabled,
            reverse_enabled,
            component_id: segment.component_id,
        })
    }
}

impl DataFacade for RoadNetwork {
    fn find_nearest_anchor(
        &self,
        coordinate: FixedPointCoordinate,
        filter: BearingFilter,
    ) -> Option<PhantomNode> {
        let node = self
            .index
            .nearest_segments(&coordinate)
            .find_map(|projection| self.phantom_node(&projection, filter));

        if let Some(node) = &node {
            debug!(
                distance = coordinate.haversine_distance(&node.location),
                "Snapped {} to segment {}", coordinate, node.segment_id
            );
        }

        node
    }

    fn distance_table(
        &self,
        targets: &[PhantomNodeCandidates],
        sources: &[PhantomNodeCandidates],
    ) -> Option<Vec<EdgeWeight>> {
        let mut components = targets
            .iter()
            .chain(sources)
            .filter_map(|candidates| candidates.first())
            .map(|node| node.component_id);

        if let Some(first) = components.next() {
            if components.any(|component| component != first) {
                debug!("Locations span disconnected parts of the network");
                return None;
            }
        }

        Some(many_to_many::distance_table(self, targets, sources))
    }

    fn checksum(&self) -> u32 {
        self.checksum
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

fn find_root(parents: &mut [NodeId], mut node: NodeId) -> NodeId {
    while parents[node as usize] != node {
        let grand_parent = parents[parents[node as usize] as usize];
        parents[node as usize] = grand_parent;
        node = grand_parent;
    }
    node
}

/// Component of every node, ignoring segment direction.
fn label_components(node_count: usize, segments: &[Segment]) -> Vec<ComponentId> {
    let mut parents: Vec<NodeId> = (0..node_count as NodeId).collect();

    for segment in segments {
        let start_root = find_root(&mut parents, segment.start);
        let end_root = find_root(&mut parents, segment.end);
        if start_root != end_root {
            parents[start_root.max(end_root) as usize] = start_root.min(end_root);
        }
    }

    (0..node_count as NodeId)
        .map(|node| find_root(&mut parents, node))
        .collect()
}

fn build_adjacency_list(node_count: usize, segments: &[Segment]) -> Vec<Vec<OutgoingArc>> {
    let mut adjacency_list = vec![vec![]; node_count];

    for segment in segments {
        adjacency_list[segment.start as usize].push(OutgoingArc {
            head: segment.end,
            weight: segment.weight,
        });

        if segment.bidirectional {
            adjacency_list[segment.end as usize].push(OutgoingArc {
                head: segment.start,
                weight: segment.weight,
            });
        }
    }

    adjacency_list
}

fn compute_checksum(nodes: &[FixedPointCoordinate], segments: &[Segment]) -> u32 {
    let mut hasher = FxHasher64::default();

    nodes.len().hash(&mut hasher);
    for node in nodes {
        node.hash(&mut hasher);
    }

    segments.len().hash(&mut hasher);
    for segment in segments {
        hasher.write_u32(segment.start);
        hasher.write_u32(segment.end);
        hasher.write_i32(segment.weight);
        hasher.write_u8(segment.bidirectional as u8);
    }

    let hash = hasher.finish();
    (hash ^ (hash >> 32)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bearing::Bearing;
    use crate::constants::INVALID_EDGE_WEIGHT;
    use crate::test_utils::{coordinate, fixture_network, fixture_network_file};

    fn snap(network: &RoadNetwork, lat: f64, lon: f64) -> PhantomNode {
        network
            .find_nearest_anchor(coordinate(lat, lon), BearingFilter::UNRESTRICTED)
            .unwrap()
    }

    #[test]
    fn test_snaps_to_closest_segment() {
        let network = fixture_network();
        let node = snap(&network, 50.0005, 4.005);

        assert_eq!(node.segment_id, 0);
        assert_eq!(node.location, coordinate(50.0, 4.005));
        assert_eq!(node.start_node, 0);
        assert_eq!(node.end_node, 1);
        assert_eq!(node.start_offset, 50);
        assert_eq!(node.end_offset, 50);
        assert!(node.forward_enabled);
        assert!(node.reverse_enabled);
        assert!(node.is_valid(network.node_count()));
    }

    #[test]
    fn test_bearing_disables_opposite_direction() {
        let network = fixture_network();
        let westbound = BearingFilter::from_input(Some(&Bearing::new(270, Some(20))));

        let node = network
            .find_nearest_anchor(coordinate(50.0005, 4.005), westbound)
            .unwrap();

        assert_eq!(node.segment_id, 0);
        assert!(!node.forward_enabled);
        assert!(node.reverse_enabled);
    }

    #[test]
    fn test_one_way_segment_is_not_snapped_against_travel_direction() {
        let network = fixture_network();
        let southbound = BearingFilter::from_input(Some(&Bearing::new(180, None)));
        let northbound = BearingFilter::from_input(Some(&Bearing::new(0, None)));

        assert!(
            network
                .find_nearest_anchor(coordinate(50.005, 4.0101), southbound)
                .is_none()
        );

        let node = network
            .find_nearest_anchor(coordinate(50.005, 4.0101), northbound)
            .unwrap();
        assert_eq!(node.segment_id, 2);
        assert!(node.forward_enabled);
        assert!(!node.reverse_enabled);
    }

    #[test]
    fn test_symmetric_table() {
        let network = fixture_network();
        let a = snap(&network, 50.0, 4.005);
        let b = snap(&network, 50.0, 4.015);

        let table = network.distance_table(&[vec![a], vec![b]], &[]).unwrap();

        assert_eq!(table, vec![0, 100, 100, 0]);
    }

    #[test]
    fn test_asymmetric_table_respects_one_way() {
        let network = fixture_network();
        let a = snap(&network, 50.0, 4.005);
        let b = snap(&network, 50.0, 4.015);
        let c = snap(&network, 50.005, 4.01);

        assert_eq!(c.start_offset, 25);

        let from_dead_end = network
            .distance_table(&[vec![a], vec![b]], &[vec![c]])
            .unwrap();
        assert_eq!(from_dead_end, vec![INVALID_EDGE_WEIGHT, INVALID_EDGE_WEIGHT]);

        let into_one_way = network.distance_table(&[vec![c]], &[vec![a]]).unwrap();
        assert_eq!(into_one_way, vec![75]);
    }

    #[test]
    fn test_same_segment_respects_direction() {
        let network = fixture_network();
        let first = snap(&network, 50.005 - 0.0025, 4.01);
        let second = snap(&network, 50.005 + 0.0025, 4.01);

        let table = network
            .distance_table(&[vec![first], vec![second]], &[])
            .unwrap();

        assert_eq!(table[1], second.start_offset - first.start_offset);
        assert_eq!(table[2], INVALID_EDGE_WEIGHT);
    }

    #[test]
    fn test_table_across_components_is_unavailable() {
        let network = fixture_network();
        let a = snap(&network, 50.0, 4.005);
        let d = snap(&network, 51.0, 5.005);

        assert!(network.distance_table(&[vec![a], vec![d]], &[]).is_none());
        assert!(network.distance_table(&[vec![a]], &[vec![d]]).is_none());
        assert_eq!(network.distance_table(&[vec![d]], &[]), Some(vec![0]));
    }

    #[test]
    fn test_checksum_is_stable() {
        let first = fixture_network();
        let second = fixture_network();
        assert_eq!(first.checksum(), second.checksum());

        let mut file = fixture_network_file();
        file.segments[0].weight += 1;
        let changed = RoadNetwork::from_network_file(file).unwrap();
        assert_ne!(first.checksum(), changed.checksum());
    }

    #[test]
    fn test_rejects_unknown_node() {
        let mut file = fixture_network_file();
        file.segments.push(SegmentRecord {
            from: 0,
            to: 42,
            weight: 1,
            bidirectional: true,
        });

        assert!(matches!(
            RoadNetwork::from_network_file(file),
            Err(NetworkError::UnknownNode {
                segment: 4,
                node: 42
            })
        ));
    }

    #[test]
    fn test_rejects_invalid_node_coordinate() {
        let mut file = fixture_network_file();
        file.nodes.push([95.0, 4.0]);

        assert!(matches!(
            RoadNetwork::from_network_file(file),
            Err(NetworkError::InvalidCoordinate {
                index: 6,
                source: CoordinateError::OutOfRange
            })
        ));
    }

    #[test]
    fn test_parses_network_file() {
        let json = r#"{
            "nodes": [[50.0, 4.0], [50.0, 4.01]],
            "segments": [{ "from": 0, "to": 1, "weight": 12 }]
        }"#;

        let file: NetworkFile = serde_json::from_str(json).unwrap();
        assert!(file.segments[0].bidirectional);

        let network = RoadNetwork::from_network_file(file).unwrap();
        assert_eq!(network.node_count(), 2);
        assert_eq!(network.arcs(1).len(), 1);
    }
}
