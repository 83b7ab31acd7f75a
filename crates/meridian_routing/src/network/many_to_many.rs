use std::cmp::Ordering;
use std::collections::BinaryHeap;

use fxhash::FxHashMap;

use crate::constants::INVALID_EDGE_WEIGHT;
use crate::phantom_node::{PhantomNode, PhantomNodeCandidates};
use crate::types::{EdgeWeight, NodeId};

use super::RoadNetwork;

#[derive(Eq, Copy, Clone, Debug)]
struct HeapItem {
    node_id: NodeId,
    weight: i64,
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &HeapItem) -> bool {
        self.weight == other.weight
    }
}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &HeapItem) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip weight to make this a min-heap
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| self.node_id.cmp(&other.node_id))
    }
}

struct NodeData {
    weight: i64,
    settled: bool,
}

/// One-to-all search from a phantom node. The state is reused between
/// sources.
struct OneToAllSearch<'a> {
    network: &'a RoadNetwork,
    heap: BinaryHeap<HeapItem>,

    // Only the touched part of the graph is stored
    data: FxHashMap<NodeId, NodeData>,
}

impl<'a> OneToAllSearch<'a> {
    fn new(network: &'a RoadNetwork) -> Self {
        OneToAllSearch {
            network,
            heap: BinaryHeap::with_capacity(1024),
            data: FxHashMap::default(),
        }
    }

    fn push(&mut self, node_id: NodeId, weight: i64) {
        let data = self.data.entry(node_id).or_insert(NodeData {
            weight: i64::MAX,
            settled: false,
        });

        if !data.settled && weight < data.weight {
            data.weight = weight;
            self.heap.push(HeapItem { node_id, weight });
        }
    }

    fn run(&mut self, source: &PhantomNode) {
        self.heap.clear();
        self.data.clear();

        if source.forward_enabled {
            self.push(source.end_node, source.end_offset as i64);
        }
        if source.reverse_enabled {
            self.push(source.start_node, source.start_offset as i64);
        }

        let network = self.network;

        while let Some(HeapItem { node_id, weight }) = self.heap.pop() {
            match self.data.get_mut(&node_id) {
                Some(data) if !data.settled && weight <= data.weight => data.settled = true,
                _ => continue,
            }

            for arc in network.arcs(node_id) {
                self.push(arc.head, weight + arc.weight as i64);
            }
        }
    }

    fn weight(&self, node_id: NodeId) -> Option<i64> {
        self.data
            .get(&node_id)
            .filter(|data| data.settled)
            .map(|data| data.weight)
    }

    fn cost_to(&self, source: &PhantomNode, target: &PhantomNode) -> Option<i64> {
        let mut best: Option<i64> = None;
        let mut relax = |cost: i64| best = Some(best.map_or(cost, |best| best.min(cost)));

        if target.forward_enabled {
            if let Some(weight) = self.weight(target.start_node) {
                relax(weight + target.start_offset as i64);
            }
        }

        if target.reverse_enabled {
            if let Some(weight) = self.weight(target.end_node) {
                relax(weight + target.end_offset as i64);
            }
        }

        // Both ends on the same segment, target ahead in travel direction
        if source.segment_id == target.segment_id {
            if source.forward_enabled
                && target.forward_enabled
                && target.start_offset >= source.start_offset
            {
                relax((target.start_offset - source.start_offset) as i64);
            }

            if source.reverse_enabled
                && target.reverse_enabled
                && target.end_offset >= source.end_offset
            {
                relax((target.end_offset - source.end_offset) as i64);
            }
        }

        best
    }
}

fn to_edge_weight(cost: Option<i64>) -> EdgeWeight {
    match cost {
        Some(cost) if cost < INVALID_EDGE_WEIGHT as i64 => cost as EdgeWeight,
        _ => INVALID_EDGE_WEIGHT,
    }
}

/// Row-major table with one row per source. Empty `sources` reuses the
/// targets for both axes.
pub(crate) fn distance_table(
    network: &RoadNetwork,
    targets: &[PhantomNodeCandidates],
    sources: &[PhantomNodeCandidates],
) -> Vec<EdgeWeight> {
    let sources = if sources.is_empty() { targets } else { sources };
    let mut table = Vec::with_capacity(sources.len() * targets.len());
    let mut search = OneToAllSearch::new(network);

    for source_candidates in sources {
        let Some(source) = source_candidates.first() else {
            table.extend(std::iter::repeat_n(INVALID_EDGE_WEIGHT, targets.len()));
            continue;
        };

        search.run(source);

        table.extend(targets.iter().map(|target_candidates| {
            to_edge_weight(
                target_candidates
                    .first()
                    .and_then(|target| search.cost_to(source, target)),
            )
        }));
    }

    table
}
