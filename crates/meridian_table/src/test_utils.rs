use std::cell::RefCell;

use meridian_routing::{
    bearing::BearingFilter,
    constants::INVALID_EDGE_WEIGHT,
    coordinate::FixedPointCoordinate,
    facade::DataFacade,
    phantom_node::{PhantomNode, PhantomNodeCandidates},
    types::EdgeWeight,
};

pub fn coordinate(lat: f64, lon: f64) -> FixedPointCoordinate {
    FixedPointCoordinate::from_degrees(lat, lon).unwrap()
}

pub enum MockTable {
    /// Returned as is, whatever the group sizes.
    Fixed(Vec<EdgeWeight>),
    /// `row * 1000 + column` for every cell.
    Generated,
    Unavailable,
}

/// Facade snapping every coordinate onto segment 0 and recording the calls it
/// receives.
pub struct MockFacade {
    pub checksum: u32,
    pub node_count: usize,
    pub table: MockTable,
    pub unresolvable: Vec<FixedPointCoordinate>,
    pub corrupt: Vec<FixedPointCoordinate>,
    pub lookups: RefCell<Vec<(FixedPointCoordinate, BearingFilter)>>,
    pub table_calls: RefCell<Vec<(Vec<PhantomNode>, Vec<PhantomNode>)>>,
}

impl MockFacade {
    pub fn new(table: MockTable) -> Self {
        MockFacade {
            checksum: 7,
            node_count: 10,
            table,
            unresolvable: vec![],
            corrupt: vec![],
            lookups: RefCell::new(vec![]),
            table_calls: RefCell::new(vec![]),
        }
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.borrow().len()
    }

    pub fn looked_up(&self) -> Vec<FixedPointCoordinate> {
        self.lookups.borrow().iter().map(|(c, _)| *c).collect()
    }

    pub fn phantom_node(&self, location: FixedPointCoordinate) -> PhantomNode {
        PhantomNode {
            location,
            segment_id: 0,
            start_node: 0,
            end_node: 1,
            start_offset: 0,
            end_offset: 0,
            forward_enabled: true,
            reverse_enabled: true,
            component_id: 0,
        }
    }
}

fn first_candidates(groups: &[PhantomNodeCandidates]) -> Vec<PhantomNode> {
    groups.iter().map(|candidates| candidates[0]).collect()
}

impl DataFacade for MockFacade {
    fn find_nearest_anchor(
        &self,
        coordinate: FixedPointCoordinate,
        filter: BearingFilter,
    ) -> Option<PhantomNode> {
        self.lookups.borrow_mut().push((coordinate, filter));

        if self.unresolvable.contains(&coordinate) {
            return None;
        }

        let mut node = self.phantom_node(coordinate);
        if self.corrupt.contains(&coordinate) {
            node.end_node = self.node_count as u32;
        }

        Some(node)
    }

    fn distance_table(
        &self,
        targets: &[PhantomNodeCandidates],
        sources: &[PhantomNodeCandidates],
    ) -> Option<Vec<EdgeWeight>> {
        self.table_calls
            .borrow_mut()
            .push((first_candidates(targets), first_candidates(sources)));

        let rows = if sources.is_empty() {
            targets.len()
        } else {
            sources.len()
        };

        match &self.table {
            MockTable::Fixed(table) => Some(table.clone()),
            MockTable::Generated => Some(
                (0..rows)
                    .flat_map(|row| {
                        (0..targets.len()).map(move |column| {
                            EdgeWeight::try_from(row * 1000 + column).unwrap_or(INVALID_EDGE_WEIGHT)
                        })
                    })
                    .collect(),
            ),
            MockTable::Unavailable => None,
        }
    }

    fn checksum(&self) -> u32 {
        self.checksum
    }

    fn node_count(&self) -> usize {
        self.node_count
    }
}
