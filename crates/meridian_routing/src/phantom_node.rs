use serde::{Deserialize, Serialize};

use crate::{
    constants::INVALID_SEGMENT,
    coordinate::FixedPointCoordinate,
    types::{ComponentId, EdgeWeight, NodeId, SegmentId},
};

/// A location projected onto the closest eligible road segment.
///
/// The segment runs from `start_node` to `end_node`. `start_offset` is the
/// weight between `start_node` and the projected point, `end_offset` the
/// weight between the projected point and `end_node`. Forward travel goes from
/// start to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhantomNode {
    pub location: FixedPointCoordinate,
    pub segment_id: SegmentId,
    pub start_node: NodeId,
    pub end_node: NodeId,
    pub start_offset: EdgeWeight,
    pub end_offset: EdgeWeight,
    pub forward_enabled: bool,
    pub reverse_enabled: bool,
    pub component_id: ComponentId,
}

impl PhantomNode {
    /// A node resolved against another snapshot references ids past the end of
    /// the current graph and is rejected here.
    pub fn is_valid(&self, node_count: usize) -> bool {
        self.location.is_valid()
            && self.segment_id != INVALID_SEGMENT
            && (self.start_node as usize) < node_count
            && (self.end_node as usize) < node_count
            && (self.forward_enabled || self.reverse_enabled)
            && self.start_offset >= 0
            && self.end_offset >= 0
    }
}

/// Candidates resolved for a single input location. Exactly one candidate is
/// populated today.
pub type PhantomNodeCandidates = Vec<PhantomNode>;

#[cfg(test)]
mod tests {
    use super::*;

    fn phantom_node() -> PhantomNode {
        PhantomNode {
            location: FixedPointCoordinate::new(50_000_000, 4_005_000),
            segment_id: 3,
            start_node: 0,
            end_node: 1,
            start_offset: 50,
            end_offset: 50,
            forward_enabled: true,
            reverse_enabled: true,
            component_id: 0,
        }
    }

    #[test]
    fn test_is_valid() {
        assert!(phantom_node().is_valid(2));
    }

    #[test]
    fn test_is_invalid_for_smaller_graph() {
        let node = PhantomNode {
            end_node: 5,
            ..phantom_node()
        };
        assert!(node.is_valid(6));
        assert!(!node.is_valid(5));
    }

    #[test]
    fn test_is_invalid_without_direction() {
        let node = PhantomNode {
            forward_enabled: false,
            reverse_enabled: false,
            ..phantom_node()
        };
        assert!(!node.is_valid(2));
    }

    #[test]
    fn test_is_invalid_with_bad_location_or_segment() {
        let node = PhantomNode {
            location: FixedPointCoordinate::new(91_000_000, 0),
            ..phantom_node()
        };
        assert!(!node.is_valid(2));

        let node = PhantomNode {
            segment_id: INVALID_SEGMENT,
            ..phantom_node()
        };
        assert!(!node.is_valid(2));
    }
}
