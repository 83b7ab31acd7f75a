use crate::{
    bearing::BearingFilter,
    coordinate::FixedPointCoordinate,
    phantom_node::{PhantomNode, PhantomNodeCandidates},
    types::EdgeWeight,
};

/// Read-only view of a loaded road network snapshot.
///
/// Queries take `&self` and never mutate the snapshot. Sharing one instance
/// across threads is up to the owner, which requires `Send + Sync` where it
/// hands the instance out.
pub trait DataFacade {
    /// Closest segment to `coordinate` with a travel direction inside
    /// `filter`, projected onto that segment.
    fn find_nearest_anchor(
        &self,
        coordinate: FixedPointCoordinate,
        filter: BearingFilter,
    ) -> Option<PhantomNode>;

    /// Row-major costs with one row per source and one column per target.
    /// Empty `sources` means the targets are used for both axes. `None` when
    /// no table can be computed for these locations.
    fn distance_table(
        &self,
        targets: &[PhantomNodeCandidates],
        sources: &[PhantomNodeCandidates],
    ) -> Option<Vec<EdgeWeight>>;

    fn checksum(&self) -> u32;

    fn node_count(&self) -> usize;
}
