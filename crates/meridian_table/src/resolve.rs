use meridian_routing::{
    bearing::BearingFilter, coordinate::FixedPointCoordinate, facade::DataFacade,
    hint::decode_hint, phantom_node::PhantomNode,
};
use tracing::{debug, error};

use crate::{error::TableError, parameters::TableParameters};

/// Turns the locations of one request into phantom nodes, preferring the
/// client's hints over a nearest segment lookup.
pub struct PhantomResolver<'a, F: DataFacade> {
    facade: &'a F,
    parameters: &'a TableParameters,
    node_count: usize,
    use_hints: bool,
}

impl<'a, F: DataFacade> PhantomResolver<'a, F> {
    pub fn new(facade: &'a F, parameters: &'a TableParameters) -> Self {
        let checksum_matches = parameters.checksum == Some(facade.checksum());

        if !parameters.hints.is_empty() && !checksum_matches {
            debug!(
                "Ignoring hints, request checksum {:?} does not match {}",
                parameters.checksum,
                facade.checksum()
            );
        }

        PhantomResolver {
            facade,
            parameters,
            node_count: facade.node_count(),
            use_hints: checksum_matches,
        }
    }

    fn hinted(&self, index: usize) -> Option<PhantomNode> {
        if !self.use_hints {
            return None;
        }

        let hint = self.parameters.hints.get(index).filter(|h| !h.is_empty())?;

        match decode_hint(hint) {
            Ok(node) if node.is_valid(self.node_count) => Some(node),
            Ok(_) => {
                debug!("Hint {} does not fit the loaded network", index);
                None
            }
            Err(err) => {
                debug!("Hint {} could not be decoded: {}", index, err);
                None
            }
        }
    }

    /// `index` is the position of the location in the bearing and hint lists.
    pub fn resolve(
        &self,
        index: usize,
        coordinate: FixedPointCoordinate,
    ) -> Result<PhantomNode, TableError> {
        if let Some(node) = self.hinted(index) {
            return Ok(node);
        }

        let filter = BearingFilter::from_input(self.parameters.bearings.get(index));
        let node = self
            .facade
            .find_nearest_anchor(coordinate, filter)
            .ok_or(TableError::UnresolvableLocation { index })?;

        if !node.is_valid(self.node_count) {
            error!(
                "Location {} resolved to segment {} outside of a network with {} nodes",
                index, node.segment_id, self.node_count
            );
            return Err(TableError::CorruptSnapshot { index });
        }

        Ok(node)
    }
}
