use std::ops::Range;

use meridian_routing::{
    coordinate::FixedPointCoordinate, facade::DataFacade, phantom_node::PhantomNodeCandidates,
};

use crate::{
    error::TableError, parameters::TableParameters, resolve::PhantomResolver,
    validate::{RequestMode, ValidatedRequest},
};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LocationGroups {
    pub targets: Vec<PhantomNodeCandidates>,
    /// Empty when the targets serve as sources too.
    pub sources: Vec<PhantomNodeCandidates>,
}

fn resolve_group<F: DataFacade>(
    resolver: &PhantomResolver<'_, F>,
    coordinates: &[FixedPointCoordinate],
    slots: Range<usize>,
    max_locations: usize,
) -> Result<Vec<PhantomNodeCandidates>, TableError> {
    slots
        .zip(coordinates)
        .take(max_locations)
        .map(|(index, coordinate)| {
            resolver
                .resolve(index, *coordinate)
                .map(|node| vec![node])
        })
        .collect()
}

/// Resolves targets then sources, stopping at the first failure. Each group is
/// truncated to `max_locations`, keeping the first locations.
pub fn build_groups<F: DataFacade>(
    facade: &F,
    parameters: &TableParameters,
    request: &ValidatedRequest,
    max_locations: usize,
) -> Result<LocationGroups, TableError> {
    let resolver = PhantomResolver::new(facade, parameters);

    let (target_coordinates, source_coordinates) = match request.mode {
        RequestMode::Symmetric => (parameters.coordinates.as_slice(), [].as_slice()),
        RequestMode::Asymmetric => (
            parameters.destinations.as_slice(),
            parameters.sources.as_slice(),
        ),
    };

    let targets = resolve_group(
        &resolver,
        target_coordinates,
        request.slots.targets(),
        max_locations,
    )?;
    let sources = resolve_group(
        &resolver,
        source_coordinates,
        request.slots.sources(),
        max_locations,
    )?;

    Ok(LocationGroups { targets, sources })
}
