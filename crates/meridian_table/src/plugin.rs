use std::sync::Arc;

use meridian_routing::facade::DataFacade;

use crate::{
    assemble::assemble_table, error::TableError, groups::build_groups,
    parameters::TableParameters, response::TableResponse, validate::validate,
};

pub const TABLE_DESCRIPTOR: &str = "table";

pub const DEFAULT_MAX_LOCATIONS: usize = 100;

/// Computes distance tables against one loaded network snapshot.
pub struct DistanceTablePlugin<F: DataFacade> {
    facade: Arc<F>,
    max_locations: usize,
}

impl<F: DataFacade> DistanceTablePlugin<F> {
    pub fn new(facade: Arc<F>, max_locations: usize) -> Self {
        DistanceTablePlugin {
            facade,
            max_locations,
        }
    }

    pub fn descriptor(&self) -> &'static str {
        TABLE_DESCRIPTOR
    }

    pub fn facade(&self) -> &F {
        &self.facade
    }

    pub fn max_locations(&self) -> usize {
        self.max_locations
    }

    pub fn handle_request(
        &self,
        parameters: &TableParameters,
    ) -> Result<TableResponse, TableError> {
        let request = validate(parameters)?;
        let groups = build_groups(
            self.facade.as_ref(),
            parameters,
            &request,
            self.max_locations,
        )?;

        assemble_table(self.facade.as_ref(), &groups, parameters.mapped_points)
    }
}
