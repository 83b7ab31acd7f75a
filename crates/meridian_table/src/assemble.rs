use meridian_routing::{
    facade::DataFacade, phantom_node::PhantomNodeCandidates, timer::ScopedTimer,
    types::EdgeWeight,
};
use tracing::debug;

use crate::{error::TableError, groups::LocationGroups, response::TableResponse};

/// Splits a flat row-major table into `rows` rows of `columns` entries.
pub fn reshape(
    table: Vec<EdgeWeight>,
    rows: usize,
    columns: usize,
) -> Result<Vec<Vec<EdgeWeight>>, TableError> {
    if table.len() != rows * columns {
        debug!(
            "Expected a {}x{} table, got {} entries",
            rows,
            columns,
            table.len()
        );
        return Err(TableError::EngineUnavailable);
    }

    if columns == 0 {
        return Ok(vec![vec![]; rows]);
    }

    Ok(table.chunks(columns).map(<[EdgeWeight]>::to_vec).collect())
}

fn mapped_coordinates(group: &[PhantomNodeCandidates]) -> Vec<[f64; 2]> {
    group
        .iter()
        .filter_map(|candidates| candidates.first())
        .map(|node| node.location.to_degrees())
        .collect()
}

/// Runs the distance engine on the resolved groups and shapes its answer into
/// one row per source.
pub fn assemble_table<F: DataFacade>(
    facade: &F,
    groups: &LocationGroups,
    mapped_points: bool,
) -> Result<TableResponse, TableError> {
    let table = {
        let _timer = ScopedTimer::start("distance_table");
        facade.distance_table(&groups.targets, &groups.sources)
    }
    .ok_or(TableError::EngineUnavailable)?;

    let columns = groups.targets.len();
    let rows = if groups.sources.is_empty() {
        groups.targets.len()
    } else {
        groups.sources.len()
    };

    let mut response = TableResponse {
        distance_table: reshape(table, rows, columns)?,
        ..Default::default()
    };

    if mapped_points {
        response.target_mapped_coordinates = Some(mapped_coordinates(&groups.targets));
        if !groups.sources.is_empty() {
            response.source_mapped_coordinates = Some(mapped_coordinates(&groups.sources));
        }
    }

    Ok(response)
}
