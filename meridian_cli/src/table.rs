use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::Args;
use comfy_table::Table;
use meridian_routing::{constants::INVALID_EDGE_WEIGHT, network::RoadNetwork, types::EdgeWeight};
use meridian_table::{
    DistanceTablePlugin, TableParameters, TableRequest, TableResponse,
    plugin::DEFAULT_MAX_LOCATIONS,
};
use tracing::info;

#[derive(Args)]
pub struct TableArgs {
    /// Road network JSON file
    #[arg(short, long)]
    network: PathBuf,

    /// Table request JSON file
    #[arg(short, long)]
    input: PathBuf,

    #[arg(short, long, default_value_t = DEFAULT_MAX_LOCATIONS)]
    max_locations: usize,

    /// Print a grid instead of the JSON response
    #[arg(short, long)]
    pretty: bool,
}

pub fn run(args: TableArgs) -> Result<(), anyhow::Error> {
    let network = RoadNetwork::from_file(&args.network)
        .with_context(|| format!("Failed to load {}", args.network.display()))?;

    let input = std::fs::read_to_string(&args.input)?;
    let request: TableRequest = serde_json::from_str(&input)?;
    let parameters = TableParameters::try_from(request)?;

    let plugin = DistanceTablePlugin::new(Arc::new(network), args.max_locations);
    let response = plugin.handle_request(&parameters)?;
    info!(
        "Computed a {}x{} table",
        response.distance_table.len(),
        response.distance_table.first().map_or(0, Vec::len)
    );

    if args.pretty {
        println!("{}", render(&response));
    } else {
        println!("{}", serde_json::to_string_pretty(&response)?);
    }

    Ok(())
}

fn format_cell(weight: EdgeWeight) -> String {
    if weight == INVALID_EDGE_WEIGHT {
        String::from("-")
    } else {
        weight.to_string()
    }
}

fn render(response: &TableResponse) -> Table {
    let columns = response.distance_table.first().map_or(0, Vec::len);

    let mut table = Table::new();
    table.set_header(
        std::iter::once(String::new()).chain((0..columns).map(|column| format!("to {}", column))),
    );

    for (row, weights) in response.distance_table.iter().enumerate() {
        table.add_row(
            std::iter::once(format!("from {}", row))
                .chain(weights.iter().copied().map(format_cell)),
        );
    }

    table
}
