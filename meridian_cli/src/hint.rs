use std::path::PathBuf;

use anyhow::bail;
use clap::Subcommand;
use meridian_routing::{
    bearing::{Bearing, BearingFilter},
    coordinate::FixedPointCoordinate,
    facade::DataFacade,
    hint::{decode_hint, encode_hint},
    network::RoadNetwork,
};

#[derive(Subcommand)]
pub enum HintSubcommands {
    /// Snaps a location and prints the hint for it
    Encode {
        #[arg(short, long)]
        network: PathBuf,

        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        #[arg(short, long)]
        bearing: Option<i16>,

        #[arg(short, long, requires = "bearing")]
        range: Option<i16>,
    },
    /// Prints the location stored in a hint
    Decode {
        hint: String,

        /// Also check the hint against this network
        #[arg(short, long)]
        network: Option<PathBuf>,
    },
}

pub fn run(subcommand: HintSubcommands) -> Result<(), anyhow::Error> {
    match subcommand {
        HintSubcommands::Encode {
            network,
            lat,
            lon,
            bearing,
            range,
        } => {
            let network = RoadNetwork::from_file(&network)?;
            let coordinate = FixedPointCoordinate::from_degrees(lat, lon)?;

            let bearing = bearing.map(|bearing| Bearing::new(bearing, range));
            if bearing.is_some_and(|bearing| !bearing.is_valid()) {
                bail!("Bearing must be within 0..=360 and range within 0..=180");
            }

            let Some(node) =
                network.find_nearest_anchor(coordinate, BearingFilter::from_input(bearing.as_ref()))
            else {
                bail!("No segment found near {}", coordinate);
            };

            println!("{}", encode_hint(&node)?);
            println!("checksum {}", network.checksum());
        }
        HintSubcommands::Decode { hint, network } => {
            let node = decode_hint(&hint)?;
            println!("{}", serde_json::to_string_pretty(&node)?);

            if let Some(network) = network {
                let network = RoadNetwork::from_file(&network)?;
                if node.is_valid(network.node_count()) {
                    println!("valid for network {}", network.checksum());
                } else {
                    bail!("Hint does not fit network {}", network.checksum());
                }
            }
        }
    }

    Ok(())
}
