use std::path::PathBuf;

use clap::{Parser, Subcommand};
use meridian_routing::{facade::DataFacade, network::RoadNetwork};
use mimalloc::MiMalloc;
use tracing::info;

use crate::{hint::HintSubcommands, table::TableArgs};

mod hint;
mod table;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Computes a distance table for a JSON request
    #[command(visible_alias = "t")]
    Table {
        #[command(flatten)]
        args: TableArgs,
    },
    Hint {
        #[command(subcommand)]
        commands: HintSubcommands,
    },
    /// Prints the checksum hints have to be sent with
    Checksum {
        #[arg(short, long)]
        network: PathBuf,
    },
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Some(Commands::Table { args }) => table::run(args)?,
        Some(Commands::Hint { commands }) => hint::run(commands)?,
        Some(Commands::Checksum { network }) => {
            let network = RoadNetwork::from_file(&network)?;
            info!(
                "{} nodes, {} segments",
                network.node_count(),
                network.segments().len()
            );
            println!("{}", network.checksum());
        }
        None => {}
    }

    Ok(())
}
