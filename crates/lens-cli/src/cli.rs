use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "lens",
    about = "LedgerLens — read-only ledger query service",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the query server
    Serve(ServeArgs),
    /// Load a ledger dump and report its contents
    Inspect(InspectArgs),
    /// Print a random 256-bit digest
    Random,
}

#[derive(Args)]
pub struct ServeArgs {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Address to bind, overriding the configuration file
    #[arg(short, long)]
    pub bind: Option<std::net::SocketAddr>,

    /// Ledger dump to serve, overriding the configuration file
    #[arg(short, long)]
    pub dump: Option<PathBuf>,
}

#[derive(Args)]
pub struct InspectArgs {
    /// Path to a ledger dump file
    pub path: PathBuf,
}
