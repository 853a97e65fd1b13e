use lens_server::{LensServer, ServerConfig};
use lens_store::LedgerDump;

use crate::cli::{Cli, Command, InspectArgs, ServeArgs};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Inspect(args) => cmd_inspect(args),
        Command::Random => cmd_random(),
    }
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::from_file(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(dump) = args.dump {
        config.dump_path = Some(dump);
    }

    let server = LensServer::from_config(config)?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.serve())?;
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let dump = LedgerDump::from_file(&args.path)?;
    let store = dump.into_store();
    println!("{}", args.path.display());
    println!("  accounts: {}", store.account_count());
    println!("  owned objects: {}", store.owned_count());
    Ok(())
}

fn cmd_random() -> anyhow::Result<()> {
    println!("{}", lens_query::random_digest().random);
    Ok(())
}
