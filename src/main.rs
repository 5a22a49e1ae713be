mod archive;
mod cli;
mod config;
mod executable;
mod fixture;
mod ingest;
mod paths;
mod store;
mod util;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        util::ui::error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Seed { base_dir }) => cli::seed::run(base_dir, cli.store),
        Some(Commands::List { json }) => cli::list::run(cli.store, json),
        Some(Commands::Show { execid, json }) => cli::show::run(cli.store, &execid, json),
        Some(Commands::Verify { execid }) => cli::verify::run(cli.store, execid.as_deref()),
        Some(Commands::Remove { execid }) => cli::remove::run(cli.store, &execid),
        Some(Commands::Config {
            store_dir,
            base_dir,
        }) => cli::configure::run(store_dir, base_dir),
        None => {
            // No command provided, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
    }
}
