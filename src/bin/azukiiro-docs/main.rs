mod args;
mod debug;
mod edit_link;
mod error;
mod export;

use clap::Parser;
use proc_exit::prelude::*;

fn main() {
    human_panic::setup_panic!();
    let result = run();
    proc_exit::exit(result);
}

fn run() -> proc_exit::ExitResult {
    let cli = Cli::parse();

    cli.color.write_global();
    args::init_logging(
        cli.verbose.log_level_filter(),
        colorchoice::ColorChoice::global(),
    );

    cli.command.run().with_code(proc_exit::Code::FAILURE)?;

    Ok(())
}

/// Site descriptor tooling for the Azukiiro documentation site
#[derive(Debug, clap::Parser)]
#[command(name = "azukiiro-docs", about, version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    color: colorchoice_clap::Color,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::WarnLevel>,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    Export(export::ExportArgs),
    EditLink(edit_link::EditLinkArgs),
    #[command(subcommand)]
    Debug(debug::DebugCommands),
}

impl Command {
    fn run(&self) -> error::Result<()> {
        match self {
            Self::Export(cmd) => cmd.run(),
            Self::EditLink(cmd) => cmd.run(),
            Self::Debug(cmd) => cmd.run(),
        }
    }
}

#[test]
fn verify_app() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
