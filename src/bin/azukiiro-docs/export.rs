use std::fs;
use std::path;

use azukiiro_docs::export::Format;

use crate::args;
use crate::error::*;

/// Write the descriptor for the renderer
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ExportArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t)]
    format: Format,

    /// Write to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<path::PathBuf>,

    #[command(flatten, next_help_heading = "CONFIG")]
    config: args::ConfigArgs,
}

impl ExportArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let config = self.config.load_config()?;
        let rendered = azukiiro_docs::export::render(&config, self.format)?;

        match self.output.as_deref() {
            Some(output) => {
                fs::write(output, rendered)
                    .with_context(|| anyhow::format_err!("Failed to write {}", output.display()))?;
                log::info!("Wrote {} descriptor to {}", self.format, output.display());
            }
            None => {
                anstream::print!("{rendered}");
            }
        }

        Ok(())
    }
}
