use azukiiro_docs::outline::Outline;

use crate::args;
use crate::error::*;

/// Print site debug information
#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
pub(crate) enum DebugCommands {
    /// Prints the loaded descriptor
    Config {
        #[command(flatten, next_help_heading = "CONFIG")]
        config: args::ConfigArgs,
    },

    /// Prints the navigation bar and sidebar in render order
    Sidebar {
        #[command(flatten, next_help_heading = "CONFIG")]
        config: args::ConfigArgs,
    },

    /// Prints the edit URL of every sidebar page
    EditLinks {
        #[command(flatten, next_help_heading = "CONFIG")]
        config: args::ConfigArgs,
    },

    /// Reports authoring problems, failing if any are found
    Check {
        #[command(flatten, next_help_heading = "CONFIG")]
        config: args::ConfigArgs,
    },
}

impl DebugCommands {
    pub(crate) fn run(&self) -> Result<()> {
        match self {
            Self::Config { config } => {
                let config = config.load_config()?;
                anstream::print!("{config}");
            }
            Self::Sidebar { config } => {
                let config = config.load_config()?;
                anstream::print!("{}", Outline::new(&config));
            }
            Self::EditLinks { config } => {
                let config = config.load_config()?;
                let Some(edit_link) = config.theme_config.edit_link.as_ref() else {
                    anyhow::bail!("No `editLink` configured");
                };
                for link in config.theme_config.sidebar.links() {
                    match link.source_path() {
                        Some(source) => {
                            anstream::println!("{link} -> {}", edit_link.url_for(&source));
                        }
                        None => log::debug!("Skipping `{link}`, not a page"),
                    }
                }
            }
            Self::Check { config } => {
                let config = config.load_config()?;
                let issues = azukiiro_docs::lint::check(&config);
                for issue in &issues {
                    anstream::println!("{issue}");
                }
                if !issues.is_empty() {
                    anyhow::bail!("{} issue(s) found", issues.len());
                }
                log::info!("No issues found");
            }
        }

        Ok(())
    }
}
