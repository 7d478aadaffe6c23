use std::env;
use std::io::Write;
use std::path;

use azukiiro_docs::Config;
use azukiiro_docs::config::CONFIG_FILE;

use crate::error::*;

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ConfigArgs {
    /// Descriptor file to use [default: nearest _docs.yml, else built-in]
    #[arg(short, long, value_name = "FILE")]
    config: Option<path::PathBuf>,
}

impl ConfigArgs {
    pub(crate) fn load_config(&self) -> Result<Config> {
        if let Some(config_path) = self.config.as_deref() {
            let config = Config::from_file(config_path).with_context(|| {
                anyhow::format_err!("Error reading config file {}", config_path.display())
            })?;
            return Ok(config);
        }

        self.discover_config(env::current_dir())
    }

    fn discover_config(&self, cwd: std::io::Result<path::PathBuf>) -> Result<Config> {
        let cwd = cwd.context("Failed to read current directory")?;
        match Config::from_cwd(cwd)? {
            Some(config) => Ok(config),
            None => {
                log::warn!("No `{CONFIG_FILE}` found, using the built-in Azukiiro descriptor");
                Ok(azukiiro_docs::azukiiro().clone())
            }
        }
    }
}

pub(crate) fn init_logging(level: log::LevelFilter, color: colorchoice::ColorChoice) {
    let write_style = match color {
        colorchoice::ColorChoice::Auto => env_logger::WriteStyle::Auto,
        colorchoice::ColorChoice::AlwaysAnsi | colorchoice::ColorChoice::Always => {
            env_logger::WriteStyle::Always
        }
        colorchoice::ColorChoice::Never => env_logger::WriteStyle::Never,
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).write_style(write_style);
    builder.format(|f, record| {
        let style = f.default_level_style(record.level());
        let level = record.level().as_str().to_lowercase();
        writeln!(f, "{style}[{level}]{style:#} {}", record.args())
    });
    builder.init();
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unreadable_cwd_is_reported() {
        let args = ConfigArgs { config: None };
        let err = args
            .discover_config(Err(std::io::Error::from(std::io::ErrorKind::NotFound)))
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to read current directory");
    }

    #[test]
    fn discovers_nearest_file() {
        let args = ConfigArgs { config: None };
        let config = args
            .discover_config(Ok(path::PathBuf::from("tests/cmd/sidebar.in")))
            .unwrap();
        assert_eq!(config.root, path::Path::new("tests/cmd/sidebar.in"));
        assert_eq!(config.theme_config.sidebar.len(), 2);
    }
}
