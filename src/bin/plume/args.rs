use std::path;

use anyhow::Context as _;

use crate::check;
use crate::debug;
use crate::init;

/// Validate and inspect the settings of a Pelican-style static site
#[derive(Clone, Debug, clap::Parser)]
#[command(version)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,

    #[command(flatten)]
    pub(crate) color: colorchoice_clap::Color,

    #[command(flatten)]
    pub(crate) verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,
}

#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
pub(crate) enum Command {
    Check(check::CheckArgs),
    Init(init::InitArgs),
    #[command(subcommand)]
    Debug(debug::DebugCommands),
}

impl Command {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        match self {
            Self::Check(cmd) => cmd.run(),
            Self::Init(cmd) => cmd.run(),
            Self::Debug(cmd) => cmd.run(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ConfigArgs {
    /// Settings file to use [default: nearest pelicanconf.yml]
    #[arg(short, long, value_name = "FILE")]
    config: Option<path::PathBuf>,
}

impl ConfigArgs {
    pub(crate) fn load_config(&self) -> anyhow::Result<plume_config::SiteConfiguration> {
        let config = if let Some(config_path) = &self.config {
            plume_config::SiteConfiguration::load(config_path).with_context(|| {
                format!("Error reading config file {}", config_path.display())
            })?
        } else {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            plume_config::SiteConfiguration::from_cwd(cwd)?
        };
        log::debug!("Loaded settings for `{}`", config.sitename);
        Ok(config)
    }
}
