use crate::args;

/// Load the settings and verify every directory they point at
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct CheckArgs {
    #[command(flatten, next_help_heading = "CONFIG")]
    pub(crate) config: args::ConfigArgs,
}

impl CheckArgs {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let config = self.config.load_config()?;
        config.verify_paths()?;

        if config.plugins.is_empty() {
            for markup in config.markup.iter().filter(|m| m.needs_plugin()) {
                log::warn!("`{markup}` content needs a reader plugin but `PLUGINS` is empty");
            }
        }

        let feeds = config.feeds.resolved();
        log::info!(
            "Settings for `{}` are valid ({} menu entries, {} feeds, links are {})",
            config.sitename,
            config.menuitems.len(),
            feeds.len(),
            if config.base_url().is_relative() {
                "relative"
            } else {
                "absolute"
            }
        );

        Ok(())
    }
}
