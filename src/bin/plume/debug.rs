use crate::args;

/// Print site debug information
#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
pub(crate) enum DebugCommands {
    /// Prints the loaded settings
    Config {
        #[command(flatten, next_help_heading = "CONFIG")]
        config: args::ConfigArgs,
    },

    /// Prints menu, link and social entries in declaration order
    Menu {
        #[command(flatten, next_help_heading = "CONFIG")]
        config: args::ConfigArgs,
    },

    /// Prints the feed files the generator will write
    Feeds {
        #[command(flatten, next_help_heading = "CONFIG")]
        config: args::ConfigArgs,
    },
}

impl DebugCommands {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        match self {
            Self::Config { config } => {
                let config = config.load_config()?;
                print!("{config}");
            }
            Self::Menu { config } => {
                let config = config.load_config()?;
                if !config.main_menu {
                    log::info!("`MAIN_MENU` is off; the theme will not render the menu");
                }
                println!("menu:");
                for item in &config.menuitems {
                    println!("  {item}");
                }
                if !config.links.is_empty() {
                    println!("links:");
                    for link in &config.links {
                        println!("  {link}");
                    }
                }
                println!("social:");
                for link in &config.social {
                    println!("  {link}");
                }
            }
            Self::Feeds { config } => {
                let config = config.load_config()?;
                for (key, feed, default) in config.feeds.iter() {
                    match feed {
                        plume_config::Feed::Unspecified => println!("{key}: {default} (default)"),
                        plume_config::Feed::Disabled => println!("{key}: disabled"),
                        plume_config::Feed::Enabled(path) => println!("{key}: {path}"),
                    }
                }
            }
        }

        Ok(())
    }
}
