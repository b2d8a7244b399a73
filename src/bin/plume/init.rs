use std::fs;
use std::path;

use anyhow::Context as _;

const PELICANCONF_YML: &str = "AUTHOR: Your Name
SITENAME: My Blog
SITEURL: ''

PATH: content

TIMEZONE: UTC

DEFAULT_LANG: en

# Feed generation is usually not desired when developing
FEED_ALL_ATOM: null
CATEGORY_FEED_ATOM: null
TRANSLATION_FEED_ATOM: null
AUTHOR_FEED_ATOM: null
AUTHOR_FEED_RSS: null

MAIN_MENU: true
MENUITEMS:
  - [Archives, /archives.html]
  - [Categories, /categories.html]
  - [Tags, /tags.html]

DEFAULT_PAGINATION: 10

# Document-relative URLs are handy while developing
RELATIVE_URLS: true

MARKUP: [md]

THEME: notmyidea
";

/// Create a starter `pelicanconf.yml`
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct InitArgs {
    /// Target directory
    #[arg(default_value = "./")]
    pub(crate) directory: path::PathBuf,
}

impl InitArgs {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        create_starter(&self.directory).context("Could not create a new site")?;
        log::info!("Created new site settings at {}", self.directory.display());
        Ok(())
    }
}

fn create_starter(dest: &path::Path) -> anyhow::Result<()> {
    let file_path = dest.join(plume_config::CONFIG_FILE);
    if file_path.exists() {
        anyhow::bail!("`{}` already exists", file_path.display());
    }

    fs::create_dir_all(dest.join("content"))?;
    fs::write(&file_path, PELICANCONF_YML)?;
    log::debug!("Wrote {}", file_path.display());

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn starter_is_valid() {
        let config: plume_config::SiteConfiguration = PELICANCONF_YML.parse().unwrap();
        assert_eq!(config.sitename, "My Blog");
        assert!(config.feeds.all_disabled());
        assert!(config.theme.unwrap().is_builtin());
    }

    #[test]
    fn refused_starter_leaves_directory_alone() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(plume_config::CONFIG_FILE), "AUTHOR: Jane\n").unwrap();

        assert!(create_starter(dir.path()).is_err());
        assert!(!dir.path().join("content").exists());
        assert_eq!(
            fs::read_to_string(dir.path().join(plume_config::CONFIG_FILE)).unwrap(),
            "AUTHOR: Jane\n"
        );
    }
}
