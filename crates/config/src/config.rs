use std::collections::HashMap;
use std::fmt;
use std::path;
use std::str::FromStr;

use serde::de::DeserializeOwned;

use crate::*;

pub const CONFIG_FILE: &str = "pelicanconf.yml";

/// Every recognized setting of a site, validated and typed.
///
/// Built once by [`SiteConfiguration::load`] and never mutated afterwards; share
/// it by reference with whatever needs it.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub struct SiteConfiguration {
    /// Directory holding the settings file; relative paths resolve against it.
    #[serde(skip)]
    pub root: path::PathBuf,
    pub author: String,
    pub sitename: String,
    pub siteurl: SiteUrl,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sitetitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sitesubtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sitedescription: Option<String>,
    pub path: path::PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<Timezone>,
    pub default_lang: LanguageCode,
    #[serde(flatten)]
    pub feeds: Feeds,
    pub main_menu: bool,
    pub menuitems: Vec<Link>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
    pub default_pagination: Pagination,
    pub relative_urls: bool,
    pub markup: Vec<Markup>,
    pub plugin_paths: Vec<path::PathBuf>,
    pub plugins: Vec<PluginName>,
    pub ignore_files: IgnoreFiles,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<AbsoluteUrl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_username: Option<TwitterHandle>,
    pub social: Vec<SocialLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sitelogo: Option<UrlPath>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<UrlPath>,
    pub load_content_cache: bool,
    /// Settings this crate does not know, in declaration order (usually theme options).
    #[serde(flatten)]
    pub extra: serde_yaml::Mapping,
}

impl SiteConfiguration {
    pub fn load<P: Into<path::PathBuf>>(path: P) -> Result<Self> {
        Self::load_internal(path.into())
    }

    fn load_internal(path: path::PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|source| Error::Read {
            path: path.clone(),
            source,
        })?;
        let mapping = parse_mapping(&content).map_err(|source| Error::Syntax {
            origin: format!("`{}`", path.display()),
            source,
        })?;

        let mut root = path;
        root.pop(); // Remove filename
        if root == path::Path::new("") {
            root = path::Path::new(".").to_owned();
        }

        Self::from_mapping(mapping, root)
    }

    /// Load the nearest `pelicanconf.yml` in `cwd` or one of its parents.
    pub fn from_cwd<P: Into<path::PathBuf>>(cwd: P) -> Result<Self> {
        Self::from_cwd_internal(cwd.into())
    }

    fn from_cwd_internal(cwd: path::PathBuf) -> Result<Self> {
        let file_path = find_project_file(&cwd, CONFIG_FILE).ok_or_else(|| Error::NotFound {
            name: CONFIG_FILE,
            dir: cwd.clone(),
        })?;
        log::debug!("Using config file `{}`", file_path.display());
        Self::load(file_path)
    }

    /// Validate an already-parsed document.  Relative paths resolve against `root`.
    pub fn from_mapping(mapping: serde_yaml::Mapping, root: path::PathBuf) -> Result<Self> {
        let mut settings = Settings::split(mapping)?;

        let config = Self {
            root,
            author: settings.required_text(keys::AUTHOR)?,
            sitename: settings.required_text(keys::SITENAME)?,
            siteurl: settings.or_default(keys::SITEURL)?,
            sitetitle: settings.optional(keys::SITETITLE)?,
            sitesubtitle: settings.optional(keys::SITESUBTITLE)?,
            sitedescription: settings.optional(keys::SITEDESCRIPTION)?,
            path: settings
                .optional(keys::PATH)?
                .unwrap_or_else(|| path::PathBuf::from(".")),
            timezone: settings.optional(keys::TIMEZONE)?,
            default_lang: settings.or_default(keys::DEFAULT_LANG)?,
            feeds: Feeds {
                feed_all_atom: settings.feed(keys::FEED_ALL_ATOM)?,
                category_feed_atom: settings.feed(keys::CATEGORY_FEED_ATOM)?,
                translation_feed_atom: settings.feed(keys::TRANSLATION_FEED_ATOM)?,
                author_feed_atom: settings.feed(keys::AUTHOR_FEED_ATOM)?,
                author_feed_rss: settings.feed(keys::AUTHOR_FEED_RSS)?,
            },
            main_menu: settings.or_default(keys::MAIN_MENU)?,
            menuitems: settings.or_default(keys::MENUITEMS)?,
            links: settings.or_default(keys::LINKS)?,
            default_pagination: settings.or_default(keys::DEFAULT_PAGINATION)?,
            relative_urls: settings.or_default(keys::RELATIVE_URLS)?,
            markup: settings
                .optional(keys::MARKUP)?
                .unwrap_or_else(Markup::defaults),
            plugin_paths: settings.or_default(keys::PLUGIN_PATHS)?,
            plugins: settings.or_default(keys::PLUGINS)?,
            ignore_files: settings.or_default(keys::IGNORE_FILES)?,
            theme: settings.optional(keys::THEME)?,
            github_url: settings.optional(keys::GITHUB_URL)?,
            twitter_username: settings.optional(keys::TWITTER_USERNAME)?,
            social: settings.or_default(keys::SOCIAL)?,
            sitelogo: settings.optional(keys::SITELOGO)?,
            favicon: settings.optional(keys::FAVICON)?,
            load_content_cache: settings.or_default(keys::LOAD_CONTENT_CACHE)?,
            extra: settings.extra,
        };

        let feeds_need_host = !config.feeds.resolved().is_empty()
            && !config.relative_urls
            && !config.siteurl.is_absolute();
        if feeds_need_host {
            log::warn!(
                "Feeds are enabled but `{}` is not an absolute URL; feed links may be invalid",
                keys::SITEURL
            );
        }

        Ok(config)
    }

    /// Title shown in page headers; falls back to the author.
    pub fn site_title(&self) -> &str {
        self.sitetitle.as_deref().unwrap_or(&self.author)
    }

    /// Base used when generating links.
    pub fn base_url(&self) -> BaseUrl {
        BaseUrl::resolve(&self.siteurl, self.relative_urls)
    }

    /// Content directory, resolved against the settings file's directory.
    pub fn content_dir(&self) -> path::PathBuf {
        self.root.join(&self.path)
    }

    /// Check that every directory the generator will open at startup exists.
    ///
    /// Loading never touches these paths; call this before handing the
    /// configuration to the generator.
    pub fn verify_paths(&self) -> Result<()> {
        self.verify_dir(keys::PATH, &self.path)?;
        if let Some(Theme::Path(theme)) = &self.theme {
            self.verify_dir(keys::THEME, theme)?;
        }
        for plugin_path in &self.plugin_paths {
            self.verify_dir(keys::PLUGIN_PATHS, plugin_path)?;
        }
        Ok(())
    }

    fn verify_dir(&self, key: &str, dir: &path::Path) -> Result<()> {
        let dir = self.root.join(dir);
        if dir.is_dir() {
            log::trace!("`{key}`: found `{}`", dir.display());
            Ok(())
        } else {
            Err(PathError {
                key: key.to_owned(),
                path: dir,
            }
            .into())
        }
    }
}

impl FromStr for SiteConfiguration {
    type Err = Error;

    fn from_str(content: &str) -> Result<Self> {
        let mapping = parse_mapping(content).map_err(|source| Error::Syntax {
            origin: "settings".to_owned(),
            source,
        })?;
        Self::from_mapping(mapping, path::PathBuf::from("."))
    }
}

impl fmt::Display for SiteConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{converted}")
    }
}

fn parse_mapping(content: &str) -> Result<serde_yaml::Mapping, serde_yaml::Error> {
    if content.trim().is_empty() {
        Ok(serde_yaml::Mapping::new())
    } else {
        serde_yaml::from_str(content)
    }
}

/// Raw settings, split into recognized keys and pass-through extras.
struct Settings {
    known: HashMap<&'static str, serde_yaml::Value>,
    extra: serde_yaml::Mapping,
}

impl Settings {
    fn split(mapping: serde_yaml::Mapping) -> Result<Self> {
        let mut known = HashMap::new();
        let mut extra = serde_yaml::Mapping::new();
        for (name, value) in mapping {
            let name = match name {
                serde_yaml::Value::String(name) => name,
                other => {
                    let written = serde_yaml::to_string(&other).unwrap_or_default();
                    return Err(ConfigurationError::new(
                        written.trim(),
                        "setting names must be strings",
                    )
                    .into());
                }
            };
            match keys::recognize(&name) {
                Some(key) => {
                    known.insert(key, value);
                }
                None => {
                    log::warn!("Unrecognized setting `{name}`, passing it through");
                    extra.insert(serde_yaml::Value::String(name), value);
                }
            }
        }
        Ok(Self { known, extra })
    }

    /// `null` and a missing key both read as `None`.
    fn optional<T: DeserializeOwned>(&mut self, key: &'static str) -> Result<Option<T>> {
        match self.known.remove(key) {
            None => Ok(None),
            Some(value) => serde_yaml::from_value::<Option<T>>(value)
                .map_err(|e| ConfigurationError::new(key, e.to_string()).into()),
        }
    }

    fn or_default<T: DeserializeOwned + Default>(&mut self, key: &'static str) -> Result<T> {
        Ok(self.optional(key)?.unwrap_or_default())
    }

    fn required_text(&mut self, key: &'static str) -> Result<String> {
        let text: String = self
            .optional(key)?
            .ok_or_else(|| ConfigurationError::missing(key))?;
        if text.trim().is_empty() {
            return Err(ConfigurationError::new(key, "must not be blank").into());
        }
        Ok(text)
    }

    /// Unlike [`Settings::optional`], `null` is kept apart from a missing key.
    fn feed(&mut self, key: &'static str) -> Result<Feed> {
        match self.known.remove(key) {
            None => Ok(Feed::Unspecified),
            Some(value) => serde_yaml::from_value(value)
                .map_err(|e| ConfigurationError::new(key, e.to_string()).into()),
        }
    }
}

fn find_project_file(dir: &path::Path, name: &str) -> Option<path::PathBuf> {
    dir.ancestors()
        .map(|dir| dir.join(name))
        .find(|file_path| file_path.is_file())
}
