//! Setting names as they appear in the settings file.

pub const AUTHOR: &str = "AUTHOR";
pub const SITENAME: &str = "SITENAME";
pub const SITEURL: &str = "SITEURL";
pub const SITETITLE: &str = "SITETITLE";
pub const SITESUBTITLE: &str = "SITESUBTITLE";
pub const SITEDESCRIPTION: &str = "SITEDESCRIPTION";
pub const PATH: &str = "PATH";
pub const TIMEZONE: &str = "TIMEZONE";
pub const DEFAULT_LANG: &str = "DEFAULT_LANG";
pub const FEED_ALL_ATOM: &str = "FEED_ALL_ATOM";
pub const CATEGORY_FEED_ATOM: &str = "CATEGORY_FEED_ATOM";
pub const TRANSLATION_FEED_ATOM: &str = "TRANSLATION_FEED_ATOM";
pub const AUTHOR_FEED_ATOM: &str = "AUTHOR_FEED_ATOM";
pub const AUTHOR_FEED_RSS: &str = "AUTHOR_FEED_RSS";
pub const MAIN_MENU: &str = "MAIN_MENU";
pub const MENUITEMS: &str = "MENUITEMS";
pub const LINKS: &str = "LINKS";
pub const DEFAULT_PAGINATION: &str = "DEFAULT_PAGINATION";
pub const RELATIVE_URLS: &str = "RELATIVE_URLS";
pub const MARKUP: &str = "MARKUP";
pub const PLUGIN_PATHS: &str = "PLUGIN_PATHS";
pub const PLUGINS: &str = "PLUGINS";
pub const IGNORE_FILES: &str = "IGNORE_FILES";
pub const THEME: &str = "THEME";
pub const GITHUB_URL: &str = "GITHUB_URL";
pub const TWITTER_USERNAME: &str = "TWITTER_USERNAME";
pub const SOCIAL: &str = "SOCIAL";
pub const SITELOGO: &str = "SITELOGO";
pub const FAVICON: &str = "FAVICON";
pub const LOAD_CONTENT_CACHE: &str = "LOAD_CONTENT_CACHE";

/// Every setting with a typed field on [`crate::SiteConfiguration`].
pub const ALL: &[&str] = &[
    AUTHOR,
    SITENAME,
    SITEURL,
    SITETITLE,
    SITESUBTITLE,
    SITEDESCRIPTION,
    PATH,
    TIMEZONE,
    DEFAULT_LANG,
    FEED_ALL_ATOM,
    CATEGORY_FEED_ATOM,
    TRANSLATION_FEED_ATOM,
    AUTHOR_FEED_ATOM,
    AUTHOR_FEED_RSS,
    MAIN_MENU,
    MENUITEMS,
    LINKS,
    DEFAULT_PAGINATION,
    RELATIVE_URLS,
    MARKUP,
    PLUGIN_PATHS,
    PLUGINS,
    IGNORE_FILES,
    THEME,
    GITHUB_URL,
    TWITTER_USERNAME,
    SOCIAL,
    SITELOGO,
    FAVICON,
    LOAD_CONTENT_CACHE,
];

/// Look up the canonical name of a recognized setting.
pub fn recognize(name: &str) -> Option<&'static str> {
    ALL.iter().copied().find(|k| *k == name)
}
