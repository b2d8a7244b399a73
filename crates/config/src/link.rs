use std::fmt;

use crate::AbsoluteUrl;

/// A `[label, target]` pair from `MENUITEMS` or `LINKS`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "(String, String)", into = "(String, String)")]
pub struct Link {
    pub label: String,
    pub target: String,
}

impl Link {
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Result<Self, String> {
        Self::try_from((label.into(), target.into()))
    }
}

impl TryFrom<(String, String)> for Link {
    type Error = String;

    fn try_from((label, target): (String, String)) -> Result<Self, Self::Error> {
        if label.trim().is_empty() {
            return Err(format!("entry for `{target}` has a blank label"));
        }
        if target.trim().is_empty() {
            return Err(format!("entry `{label}` has a blank path"));
        }
        if target.chars().any(char::is_whitespace) {
            return Err(format!("entry `{label}` has whitespace in `{target}`"));
        }
        Ok(Self { label, target })
    }
}

impl From<Link> for (String, String) {
    fn from(link: Link) -> Self {
        (link.label, link.target)
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.label, self.target)
    }
}

/// A `[platform, url]` pair from `SOCIAL`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "(String, String)", into = "(String, String)")]
pub struct SocialLink {
    pub platform: String,
    pub url: AbsoluteUrl,
}

impl TryFrom<(String, String)> for SocialLink {
    type Error = String;

    fn try_from((platform, url): (String, String)) -> Result<Self, Self::Error> {
        if platform.trim().is_empty() {
            return Err(format!("entry for `{url}` has a blank platform"));
        }
        let url = AbsoluteUrl::try_from(url).map_err(|e| format!("`{platform}` entry: {e}"))?;
        Ok(Self { platform, url })
    }
}

impl From<SocialLink> for (String, String) {
    fn from(link: SocialLink) -> Self {
        (link.platform, link.url.into())
    }
}

impl fmt::Display for SocialLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.platform, self.url)
    }
}

static TWITTER_HANDLE: once_cell::sync::Lazy<regex::Regex> =
    once_cell::sync::Lazy::new(|| regex::Regex::new(r"^[A-Za-z0-9_]{1,15}$").unwrap());

/// `TWITTER_USERNAME`, without the leading `@`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TwitterHandle(String);

impl TwitterHandle {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn profile_url(&self) -> String {
        format!("https://twitter.com/{}", self.0)
    }
}

impl TryFrom<String> for TwitterHandle {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        if raw.starts_with('@') {
            Err(format!("`{raw}` should not start with `@`"))
        } else if TWITTER_HANDLE.is_match(&raw) {
            Ok(Self(raw))
        } else {
            Err(format!(
                "`{raw}` is not a handle (1-15 letters, digits or underscores)"
            ))
        }
    }
}

impl From<TwitterHandle> for String {
    fn from(handle: TwitterHandle) -> Self {
        handle.0
    }
}

impl fmt::Display for TwitterHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
