use std::fmt;

/// An absolute `http`/`https` URL, kept exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AbsoluteUrl {
    raw: String,
    parsed: url::Url,
}

impl AbsoluteUrl {
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn url(&self) -> &url::Url {
        &self.parsed
    }

    pub fn host(&self) -> &str {
        self.parsed.host_str().unwrap_or_default()
    }
}

impl TryFrom<String> for AbsoluteUrl {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        let parsed = url::Url::parse(&raw).map_err(|e| format!("`{raw}` is not a URL: {e}"))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(format!(
                "`{raw}` uses scheme `{}`, expected http or https",
                parsed.scheme()
            ));
        }
        if parsed.host_str().is_none() {
            return Err(format!("`{raw}` has no host"));
        }
        Ok(Self { raw, parsed })
    }
}

impl From<AbsoluteUrl> for String {
    fn from(url: AbsoluteUrl) -> Self {
        url.raw
    }
}

impl fmt::Display for AbsoluteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.raw.fmt(f)
    }
}

/// `SITEURL`: empty, an absolute URL, or a path rooted at `/`.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SiteUrl {
    #[default]
    Empty,
    Path(String),
    Absolute(AbsoluteUrl),
}

impl SiteUrl {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Empty => "",
            Self::Path(path) => path,
            Self::Absolute(url) => url.as_str(),
        }
    }

    pub fn is_absolute(&self) -> bool {
        matches!(self, Self::Absolute(_))
    }
}

impl TryFrom<String> for SiteUrl {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        if raw.is_empty() {
            Ok(Self::Empty)
        } else if raw.starts_with('/') {
            if raw.chars().any(char::is_whitespace) {
                return Err(format!("`{raw}` contains whitespace"));
            }
            Ok(Self::Path(raw))
        } else {
            AbsoluteUrl::try_from(raw)
                .map(Self::Absolute)
                .map_err(|e| format!("{e}; use an absolute URL or a path starting with `/`"))
        }
    }
}

impl From<SiteUrl> for String {
    fn from(url: SiteUrl) -> Self {
        match url {
            SiteUrl::Empty => String::new(),
            SiteUrl::Path(path) => path,
            SiteUrl::Absolute(url) => url.into(),
        }
    }
}

impl fmt::Display for SiteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

/// The base that generated links are built on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseUrl {
    /// Links are document-relative; holds the host-less form of `SITEURL`.
    Relative(String),
    /// Links are prefixed with the host-qualified `SITEURL`.
    Absolute(String),
}

impl BaseUrl {
    pub fn resolve(siteurl: &SiteUrl, relative_urls: bool) -> Self {
        if relative_urls {
            let path = match siteurl {
                SiteUrl::Empty => String::new(),
                SiteUrl::Path(path) => path.clone(),
                SiteUrl::Absolute(url) => url.url().path().trim_end_matches('/').to_owned(),
            };
            Self::Relative(path)
        } else {
            Self::Absolute(siteurl.as_str().trim_end_matches('/').to_owned())
        }
    }

    pub fn is_relative(&self) -> bool {
        matches!(self, Self::Relative(_))
    }

    /// Link prefix for a document written at `output_path` (relative to the output root).
    ///
    /// Relative bases walk back up to the output root (`.` or `..`, `../..`, ...).
    pub fn for_document(&self, output_path: &str) -> String {
        match self {
            Self::Relative(_) => {
                let depth = output_path
                    .trim_start_matches('/')
                    .split('/')
                    .filter(|c| !c.is_empty())
                    .count()
                    .saturating_sub(1);
                if depth == 0 {
                    ".".to_owned()
                } else {
                    vec![".."; depth].join("/")
                }
            }
            Self::Absolute(base) => base.clone(),
        }
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Relative(path) | Self::Absolute(path) => path.fmt(f),
        }
    }
}

/// Site-relative asset path or URL, e.g. `SITELOGO`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UrlPath(String);

impl UrlPath {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UrlPath {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        if raw.trim().is_empty() {
            Err("asset path must not be blank".to_owned())
        } else if raw.chars().any(char::is_whitespace) {
            Err(format!("`{raw}` contains whitespace"))
        } else {
            Ok(Self(raw))
        }
    }
}

impl From<UrlPath> for String {
    fn from(path: UrlPath) -> Self {
        path.0
    }
}

impl fmt::Display for UrlPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn site_url(raw: &str) -> SiteUrl {
        SiteUrl::try_from(raw.to_owned()).unwrap()
    }

    #[test]
    fn absolute_url_keeps_spelling() {
        let url = AbsoluteUrl::try_from("https://github.com/vladturlo".to_owned()).unwrap();
        assert_eq!(url.as_str(), "https://github.com/vladturlo");
        assert_eq!(url.host(), "github.com");

        let url = AbsoluteUrl::try_from("https://example.com".to_owned()).unwrap();
        assert_eq!(url.as_str(), "https://example.com");
    }

    #[test]
    fn absolute_url_rejects_other_schemes() {
        assert!(AbsoluteUrl::try_from("ftp://example.com".to_owned()).is_err());
        assert!(AbsoluteUrl::try_from("mailto:me@example.com".to_owned()).is_err());
    }

    #[test]
    fn absolute_url_rejects_relative() {
        assert!(AbsoluteUrl::try_from("example.com/about".to_owned()).is_err());
    }

    #[test]
    fn site_url_forms() {
        assert_eq!(site_url(""), SiteUrl::Empty);
        assert_eq!(site_url("/index.html"), SiteUrl::Path("/index.html".to_owned()));
        assert!(site_url("https://blog.example.com").is_absolute());
    }

    #[test]
    fn site_url_rejects_bare_words() {
        let err = SiteUrl::try_from("index.html".to_owned()).unwrap_err();
        assert!(err.contains("starting with `/`"), "{err}");
    }

    #[test]
    fn site_url_rejects_whitespace_in_path() {
        assert!(SiteUrl::try_from("/my blog".to_owned()).is_err());
    }

    #[test]
    fn base_url_relative_drops_host() {
        let base = BaseUrl::resolve(&site_url("https://blog.example.com/sub/"), true);
        assert_eq!(base, BaseUrl::Relative("/sub".to_owned()));
    }

    #[test]
    fn base_url_relative_keeps_path() {
        let base = BaseUrl::resolve(&site_url("/index.html"), true);
        assert_eq!(base, BaseUrl::Relative("/index.html".to_owned()));
        assert!(base.is_relative());
    }

    #[test]
    fn base_url_absolute_trims_slash() {
        let base = BaseUrl::resolve(&site_url("https://blog.example.com/"), false);
        assert_eq!(base, BaseUrl::Absolute("https://blog.example.com".to_owned()));
    }

    #[test]
    fn for_document_relative_depth() {
        let base = BaseUrl::Relative(String::new());
        assert_eq!(base.for_document("index.html"), ".");
        assert_eq!(base.for_document("posts/hello.html"), "..");
        assert_eq!(base.for_document("/2017/03/hello.html"), "../..");
    }

    #[test]
    fn for_document_absolute_is_constant() {
        let base = BaseUrl::Absolute("https://blog.example.com".to_owned());
        assert_eq!(base.for_document("posts/hello.html"), "https://blog.example.com");
    }

    #[test]
    fn url_path_rejects_blank() {
        assert!(UrlPath::try_from(" ".to_owned()).is_err());
        assert!(UrlPath::try_from("/images/my face.jpg".to_owned()).is_err());
        assert_eq!(
            UrlPath::try_from("/images/face.jpg".to_owned()).unwrap().as_str(),
            "/images/face.jpg"
        );
    }
}
