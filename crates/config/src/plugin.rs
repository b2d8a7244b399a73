use std::fmt;

static PLUGIN_NAME: once_cell::sync::Lazy<regex::Regex> = once_cell::sync::Lazy::new(|| {
    regex::Regex::new(r"^[A-Za-z_][A-Za-z0-9_\-]*(?:\.[A-Za-z_][A-Za-z0-9_\-]*)*$").unwrap()
});

/// Dotted name of a generator plugin, e.g. `pelican-ipynb.markup`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PluginName(String);

impl PluginName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The package the plugin is found in (`pelican-ipynb` for `pelican-ipynb.markup`).
    pub fn package(&self) -> &str {
        self.0
            .split_once('.')
            .map(|(package, _)| package)
            .unwrap_or(&self.0)
    }
}

impl TryFrom<String> for PluginName {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        if PLUGIN_NAME.is_match(&raw) {
            Ok(Self(raw))
        } else {
            Err(format!("`{raw}` is not a plugin name like `package.module`"))
        }
    }
}

impl From<PluginName> for String {
    fn from(name: PluginName) -> Self {
        name.0
    }
}

impl fmt::Display for PluginName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dotted_name() {
        let name = PluginName::try_from("pelican-ipynb.markup".to_owned()).unwrap();
        assert_eq!(name.package(), "pelican-ipynb");
    }

    #[test]
    fn bare_name() {
        let name = PluginName::try_from("sitemap".to_owned()).unwrap();
        assert_eq!(name.package(), "sitemap");
    }

    #[test]
    fn rejects_paths() {
        assert!(PluginName::try_from("./plugins/sitemap".to_owned()).is_err());
        assert!(PluginName::try_from("sitemap.".to_owned()).is_err());
        assert!(PluginName::try_from(String::new()).is_err());
    }
}
