//! Filesystem-facing settings: `THEME` and `IGNORE_FILES`.

use std::fmt;
use std::path;

/// Themes that ship with the generator and need no directory on disk.
pub const BUILTIN_THEMES: &[&str] = &["notmyidea", "simple"];

pub const DEFAULT_IGNORE_FILES: &[&str] = &[".#*"];

/// `THEME`: a built-in theme name or a directory holding templates.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Theme {
    Builtin(String),
    Path(path::PathBuf),
}

impl Theme {
    pub fn is_builtin(&self) -> bool {
        matches!(self, Self::Builtin(_))
    }

    /// Directory of the theme relative to `root`; `None` for built-in themes.
    pub fn dir(&self, root: &path::Path) -> Option<path::PathBuf> {
        match self {
            Self::Builtin(_) => None,
            Self::Path(dir) => Some(root.join(dir)),
        }
    }
}

impl TryFrom<String> for Theme {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        if raw.trim().is_empty() {
            Err("theme must not be blank".to_owned())
        } else if BUILTIN_THEMES.contains(&raw.as_str()) {
            Ok(Self::Builtin(raw))
        } else {
            Ok(Self::Path(raw.into()))
        }
    }
}

impl From<Theme> for String {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Builtin(name) => name,
            Theme::Path(dir) => dir.to_string_lossy().into_owned(),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin(name) => name.fmt(f),
            Self::Path(dir) => dir.display().fmt(f),
        }
    }
}

/// `IGNORE_FILES`: shell-style glob patterns matched against the name of
/// every file and directory during content discovery.
///
/// Patterns are plain globs (`*`, `?`, `[...]`); `#` and `!` carry no special
/// meaning, so `#*#` matches Emacs autosave files.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct IgnoreFiles {
    patterns: Vec<glob::Pattern>,
}

impl IgnoreFiles {
    pub fn new(patterns: Vec<String>) -> Result<Self, String> {
        let patterns = patterns
            .iter()
            .map(|pattern| {
                glob::Pattern::new(pattern).map_err(|e| format!("invalid pattern `{pattern}`: {e}"))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn patterns(&self) -> Vec<&str> {
        self.patterns.iter().map(glob::Pattern::as_str).collect()
    }

    /// Whether the name of `path`, or of any directory above it, matches a pattern.
    pub fn is_ignored(&self, path: &path::Path) -> bool {
        path.components()
            .filter_map(|component| match component {
                path::Component::Normal(name) => Some(name.to_string_lossy()),
                _ => None,
            })
            .any(|name| match self.patterns.iter().find(|p| p.matches(&name)) {
                Some(pattern) => {
                    log::trace!("{}: ignored by {:?}", path.display(), pattern.as_str());
                    true
                }
                None => false,
            })
    }
}

impl Default for IgnoreFiles {
    fn default() -> Self {
        Self::new(DEFAULT_IGNORE_FILES.iter().map(|p| (*p).to_owned()).collect())
            .expect("default patterns are valid")
    }
}

impl TryFrom<Vec<String>> for IgnoreFiles {
    type Error = String;

    fn try_from(patterns: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(patterns)
    }
}

impl From<IgnoreFiles> for Vec<String> {
    fn from(ignore: IgnoreFiles) -> Self {
        ignore
            .patterns
            .into_iter()
            .map(|pattern| pattern.as_str().to_owned())
            .collect()
    }
}
