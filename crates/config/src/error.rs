use std::path;

/// A setting is missing or holds a value outside its domain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid `{key}`: {reason}")]
pub struct ConfigurationError {
    pub key: String,
    pub reason: String,
}

impl ConfigurationError {
    pub fn new(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            reason: reason.into(),
        }
    }

    pub fn missing(key: &str) -> Self {
        Self::new(key, "missing required setting")
    }
}

/// A setting names a directory that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{key}` points at `{}`, which is not a directory", .path.display())]
pub struct PathError {
    pub key: String,
    pub path: path::PathBuf,
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("failed to read `{}`", .path.display())]
    Read {
        path: path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {origin}")]
    Syntax {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("no `{name}` found in `{}` or any parent directory", .dir.display())]
    NotFound { name: &'static str, dir: path::PathBuf },
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Path(#[from] PathError),
}

impl Error {
    /// The setting responsible for the failure, when there is one.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Configuration(e) => Some(&e.key),
            Self::Path(e) => Some(&e.key),
            Self::Read { .. } | Self::Syntax { .. } | Self::NotFound { .. } => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn configuration_error_names_key() {
        let err = ConfigurationError::new("SITEURL", "not a URL");
        assert_eq!(err.to_string(), "invalid `SITEURL`: not a URL");
    }

    #[test]
    fn key_of_path_error() {
        let err = Error::from(PathError {
            key: "THEME".to_owned(),
            path: path::PathBuf::from("themes/flex"),
        });
        assert_eq!(err.key(), Some("THEME"));
    }

    #[test]
    fn key_of_not_found() {
        let err = Error::NotFound {
            name: "pelicanconf.yml",
            dir: path::PathBuf::from("."),
        };
        assert_eq!(err.key(), None);
    }
}
