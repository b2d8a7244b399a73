use crate::keys;

pub const DEFAULT_FEED_ALL_ATOM: &str = "feeds/all.atom.xml";
pub const DEFAULT_CATEGORY_FEED_ATOM: &str = "feeds/{slug}.atom.xml";
pub const DEFAULT_TRANSLATION_FEED_ATOM: &str = "feeds/all-{lang}.atom.xml";
pub const DEFAULT_AUTHOR_FEED_ATOM: &str = "feeds/{slug}.atom.xml";
pub const DEFAULT_AUTHOR_FEED_RSS: &str = "feeds/{slug}.rss.xml";

/// A feed setting.
///
/// `null` in the settings file disables the feed, which is not the same as
/// leaving the key out: an absent key lets the generator fall back to its
/// default path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Feed {
    #[default]
    Unspecified,
    Disabled,
    Enabled(String),
}

impl Feed {
    pub fn is_unspecified(&self) -> bool {
        matches!(self, Self::Unspecified)
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled)
    }

    /// The path template the generator writes to, if any.
    pub fn resolve<'s>(&'s self, default: &'s str) -> Option<&'s str> {
        match self {
            Self::Unspecified => Some(default),
            Self::Disabled => None,
            Self::Enabled(path) => Some(path),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Feed {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let path: Option<String> = serde::Deserialize::deserialize(deserializer)?;
        Ok(path.map(Self::Enabled).unwrap_or(Self::Disabled))
    }
}

impl serde::Serialize for Feed {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Enabled(path) => serializer.serialize_str(path),
            Self::Unspecified | Self::Disabled => serializer.serialize_none(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Feeds {
    #[serde(skip_serializing_if = "Feed::is_unspecified")]
    pub feed_all_atom: Feed,
    #[serde(skip_serializing_if = "Feed::is_unspecified")]
    pub category_feed_atom: Feed,
    #[serde(skip_serializing_if = "Feed::is_unspecified")]
    pub translation_feed_atom: Feed,
    #[serde(skip_serializing_if = "Feed::is_unspecified")]
    pub author_feed_atom: Feed,
    #[serde(skip_serializing_if = "Feed::is_unspecified")]
    pub author_feed_rss: Feed,
}

impl Feeds {
    /// Each feed with its setting name and the generator's default path.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Feed, &'static str)> {
        [
            (
                keys::FEED_ALL_ATOM,
                &self.feed_all_atom,
                DEFAULT_FEED_ALL_ATOM,
            ),
            (
                keys::CATEGORY_FEED_ATOM,
                &self.category_feed_atom,
                DEFAULT_CATEGORY_FEED_ATOM,
            ),
            (
                keys::TRANSLATION_FEED_ATOM,
                &self.translation_feed_atom,
                DEFAULT_TRANSLATION_FEED_ATOM,
            ),
            (
                keys::AUTHOR_FEED_ATOM,
                &self.author_feed_atom,
                DEFAULT_AUTHOR_FEED_ATOM,
            ),
            (
                keys::AUTHOR_FEED_RSS,
                &self.author_feed_rss,
                DEFAULT_AUTHOR_FEED_RSS,
            ),
        ]
        .into_iter()
    }

    /// Feeds the generator will write, as `(setting, path template)`.
    pub fn resolved(&self) -> Vec<(&'static str, &str)> {
        self.iter()
            .filter_map(|(key, feed, default)| feed.resolve(default).map(|path| (key, path)))
            .collect()
    }

    pub fn all_disabled(&self) -> bool {
        self.iter().all(|(_, feed, _)| feed.is_disabled())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn null_disables() {
        let feed: Feed = serde_yaml::from_str("null").unwrap();
        assert_eq!(feed, Feed::Disabled);
    }

    #[test]
    fn empty_string_is_not_disabled() {
        let feed: Feed = serde_yaml::from_str("''").unwrap();
        assert_eq!(feed, Feed::Enabled(String::new()));
        assert_ne!(feed, Feed::Disabled);
        assert_eq!(feed.resolve(DEFAULT_FEED_ALL_ATOM), Some(""));
    }

    #[test]
    fn unspecified_uses_default() {
        assert_eq!(
            Feed::Unspecified.resolve(DEFAULT_FEED_ALL_ATOM),
            Some(DEFAULT_FEED_ALL_ATOM)
        );
        assert_eq!(Feed::Disabled.resolve(DEFAULT_FEED_ALL_ATOM), None);
    }

    #[test]
    fn resolved_defaults() {
        let feeds = Feeds::default();
        let resolved = feeds.resolved();
        assert_eq!(resolved.len(), 5);
        assert_eq!(resolved[0], (keys::FEED_ALL_ATOM, DEFAULT_FEED_ALL_ATOM));
    }

    #[test]
    fn resolved_all_disabled() {
        let feeds = Feeds {
            feed_all_atom: Feed::Disabled,
            category_feed_atom: Feed::Disabled,
            translation_feed_atom: Feed::Disabled,
            author_feed_atom: Feed::Disabled,
            author_feed_rss: Feed::Disabled,
        };
        assert!(feeds.resolved().is_empty());
        assert!(feeds.all_disabled());
    }

    #[test]
    fn resolved_mixed() {
        let feeds = Feeds {
            feed_all_atom: Feed::Enabled("atom.xml".to_owned()),
            author_feed_rss: Feed::Disabled,
            ..Default::default()
        };
        let resolved = feeds.resolved();
        assert_eq!(resolved.len(), 4);
        assert_eq!(resolved[0], (keys::FEED_ALL_ATOM, "atom.xml"));
        assert!(!resolved.iter().any(|(key, _)| *key == keys::AUTHOR_FEED_RSS));
    }
}
