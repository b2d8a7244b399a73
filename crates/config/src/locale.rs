use std::fmt;

static TIMEZONE: once_cell::sync::Lazy<regex::Regex> = once_cell::sync::Lazy::new(|| {
    regex::Regex::new(r"^[A-Za-z][A-Za-z0-9_+\-]*(?:/[A-Za-z0-9_+\-]+){0,2}$").unwrap()
});

static LANGUAGE: once_cell::sync::Lazy<regex::Regex> = once_cell::sync::Lazy::new(|| {
    regex::Regex::new(r"^[A-Za-z]{2,3}(?:[-_][A-Za-z0-9]{2,8})*$").unwrap()
});

/// IANA timezone identifier, e.g. `America/Los_Angeles`.
///
/// Only the shape is checked; the generator resolves the name against its
/// own timezone database.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timezone(String);

impl Timezone {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The area part (`America` in `America/Los_Angeles`), if the name has one.
    pub fn area(&self) -> Option<&str> {
        self.0.split_once('/').map(|(area, _)| area)
    }
}

impl TryFrom<String> for Timezone {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        if TIMEZONE.is_match(&raw) {
            Ok(Self(raw))
        } else {
            Err(format!(
                "`{raw}` is not a timezone name like `UTC` or `Europe/Paris`"
            ))
        }
    }
}

impl From<Timezone> for String {
    fn from(tz: Timezone) -> Self {
        tz.0
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Content language code, e.g. `en` or `pt-BR`.  Case is kept as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Primary language subtag, lowercased.
    pub fn primary(&self) -> String {
        self.0
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase()
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self("en".to_owned())
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        if LANGUAGE.is_match(&raw) {
            Ok(Self(raw))
        } else {
            Err(format!("`{raw}` is not a language code like `en` or `pt-BR`"))
        }
    }
}

impl From<LanguageCode> for String {
    fn from(lang: LanguageCode) -> Self {
        lang.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
