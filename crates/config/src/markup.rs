use std::fmt;

/// Source-content format the generator reads, named by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Markup {
    Rst,
    Md,
    Markdown,
    Mkd,
    Mdown,
    Html,
    Htm,
    Ipynb,
}

impl Markup {
    pub const ALL: &'static [Markup] = &[
        Markup::Rst,
        Markup::Md,
        Markup::Markdown,
        Markup::Mkd,
        Markup::Mdown,
        Markup::Html,
        Markup::Htm,
        Markup::Ipynb,
    ];

    /// Formats read when `MARKUP` is not set.
    pub const DEFAULTS: &'static [Markup] = &[
        Markup::Rst,
        Markup::Md,
        Markup::Markdown,
        Markup::Mkd,
        Markup::Mdown,
        Markup::Html,
        Markup::Htm,
    ];

    pub fn defaults() -> Vec<Markup> {
        Self::DEFAULTS.to_vec()
    }

    pub fn extension(self) -> &'static str {
        match self {
            Markup::Rst => "rst",
            Markup::Md => "md",
            Markup::Markdown => "markdown",
            Markup::Mkd => "mkd",
            Markup::Mdown => "mdown",
            Markup::Html => "html",
            Markup::Htm => "htm",
            Markup::Ipynb => "ipynb",
        }
    }

    pub fn from_extension(ext: &str) -> Option<Markup> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.extension().eq_ignore_ascii_case(ext))
    }

    pub fn is_markdown(self) -> bool {
        matches!(
            self,
            Markup::Md | Markup::Markdown | Markup::Mkd | Markup::Mdown
        )
    }

    /// Whether a reader plugin must be installed for the generator to handle it.
    pub fn needs_plugin(self) -> bool {
        matches!(self, Markup::Ipynb)
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.extension().fmt(f)
    }
}
