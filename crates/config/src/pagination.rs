use std::num::NonZeroU32;

/// `DEFAULT_PAGINATION`: `false`, `true`, or the number of articles per page.
///
/// `true` keeps its spelling and paginates like a page size of one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawPagination", into = "RawPagination")]
pub enum Pagination {
    #[default]
    Disabled,
    Enabled,
    PerPage(NonZeroU32),
}

impl Pagination {
    pub fn per_page(self) -> Option<NonZeroU32> {
        match self {
            Self::Disabled => None,
            Self::Enabled => Some(NonZeroU32::MIN),
            Self::PerPage(n) => Some(n),
        }
    }

    pub fn is_enabled(self) -> bool {
        self.per_page().is_some()
    }

    /// Number of pages needed for `count` articles; always at least one.
    pub fn page_count(self, count: usize) -> usize {
        match self.per_page() {
            None => 1,
            Some(per_page) => count.div_ceil(per_page.get() as usize).max(1),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum RawPagination {
    Toggle(bool),
    PerPage(u32),
}

impl TryFrom<RawPagination> for Pagination {
    type Error = String;

    fn try_from(raw: RawPagination) -> Result<Self, Self::Error> {
        match raw {
            RawPagination::Toggle(false) => Ok(Self::Disabled),
            RawPagination::Toggle(true) => Ok(Self::Enabled),
            RawPagination::PerPage(n) => NonZeroU32::new(n)
                .map(Self::PerPage)
                .ok_or_else(|| "page size must be at least 1; use `false` to disable".to_owned()),
        }
    }
}

impl From<Pagination> for RawPagination {
    fn from(pagination: Pagination) -> Self {
        match pagination {
            Pagination::Disabled => RawPagination::Toggle(false),
            Pagination::Enabled => RawPagination::Toggle(true),
            Pagination::PerPage(n) => RawPagination::PerPage(n.get()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn false_disables() {
        let pagination: Pagination = serde_yaml::from_str("false").unwrap();
        assert_eq!(pagination, Pagination::Disabled);
        assert!(!pagination.is_enabled());
    }

    #[test]
    fn page_size() {
        let pagination: Pagination = serde_yaml::from_str("10").unwrap();
        assert_eq!(pagination.per_page(), NonZeroU32::new(10));
    }

    #[test]
    fn zero_is_rejected() {
        let result: Result<Pagination, _> = serde_yaml::from_str("0");
        assert!(result.is_err());
    }

    #[test]
    fn true_enables() {
        let pagination: Pagination = serde_yaml::from_str("true").unwrap();
        assert_eq!(pagination, Pagination::Enabled);
        assert!(pagination.is_enabled());
        assert_eq!(pagination.per_page(), NonZeroU32::new(1));
        assert_eq!(serde_yaml::to_string(&pagination).unwrap(), "true\n");
    }

    #[test]
    fn page_count() {
        assert_eq!(Pagination::Disabled.page_count(42), 1);
        assert_eq!(Pagination::Enabled.page_count(3), 3);
        let pagination = Pagination::PerPage(NonZeroU32::new(10).unwrap());
        assert_eq!(pagination.page_count(0), 1);
        assert_eq!(pagination.page_count(10), 1);
        assert_eq!(pagination.page_count(11), 2);
    }
}
