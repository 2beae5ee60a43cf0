//! Page requests and page results shared by the store and index read paths.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Sort direction for paged scans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Sort key: a column name plus direction. Defaults to `id ASC`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SortOrder {
    pub property: String,
    pub direction: Direction,
}

impl Default for SortOrder {
    fn default() -> Self {
        Self {
            property: "id".to_string(),
            direction: Direction::Asc,
        }
    }
}

impl SortOrder {
    /// Parse `"column"` or `"column,asc|desc"`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for an empty column or unknown direction.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        let (property, direction) = match s.split_once(',') {
            Some((p, d)) => (p.trim(), d.trim()),
            None => (s.trim(), "asc"),
        };
        if property.is_empty() {
            return Err(CoreError::Validation("sort property is empty".into()));
        }
        let direction = match direction.to_ascii_lowercase().as_str() {
            "asc" => Direction::Asc,
            "desc" => Direction::Desc,
            other => {
                return Err(CoreError::Validation(format!(
                    "unknown sort direction '{other}'"
                )));
            }
        };
        Ok(Self {
            property: property.to_string(),
            direction,
        })
    }
}

/// Zero-based page request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PageSpec {
    pub page: u32,
    pub size: u32,
    #[serde(default)]
    pub sort: SortOrder,
}

impl Default for PageSpec {
    fn default() -> Self {
        Self {
            page: 0,
            size: 20,
            sort: SortOrder::default(),
        }
    }
}

impl PageSpec {
    #[must_use]
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            sort: SortOrder::default(),
        }
    }

    #[must_use]
    pub fn sorted_by(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Row offset of the first item on this page.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.page as u64 * self.size as u64
    }
}

/// One page of results plus the total number of matching items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub size: u32,
}

impl<T> Page<T> {
    #[must_use]
    pub const fn new(items: Vec<T>, total: u64, spec: &PageSpec) -> Self {
        Self {
            items,
            total,
            page: spec.page,
            size: spec.size,
        }
    }

    #[must_use]
    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.size))
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        u64::from(self.page) + 1 < self.total_pages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_spec_sorts_by_id() {
        let spec = PageSpec::default();
        assert_eq!(spec.sort.property, "id");
        assert_eq!(spec.sort.direction, Direction::Asc);
        assert_eq!(spec.offset(), 0);
    }

    #[test]
    fn offset_is_page_times_size() {
        assert_eq!(PageSpec::new(3, 25).offset(), 75);
    }

    #[test]
    fn sort_order_parses_direction() {
        let sort = SortOrder::parse("bedroom_name,desc").unwrap();
        assert_eq!(sort.property, "bedroom_name");
        assert_eq!(sort.direction, Direction::Desc);

        let sort = SortOrder::parse("id").unwrap();
        assert_eq!(sort.direction, Direction::Asc);

        assert!(SortOrder::parse(",asc").is_err());
        assert!(SortOrder::parse("id,sideways").is_err());
    }

    #[test]
    fn page_counts() {
        let spec = PageSpec::new(0, 10);
        let page = Page::new(vec![1; 10], 25, &spec);
        assert_eq!(page.total_pages(), 3);
        assert!(page.has_next());

        let last = Page::new(vec![1; 5], 25, &PageSpec::new(2, 10));
        assert!(!last.has_next());
    }

    #[test]
    fn empty_page_has_no_pages() {
        let page: Page<u8> = Page::new(Vec::new(), 0, &PageSpec::new(0, 20));
        assert_eq!(page.total_pages(), 0);
        assert!(!page.has_next());
    }
}
