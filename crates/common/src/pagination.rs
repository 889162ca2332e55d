//! Pagination utilities shared by the service and HTTP layers
//!
//! `PageRequest` is the normalized input (0-based page index, page size, sort),
//! `Page<T>` is one slice of a result set plus the metadata needed to render
//! page links.

use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;
pub const DEFAULT_SORT_FIELD: &str = "id";
/// Largest row offset the storage layer accepts (a signed 64-bit `OFFSET`).
pub const MAX_OFFSET: u64 = i64::MAX as u64;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
    #[error("invalid sort direction: {0}")]
    InvalidDirection(String),
    #[error("sort field must not be empty")]
    EmptySortField,
    #[error("page index out of range: {0}")]
    PageOutOfRange(u64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    fn parse(raw: &str) -> Result<Self, PaginationError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Direction::Asc),
            "desc" => Ok(Direction::Desc),
            other => Err(PaginationError::InvalidDirection(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Sort {
    pub field: String,
    pub direction: Direction,
}

impl Sort {
    pub fn asc(field: &str) -> Self {
        Self { field: field.to_string(), direction: Direction::Asc }
    }

    pub fn desc(field: &str) -> Self {
        Self { field: field.to_string(), direction: Direction::Desc }
    }

    /// Parse `field` or `field,asc|desc`. A missing direction means ascending.
    pub fn parse(raw: &str) -> Result<Self, PaginationError> {
        let mut parts = raw.splitn(2, ',');
        let field = parts.next().unwrap_or_default().trim();
        if field.is_empty() {
            return Err(PaginationError::EmptySortField);
        }
        let direction = match parts.next() {
            Some(d) if !d.trim().is_empty() => Direction::parse(d)?,
            _ => Direction::Asc,
        };
        Ok(Self { field: field.to_string(), direction })
    }
}

impl Default for Sort {
    fn default() -> Self { Self::asc(DEFAULT_SORT_FIELD) }
}

/// Normalized pagination parameters
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    /// 0-based page index
    pub page: u64,
    /// items per page, clamped to `1..=MAX_PAGE_SIZE`
    pub size: u64,
    pub sort: Sort,
}

impl PageRequest {
    /// `page` is capped so that `page * size` never exceeds `MAX_OFFSET`.
    pub fn new(page: u64, size: u64, sort: Sort) -> Self {
        let size = size.clamp(1, MAX_PAGE_SIZE);
        Self { page: page.min(MAX_OFFSET / size), size, sort }
    }

    /// Build from raw query values, applying defaults for anything missing.
    pub fn from_parts(page: Option<u64>, size: Option<u64>, sort: Option<&str>) -> Result<Self, PaginationError> {
        let sort = match sort {
            Some(s) if !s.trim().is_empty() => Sort::parse(s)?,
            _ => Sort::default(),
        };
        let request = Self::new(page.unwrap_or(0), size.unwrap_or(DEFAULT_PAGE_SIZE), sort);
        match page {
            Some(p) if p != request.page => Err(PaginationError::PageOutOfRange(p)),
            _ => Ok(request),
        }
    }

    pub fn offset(&self) -> u64 { self.page.saturating_mul(self.size) }
}

impl Default for PageRequest {
    fn default() -> Self { Self::new(0, DEFAULT_PAGE_SIZE, Sort::default()) }
}

/// One page of results
#[derive(Clone, Debug, Serialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub number: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
    pub first: bool,
    pub last: bool,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        let total_pages = total_elements.div_ceil(request.size.max(1));
        Self {
            content,
            number: request.page,
            size: request.size,
            total_elements,
            total_pages,
            first: request.page == 0,
            last: request.page.saturating_add(1) >= total_pages,
        }
    }

    pub fn number_of_elements(&self) -> usize { self.content.len() }

    pub fn is_empty(&self) -> bool { self.content.is_empty() }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            first: self.first,
            last: self.last,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_first_page_of_ten_by_id() {
        let d = PageRequest::default();
        assert_eq!(d.page, 0);
        assert_eq!(d.size, 10);
        assert_eq!(d.sort, Sort::asc("id"));
    }

    #[test]
    fn size_is_clamped() {
        assert_eq!(PageRequest::new(0, 0, Sort::default()).size, 1);
        assert_eq!(PageRequest::new(0, 1000, Sort::default()).size, MAX_PAGE_SIZE);
    }

    #[test]
    fn sort_parses_field_and_direction() {
        assert_eq!(Sort::parse("price,desc").unwrap(), Sort::desc("price"));
        assert_eq!(Sort::parse("name").unwrap(), Sort::asc("name"));
        assert_eq!(Sort::parse("name,").unwrap(), Sort::asc("name"));
        assert_eq!(Sort::parse(" capacity , DESC ").unwrap(), Sort::desc("capacity"));
    }

    #[test]
    fn sort_rejects_bad_input() {
        assert_eq!(Sort::parse(",asc"), Err(PaginationError::EmptySortField));
        assert_eq!(
            Sort::parse("id,sideways"),
            Err(PaginationError::InvalidDirection("sideways".into()))
        );
    }

    #[test]
    fn from_parts_treats_blank_sort_as_default() {
        let r = PageRequest::from_parts(Some(2), None, Some("  ")).unwrap();
        assert_eq!(r.page, 2);
        assert_eq!(r.size, DEFAULT_PAGE_SIZE);
        assert_eq!(r.sort, Sort::default());
        assert_eq!(r.offset(), 20);
    }

    #[test]
    fn huge_page_index_is_rejected_or_capped() {
        assert_eq!(
            PageRequest::from_parts(Some(u64::MAX), None, None),
            Err(PaginationError::PageOutOfRange(u64::MAX))
        );
        assert_eq!(
            PageRequest::from_parts(Some(MAX_OFFSET), Some(10), None),
            Err(PaginationError::PageOutOfRange(MAX_OFFSET))
        );
        let last_ok = MAX_OFFSET / 10;
        assert_eq!(PageRequest::from_parts(Some(last_ok), Some(10), None).unwrap().page, last_ok);

        let capped = PageRequest::new(u64::MAX, 100, Sort::default());
        assert!(capped.page.checked_mul(capped.size).is_some_and(|o| o <= MAX_OFFSET));
        let page = Page::new(Vec::<u8>::new(), &capped, 25);
        assert!(page.last && !page.first);
    }

    #[test]
    fn page_metadata_for_twenty_five_rows() {
        let sizes = [10usize, 10, 5];
        for (idx, expected) in sizes.iter().enumerate() {
            let req = PageRequest::new(idx as u64, 10, Sort::default());
            let page = Page::new(vec![0u8; *expected], &req, 25);
            assert_eq!(page.number_of_elements(), *expected);
            assert_eq!(page.total_elements, 25);
            assert_eq!(page.total_pages, 3);
            assert_eq!(page.first, idx == 0);
            assert_eq!(page.last, idx == 2);
        }
    }

    #[test]
    fn empty_page_is_first_and_last() {
        let page: Page<u8> = Page::new(vec![], &PageRequest::default(), 0);
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 0);
        assert!(page.first && page.last);
    }

    #[test]
    fn page_serializes_with_metadata() {
        let page = Page::new(vec!["a"], &PageRequest::default(), 1).map(|s| s.to_uppercase());
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["content"][0], "A");
        assert_eq!(json["total_elements"], 1);
    }
}
