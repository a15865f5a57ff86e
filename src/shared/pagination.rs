// src/shared/pagination.rs

use serde::{Deserialize, Serialize};

/// Largest offset Postgres accepts as a bigint.
const MAX_OFFSET: u64 = i64::MAX as u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub per_page: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 20,
        }
    }
}

impl PageRequest {
    /// Build a request from raw query values, clamping `per_page` to `max`
    /// and `page` so the offset still fits a Postgres `OFFSET`.
    pub fn clamped(page: Option<u64>, per_page: Option<u64>, default: u64, max: u64) -> Self {
        let per_page = per_page.unwrap_or(default).clamp(1, max);
        Self {
            page: page.unwrap_or(1).clamp(1, MAX_OFFSET / per_page),
            per_page,
        }
    }

    pub fn offset(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.per_page)
            .min(MAX_OFFSET)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

impl<T> PageResult<T> {
    pub fn total_pages(&self) -> u64 {
        if self.per_page == 0 {
            return 0;
        }
        self.total.div_ceil(self.per_page)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_bounds_page_and_size() {
        let page = PageRequest::clamped(Some(0), Some(1000), 50, 200);
        assert_eq!(page.page, 1);
        assert_eq!(page.per_page, 200);

        let page = PageRequest::clamped(None, None, 50, 200);
        assert_eq!(page.per_page, 50);
    }

    #[test]
    fn offset_uses_one_based_pages() {
        let page = PageRequest {
            page: 3,
            per_page: 10,
        };
        assert_eq!(page.offset(), 20);
    }

    #[test]
    fn huge_page_number_keeps_offset_in_bigint_range() {
        let page = PageRequest::clamped(Some(u64::MAX), Some(50), 50, 200);
        assert!(page.offset() <= i64::MAX as u64);
        assert_eq!(page.page, i64::MAX as u64 / 50);

        let raw = PageRequest {
            page: u64::MAX,
            per_page: 200,
        };
        assert_eq!(raw.offset(), i64::MAX as u64);
    }

    #[test]
    fn page_result_navigation() {
        let result = PageResult::<u8> {
            items: vec![],
            page: 2,
            per_page: 10,
            total: 25,
        };
        assert_eq!(result.total_pages(), 3);
        assert!(result.has_previous());
        assert!(result.has_next());
    }
}
