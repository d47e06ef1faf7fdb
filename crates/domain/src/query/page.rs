//! Page selection for player listings.

use crate::error::DomainError;

/// Page number used when the caller does not give one.
pub const DEFAULT_PAGE_NUMBER: usize = 0;

/// Page size used when the caller does not give one.
pub const DEFAULT_PAGE_SIZE: usize = 3;

/// A zero-based page of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_number: usize,
    page_size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_number: DEFAULT_PAGE_NUMBER,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Build a page from optional transport values, applying defaults.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if either value is negative.
    pub fn new(page_number: Option<i32>, page_size: Option<i32>) -> Result<Self, DomainError> {
        let page_number = match page_number {
            None => DEFAULT_PAGE_NUMBER,
            Some(n) => usize::try_from(n).map_err(|_| {
                DomainError::validation(format!("pageNumber must not be negative, got {}", n))
            })?,
        };
        let page_size = match page_size {
            None => DEFAULT_PAGE_SIZE,
            Some(s) => usize::try_from(s).map_err(|_| {
                DomainError::validation(format!("pageSize must not be negative, got {}", s))
            })?,
        };
        Ok(Self {
            page_number,
            page_size,
        })
    }

    pub fn page_number(&self) -> usize {
        self.page_number
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Index of the first element on this page.
    pub fn offset(&self) -> usize {
        self.page_number.saturating_mul(self.page_size)
    }
}
