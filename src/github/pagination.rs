//! Page requests and page results for the repository listing.
//!
//! GitHub paginates `/users/{user}/repos` with `page` and `per_page` query
//! parameters. The browser view this tool is modelled on always asks for 20
//! repositories at a time and detects the final page by a short batch.

use super::error::GitHubError;
use super::models::Repository;

/// Number of repositories requested per page.
pub const PAGE_SIZE: u8 = 20;

/// Largest page size GitHub accepts.
pub const MAX_PAGE_SIZE: u8 = 100;

/// A validated request for one page of results.
///
/// # Example
///
/// ```
/// use octoscroll::github::pagination::PageRequest;
///
/// let request = PageRequest::new(2, 20).expect("valid page request");
/// assert_eq!(request.page(), 2);
/// assert!(!request.is_first_page());
/// assert!(PageRequest::new(0, 20).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    per_page: u8,
}

impl PageRequest {
    /// Creates a page request.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError::InvalidPagination`] when `page` is zero or
    /// `per_page` is outside `1..=100`.
    pub fn new(page: u32, per_page: u8) -> Result<Self, GitHubError> {
        if page == 0 {
            return Err(GitHubError::InvalidPagination {
                message: "page must be at least 1".to_owned(),
            });
        }

        if per_page == 0 {
            return Err(GitHubError::InvalidPagination {
                message: "per_page must be at least 1".to_owned(),
            });
        }

        if per_page > MAX_PAGE_SIZE {
            return Err(GitHubError::InvalidPagination {
                message: format!("per_page must not exceed {MAX_PAGE_SIZE}"),
            });
        }

        Ok(Self { page, per_page })
    }

    /// Returns the 1-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Returns the page size.
    #[must_use]
    pub const fn per_page(&self) -> u8 {
        self.per_page
    }

    /// Returns true for page 1.
    #[must_use]
    pub const fn is_first_page(&self) -> bool {
        self.page == 1
    }
}

/// One page of repositories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryPage {
    /// Repositories on this page, in API order.
    pub items: Vec<Repository>,
    /// The request that produced this page.
    pub request: PageRequest,
    /// Whether GitHub advertised a `rel="next"` link.
    pub has_next: bool,
}
