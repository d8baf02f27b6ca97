//! Git operations abstraction layer
//!
//! The release pipeline only needs one thing from version control: the tag
//! nearest to the current checkout. That need is expressed as the
//! [Repository] trait so the pipeline receives an explicit handle instead of
//! assuming the process working directory.
//!
//! - [repository::Git2Repository]: a real implementation using the `git2` crate
//! - [mock::MockRepository]: a mock implementation for testing
//!
//! ```rust
//! # use pubspec_release::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! let tag = repo.latest_tag()?;
//! println!("latest tag: {}", tag);
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::Tag;
use crate::error::Result;

/// Source of release tags
pub trait Repository {
    /// Get the most recent tag reachable from HEAD
    ///
    /// "Most recent" means nearest in the commit graph, the same answer as
    /// `git describe --tags --abbrev=0`. Lightweight and annotated tags both
    /// count.
    ///
    /// # Returns
    /// * `Ok(Tag)` - The nearest tag
    /// * `Err(ReleaseError::NoTagFound)` - If no tag is reachable from HEAD
    /// * `Err` - For any other Git error
    fn latest_tag(&self) -> Result<Tag>;
}

impl<R: Repository + ?Sized> Repository for &R {
    fn latest_tag(&self) -> Result<Tag> {
        (**self).latest_tag()
    }
}
