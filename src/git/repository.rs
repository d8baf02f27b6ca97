use std::path::Path;

use git2::{DescribeFormatOptions, DescribeOptions, ErrorClass, ErrorCode, Repository as Git2Repo};
use tracing::debug;

use crate::domain::Tag;
use crate::error::{ReleaseError, Result};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Discover the git repository containing `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repo::discover(path).map_err(|source| ReleaseError::NotARepository {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(workdir = ?repo.workdir(), "opened repository");

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

impl super::Repository for Git2Repository {
    fn latest_tag(&self) -> Result<Tag> {
        let mut describe_options = DescribeOptions::new();
        describe_options.describe_tags();

        // libgit2 reports "no reference found" as a generic error of class Describe
        let describe = self
            .repo
            .describe(&describe_options)
            .map_err(|e| match (e.code(), e.class()) {
                (ErrorCode::UnbornBranch, _) => ReleaseError::no_tag("repository has no commits"),
                (ErrorCode::NotFound, _) | (_, ErrorClass::Describe) => {
                    ReleaseError::no_tag(format!("no tag reachable from HEAD: {}", e.message()))
                }
                _ => ReleaseError::Git(e),
            })?;

        // abbreviated_size(0) drops the "-<n>-g<hash>" suffix, leaving the bare tag name
        let mut format_options = DescribeFormatOptions::new();
        format_options.abbreviated_size(0);
        let name = describe.format(Some(&format_options))?;

        debug!(tag = %name, "described HEAD");
        Ok(Tag::new(name))
    }
}
