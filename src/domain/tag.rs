use std::fmt;

/// Represents a git tag as read from the repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    /// Create a new tag from a string
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    /// Tag name with alphabetic characters stripped (e.g., "v1.2.3" -> "1.2.3")
    pub fn version_candidate(&self) -> String {
        super::version::normalize(&self.name)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
