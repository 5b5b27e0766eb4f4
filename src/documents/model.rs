//! Document model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored document reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Stable identifier.
    pub id: Uuid,

    /// Location of the document resource. Must not be blank.
    pub path: String,
}

impl Document {
    /// Create a document with a fresh id.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            path: path.into(),
        }
    }

    /// True when the path is empty or whitespace only.
    pub fn has_blank_path(&self) -> bool {
        self.path.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_path_detection() {
        assert!(Document::new("").has_blank_path());
        assert!(Document::new("   ").has_blank_path());
        assert!(!Document::new("/files/report.pdf").has_blank_path());
    }
}
