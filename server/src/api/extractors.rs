//! Path validation helpers for API routes

/// Maximum length for IDs (task_id, session_id, etc.)
pub const MAX_ID_LENGTH: usize = 256;

/// Validate project_id: 1-64 chars, alphanumeric + dash/underscore
pub fn is_valid_project_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= 64
        && id
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}

/// Validate generic ID length (task_id, session_id, etc.)
pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty() && id.len() <= MAX_ID_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_project_ids() {
        assert!(is_valid_project_id("proj-1"));
        assert!(is_valid_project_id("a"));
        assert!(is_valid_project_id("my_project_2024"));
    }

    #[test]
    fn test_invalid_project_ids() {
        assert!(!is_valid_project_id(""));
        assert!(!is_valid_project_id("has space"));
        assert!(!is_valid_project_id("path/traversal"));
        assert!(!is_valid_project_id(&"x".repeat(65)));
    }

    #[test]
    fn test_valid_generic_ids() {
        assert!(is_valid_id("task-123"));
        assert!(!is_valid_id(""));
        assert!(!is_valid_id(&"x".repeat(257)));
    }
}
