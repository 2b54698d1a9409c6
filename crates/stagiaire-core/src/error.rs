use thiserror::Error;

#[derive(Error, Debug)]
pub enum StagiaireError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0}")]
    Authentication(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl StagiaireError {
    pub fn not_found(kind: &str, id: &str) -> Self {
        Self::NotFound(format!("{} {}", kind, id))
    }

    pub fn required(field: &str) -> Self {
        Self::Validation(format!("{} is required", field))
    }

    /// Stable snake_case name of the variant, used in CLI error output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::Validation(_) => "validation",
            Self::Authentication(_) => "authentication",
            Self::PermissionDenied(_) => "permission_denied",
            Self::Io(_) => "io",
            Self::Serialization(_) => "serialization",
            Self::Internal(_) => "internal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authentication_message_is_bare() {
        let err = StagiaireError::Authentication("Incorrect email or password".into());
        assert_eq!(err.to_string(), "Incorrect email or password");
    }

    #[test]
    fn test_helpers() {
        assert_eq!(
            StagiaireError::not_found("Task", "tsk-9").to_string(),
            "Not found: Task tsk-9"
        );
        assert_eq!(
            StagiaireError::required("Title").to_string(),
            "Validation error: Title is required"
        );
    }

    #[test]
    fn test_kind() {
        assert_eq!(StagiaireError::not_found("Task", "tsk-9").kind(), "not_found");
        assert_eq!(
            StagiaireError::PermissionDenied("interns".into()).kind(),
            "permission_denied"
        );
    }
}
