use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the launcher
#[derive(Error, Debug)]
pub enum LaunchError {
    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Required environment variables that are unset or empty
    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingVars(Vec<String>),

    /// A fresh .env was just copied from the template and still needs editing
    #[error(".env file not found; created one from .env.example. Please update it with your configuration.")]
    EnvFileCreated,

    /// Neither .env nor the template exists
    #[error(".env file not found and template {} is missing", .0.display())]
    TemplateMissing(PathBuf),

    /// PostgreSQL probe failures
    #[error("Cannot connect to PostgreSQL: {0}")]
    Postgres(#[from] sqlx::Error),

    /// Neo4j probe failures
    #[error("Cannot connect to Neo4j: {0}")]
    Neo4j(#[from] neo4rs::Error),

    /// Child process could not be started
    #[error("Failed to launch {0}: {1}")]
    Spawn(String, std::io::Error),
}

/// Convenient Result type using LaunchError
pub type Result<T> = std::result::Result<T, LaunchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LaunchError::Config("Test error".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("Test error"));
    }

    #[test]
    fn test_missing_vars_lists_names() {
        let err = LaunchError::MissingVars(vec![
            "DATABASE_URL".to_string(),
            "NEO4J_URI".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Missing required environment variables: DATABASE_URL, NEO4J_URI"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let launch_err: LaunchError = io_err.into();
        assert!(matches!(launch_err, LaunchError::Io(_)));
    }
}
