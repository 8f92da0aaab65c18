/// Port-level errors raised by repository adapters.
/// Variants carry code-style identifiers so the presentation layer can translate them.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Persistence,
    #[error("repository.duplicated")]
    Duplicated,
    #[error("repository.database_error")]
    DatabaseError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expose_code_style_messages() {
        assert_eq!(RepositoryError::NotFound.to_string(), "repository.not_found");
        assert_eq!(RepositoryError::Duplicated.to_string(), "repository.duplicated");
    }
}
