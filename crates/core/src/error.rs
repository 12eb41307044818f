/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid configuration for {key}: {message}")]
    Config { key: &'static str, message: String },
}

/// Client-side validation failures. Raised before anything is sent.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// A named form field was absent from the field source.
    #[error("Missing form field: {0}")]
    MissingField(&'static str),

    /// A venue identifier was empty.
    #[error("Venue identifier must not be empty")]
    EmptyIdentifier,

    /// One or more fields failed their rules.
    #[error("Invalid venue record: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

impl ValidationError {
    /// Names of the fields that failed, sorted for stable output.
    pub fn fields(&self) -> Vec<String> {
        match self {
            ValidationError::MissingField(name) => vec![(*name).to_string()],
            ValidationError::EmptyIdentifier => vec!["id".to_string()],
            ValidationError::Invalid(errors) => {
                let mut names: Vec<String> = errors
                    .field_errors()
                    .keys()
                    .map(|k| k.to_string())
                    .collect();
                names.sort();
                names
            }
        }
    }
}
