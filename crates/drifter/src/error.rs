#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("config serialization failed: {0}")]
    Serialize(#[from] ron::Error),
    #[error("invalid `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: &'static str) -> Self {
        Self::Invalid { field, reason }
    }
}
