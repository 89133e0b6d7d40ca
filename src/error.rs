use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollapseError {
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl CollapseError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        CollapseError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

pub type CollapseResult<T> = Result<T, CollapseError>;
