use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown {kind} `{value}`")]
    UnknownVariant { kind: &'static str, value: String },
}

impl CoreError {
    pub fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        CoreError::UnknownVariant {
            kind,
            value: value.into(),
        }
    }
}
