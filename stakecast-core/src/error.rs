use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("non-finite scalar bound: {value}")]
    NonFiniteBound { value: f64 },

    #[error("empty scalar range: min {min} must be below max {max}")]
    EmptyRange { min: f64, max: f64 },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl EngineError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
