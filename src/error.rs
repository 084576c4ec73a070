use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("serialization failed: {0}")]
    Serialization(String),

    #[error("invalid config json: {0}")]
    InvalidConfigJson(String),
}
