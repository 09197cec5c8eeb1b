use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to parse location dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("location dataset contains no cities")]
    Empty,
}
