use thiserror::Error;

/// Dashboard errors
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Display element '{0}' not found")]
    ElementNotFound(String),
    #[error("Failed to load transactions: {0}")]
    DataLoad(String),
    #[error("Chart rendering failed: {0}")]
    Chart(String),
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
