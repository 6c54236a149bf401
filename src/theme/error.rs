use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Unknown theme: {0}. Available: coastal, terracotta, lavender")]
    UnknownTheme(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
