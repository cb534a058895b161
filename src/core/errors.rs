use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("HTTP error {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Failed to start background runtime: {0}")]
    Runtime(String),

    #[error("Window error: {0}")]
    Gui(String),
}

impl From<std::io::Error> for DashError {
    fn from(error: std::io::Error) -> Self {
        DashError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for DashError {
    fn from(error: reqwest::Error) -> Self {
        DashError::Reqwest(Box::new(error))
    }
}
