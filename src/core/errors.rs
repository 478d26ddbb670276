use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Word list contains duplicate id {0}")]
    DuplicateId(u32),

    #[error("Operation cancelled")]
    Cancelled,
}

impl From<std::io::Error> for DeckError {
    fn from(error: std::io::Error) -> Self {
        DeckError::Io(Box::new(error))
    }
}
