use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("PDF write failed: {0}")]
    PdfWrite(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
