use thiserror::Error;

pub type Result<T> = std::result::Result<T, Pal16Error>;

#[derive(Debug, Error)]
pub enum Pal16Error {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("color parse error: {0}")]
    Parse(String),

    #[error("p16q format error: {0}")]
    Format(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
