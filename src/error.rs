use std::fmt;

#[derive(Debug)]
pub enum Error {
    IO(std::io::Error, Option<String>),
    Json(serde_json::Error),
    InvalidRay(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IO(err, Some(path)) => write!(f, "{}: {}", path, err),
            Error::IO(err, None) => write!(f, "{}", err),
            Error::Json(err) => write!(f, "malformed query document: {}", err),
            Error::InvalidRay(msg) => write!(f, "invalid ray: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IO(err, _) => Some(err),
            Error::Json(err) => Some(err),
            Error::InvalidRay(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IO(err, None)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
