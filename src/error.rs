use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

/// The result type used in the entire crate.
pub type Result<T> = std::result::Result<T, NetErr>;

/// The crate's error type.
#[derive(Debug)]
pub enum NetErr {
    /// Two vectors that must agree in length do not.
    SizeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    /// A network or training configuration was rejected.
    InvalidConfig(String),
    /// No activation function goes by the given name.
    UnknownActivation(String),
    /// Reading an experiment file failed.
    Io(io::Error),
    /// An experiment document is not valid JSON for its schema.
    Json(serde_json::Error),
}

impl Display for NetErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetErr::SizeMismatch {
                what,
                got,
                expected,
            } => write!(f, "size mismatch for {what}: got {got}, expected {expected}"),
            NetErr::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            NetErr::UnknownActivation(name) => write!(f, "unknown activation function: {name}"),
            NetErr::Io(e) => write!(f, "io error: {e}"),
            NetErr::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl Error for NetErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            NetErr::Io(e) => Some(e),
            NetErr::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for NetErr {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for NetErr {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Fails with `SizeMismatch` unless `got == expected`.
pub(crate) fn ensure_len(what: &'static str, got: usize, expected: usize) -> Result<()> {
    if got != expected {
        return Err(NetErr::SizeMismatch {
            what,
            got,
            expected,
        });
    }

    Ok(())
}
