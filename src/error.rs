use std::fmt;
use std::io;

macro_rules! err {
    ($($arg:tt)*) => {
        $crate::error::Error {
            message: format!($($arg)*),
        }
    }
}

pub(crate) use err;

pub struct Error {
    pub message: String,
}

// main returns Result<(), Error>, and std prints the Err with Debug.
impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        err!("Failed to write to stdout: {}", e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_bare_message() {
        let e = err!("Failed to register {} handler", "SIGINT");
        assert_eq!(format!("{:?}", e), "Failed to register SIGINT handler");
        assert_eq!(e.to_string(), "Failed to register SIGINT handler");
    }

    #[test]
    fn test_from_io() {
        let e: Error = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert_eq!(e.message, "Failed to write to stdout: pipe closed");
    }
}
