#[derive(thiserror::Error, Debug)]
pub(crate) enum RandomSourceError {
    #[error("Secure random source unavailable: {0}")]
    Unavailable(#[from] getrandom::Error),
    #[error("Secure random source returned a degenerate buffer")]
    Degenerate,
}

/// A source of cryptographically secure random bytes.
///
/// Implementations fill the whole destination or fail. There is no partial fill.
pub(crate) trait SecureRandom {
    fn fill(&mut self, destination: &mut [u8]) -> Result<(), RandomSourceError>;
}

/// Reads from the operating system entropy source
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct OsRandom;

impl SecureRandom for OsRandom {
    fn fill(&mut self, destination: &mut [u8]) -> Result<(), RandomSourceError> {
        getrandom::getrandom(destination)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_random_fills_buffer() {
        let mut buffer = [0u8; 32];
        OsRandom.fill(&mut buffer).unwrap();

        let first = buffer[0];
        assert!(!buffer.iter().all(|byte| *byte == first));
    }

    #[test]
    fn test_os_random_empty_buffer() {
        let mut buffer = [0u8; 0];
        assert!(OsRandom.fill(&mut buffer).is_ok());
    }

    #[test]
    fn test_unavailable_from_getrandom_error() {
        let error = RandomSourceError::from(getrandom::Error::UNSUPPORTED);
        assert!(matches!(error, RandomSourceError::Unavailable(_)));
        assert!(error
            .to_string()
            .starts_with("Secure random source unavailable"));
        let source = std::error::Error::source(&error).unwrap();
        assert!(source.downcast_ref::<getrandom::Error>().is_some());
    }
}
