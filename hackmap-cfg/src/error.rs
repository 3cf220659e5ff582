/// Errors that can occur while loading the item database or converting a config.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No item named for id {id}")]
    KeyLookup { id: i64 },

    #[error("Invalid number: {token:?}")]
    InvalidNumber { token: String },

    #[error("line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<ConvertError>,
    },
}

impl ConvertError {
    pub fn key_lookup(id: i64) -> Self {
        Self::KeyLookup { id }
    }

    pub fn invalid_number(token: impl Into<String>) -> Self {
        Self::InvalidNumber {
            token: token.into(),
        }
    }

    /// Attach the 1-based source line number to an error.
    pub fn at_line(self, line: usize) -> Self {
        Self::AtLine {
            line,
            source: Box::new(self),
        }
    }
}

/// Parse a trimmed decimal integer token.
pub(crate) fn parse_number(token: &str) -> Result<i64, ConvertError> {
    let trimmed = token.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| ConvertError::invalid_number(trimmed))
}
