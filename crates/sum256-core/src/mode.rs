use std::str::FromStr;

use crate::Error;

/// How a driver turns an operand into the bytes handed to the digest core.
///
/// The core itself only ever sees bytes; this selection (and the file or
/// text decoding behind it) is strictly the caller's concern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    /// Operands are literal text; their UTF-8 bytes are hashed.
    Text,
    /// Operands are file paths; the file contents are hashed.
    Binary,
}

impl FromStr for InputMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "binary" => Ok(Self::Binary),
            _ => Err(Error::UnsupportedInputMode {
                mode: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_both_modes() {
        assert_eq!("text".parse::<InputMode>().unwrap(), InputMode::Text);
        assert_eq!("binary".parse::<InputMode>().unwrap(), InputMode::Binary);
    }

    #[test]
    fn test_parse_normalizes_case_and_whitespace() {
        assert_eq!("TEXT".parse::<InputMode>().unwrap(), InputMode::Text);
        assert_eq!(" Binary ".parse::<InputMode>().unwrap(), InputMode::Binary);
    }

    #[test]
    fn test_parse_rejects_unknown_mode() {
        let err = "base64".parse::<InputMode>().unwrap_err();
        match err {
            Error::UnsupportedInputMode { mode } => assert_eq!(mode, "base64"),
            other => panic!("expected UnsupportedInputMode, got {:?}", other),
        }
    }
}
