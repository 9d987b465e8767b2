use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("message of {bytes} bytes is too large: bit length would overflow the 64-bit length field")]
    InputTooLarge { bytes: usize },

    #[error("unsupported input mode '{mode}': expected 'text' or 'binary'")]
    UnsupportedInputMode { mode: String },

    #[error("cannot read source '{}': {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
