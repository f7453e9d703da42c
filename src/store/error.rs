//! Save-file error types.

use derive_more::{Display, Error, From};

/// Error produced while reading or writing a save file.
#[derive(Debug, Display, Error, From)]
pub enum SaveError {
    /// Underlying file I/O failure.
    #[display("save file I/O error: {_0}")]
    Io(std::io::Error),
    /// The snapshot could not be encoded or decoded.
    #[display("save file format error: {_0}")]
    Format(serde_json::Error),
}
