//! Error types for cardset operations.

extern crate alloc;

use alloc::string::String;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while parsing a cardset `config.txt`.
///
/// Each variant names the first check that failed; the parser stops at
/// that point and no descriptor is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The config file is missing, unreadable, or empty.
    #[error("config file is missing, unreadable, or empty")]
    MissingFile,
    /// The config file has fewer than six lines.
    #[error("config file has fewer than six lines")]
    TooFewLines,
    /// The header line does not start with the PySol magic string.
    #[error("header does not start with the PySol cardset magic")]
    BadMagic,
    /// The format version in the header is not an integer.
    #[error("format version is not an integer")]
    BadVersion,
    /// A version 3+ header is missing fields or has a non-integer field.
    #[error("header field is missing or malformed")]
    BadHeaderField,
    /// The cardset is not a 52-card French deck.
    #[error("only 52-card French decks are supported")]
    UnsupportedDeckType,
    /// No image extension is declared (format versions below 3).
    #[error("cardset does not declare an image extension")]
    MissingExtension,
    /// The name line is missing or empty.
    #[error("cardset name is missing")]
    MissingName,
    /// The geometry line is not three integers.
    #[error("card geometry line is malformed")]
    BadGeometry,
    /// The backs line lists no images.
    #[error("cardset lists no back images")]
    NoBacks,
}

/// Errors reported by an image decoder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The image could not be read or decoded.
    #[error("failed to decode {}: {message}", path.display())]
    ImageDecodeFailed {
        /// Path of the image that failed.
        path: PathBuf,
        /// Decoder message.
        message: String,
    },
}
