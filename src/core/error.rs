//! Structural conversion errors
//!
//! Per-line parse failures never show up here; they are reported in-band
//! with the sentinel hours value.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("cannot read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("{} is not valid UTF-8: {source}", .path.display())]
    Encoding {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },

    #[error("{} is not well-formed XML: {source}", .path.display())]
    Xml {
        path: PathBuf,
        source: roxmltree::Error,
    },

    #[error("{} has no <{element}> element", .path.display())]
    MissingElement {
        path: PathBuf,
        element: &'static str,
    },

    #[error("refusing to overwrite the input file {}", .path.display())]
    SameAsInput { path: PathBuf },

    #[error("cannot write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
