// src/error.rs
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SorError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed SOR file: {0}")]
    MalformedFile(String),

    #[error("{section}: read of {len} bytes at offset {offset} exceeds payload of {available} bytes")]
    DecodeBounds {
        section: &'static str,
        offset: usize,
        len: usize,
        available: usize,
    },

    #[error("unsupported Bellcore version: {0}")]
    UnsupportedVersion(f64),
}

pub type Result<T> = std::result::Result<T, SorError>;
