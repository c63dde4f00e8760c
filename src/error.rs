use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Failures while resolving the SQL source text
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Cannot access file '{}': {source}", path.display())]
    Inaccessible {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("'{}' is not a regular file.", path.display())]
    NotRegularFile { path: PathBuf },
    #[error("Failed to read file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to read from STDIN: {0}")]
    Stdin(std::io::Error),
    #[error("Input is not valid UTF-8: {0}")]
    Encoding(#[from] FromUtf8Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for --indent: '{0}'")]
    InvalidIndent(String),
}

/// Failures while producing or writing the rendered output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to open output file '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write output: {0}")]
    Write(std::io::Error),
    #[error("Failed to colorize JSON: {0}")]
    Colorize(serde_json::Error),
}

/// Top-level error for one conversion. Every variant is fatal.
#[derive(Error, Debug)]
pub enum Sql2JsonError {
    #[error("{0}")]
    Usage(String),
    #[error("Failed to read from clipboard: {0}")]
    Clipboard(String),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("Failed to parse SQL: {0}")]
    Parse(String),
    #[error("Failed to serialize JSON: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Output(#[from] OutputError),
}

pub type Result<T> = std::result::Result<T, Sql2JsonError>;
