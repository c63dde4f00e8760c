use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::Config;
use crate::error::{OutputError, Result};

/// Destination of the rendered document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    Stdout,
    File(PathBuf),
}

impl Sink {
    pub fn from_config(config: &Config) -> Self {
        match &config.out {
            Some(path) => Sink::File(path.clone()),
            None => Sink::Stdout,
        }
    }

    /// Write the whole buffer in one go. An output file is created (or
    /// truncated) here and closed when this call returns, on every path.
    pub fn write(&self, rendered: &[u8]) -> Result<()> {
        match self {
            Sink::Stdout => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                write_buffer(&mut handle, rendered)
            }
            Sink::File(path) => {
                let mut file = open_output(path)?;
                debug!("Writing {} bytes to {}", rendered.len(), path.display());
                write_buffer(&mut file, rendered)
            }
        }
    }
}

fn open_output(path: &Path) -> Result<File> {
    File::create(path).map_err(|source| {
        OutputError::Open {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}

/// Write and flush into any writer
pub fn write_buffer<W: Write>(writer: &mut W, rendered: &[u8]) -> Result<()> {
    writer.write_all(rendered).map_err(OutputError::Write)?;
    writer.flush().map_err(OutputError::Write)?;
    Ok(())
}
