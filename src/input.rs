// Input resolution
//
// Picks exactly one SQL source for the invocation and buffers it completely:
// the clipboard when requested, otherwise a single positional file, otherwise
// standard input.

use std::fs;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::config::{Config, InputSource};
use crate::error::{InputError, Result, Sql2JsonError};

/// Anything that can hand over the current clipboard text
pub trait ClipboardSource {
    fn read_text(&mut self) -> std::result::Result<String, String>;
}

/// The desktop clipboard, opened lazily so it is only touched when requested
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardSource for SystemClipboard {
    fn read_text(&mut self) -> std::result::Result<String, String> {
        let mut clipboard = arboard::Clipboard::new().map_err(|e| e.to_string())?;
        clipboard.get_text().map_err(|e| e.to_string())
    }
}

/// Decide which source the configuration selects. Positional arguments are
/// only validated when the clipboard is not in use.
pub fn select_source(config: &Config) -> Result<InputSource> {
    if config.use_clipboard {
        return Ok(InputSource::Clipboard);
    }
    match config.inputs.as_slice() {
        [] => Ok(InputSource::Stdin),
        [path] => Ok(InputSource::File(path.clone())),
        _ => Err(Sql2JsonError::Usage(
            "Too many positional arguments (usage: sql2json [flags] [file])".to_string(),
        )),
    }
}

/// Read the whole SQL text for this invocation
pub fn resolve_input<C, R>(config: &Config, clipboard: &mut C, stdin: R) -> Result<String>
where
    C: ClipboardSource + ?Sized,
    R: Read,
{
    let source = select_source(config)?;
    debug!("Reading SQL from {:?}", source);

    let bytes = match source {
        InputSource::Clipboard => {
            let text = clipboard.read_text().map_err(Sql2JsonError::Clipboard)?;
            return Ok(text);
        }
        InputSource::File(path) => read_file(&path)?,
        InputSource::Stdin => read_all(stdin)?,
    };

    debug!("Read {} bytes of SQL", bytes.len());
    Ok(String::from_utf8(bytes).map_err(InputError::Encoding)?)
}

fn read_file(path: &Path) -> std::result::Result<Vec<u8>, InputError> {
    let metadata = fs::metadata(path).map_err(|source| InputError::Inaccessible {
        path: path.to_path_buf(),
        source,
    })?;

    if !metadata.is_file() {
        return Err(InputError::NotRegularFile {
            path: path.to_path_buf(),
        });
    }

    fs::read(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn read_all<R: Read>(mut reader: R) -> std::result::Result<Vec<u8>, InputError> {
    let mut buffer = Vec::new();
    reader
        .read_to_end(&mut buffer)
        .map_err(InputError::Stdin)?;
    Ok(buffer)
}
