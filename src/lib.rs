// sql2json: SQL script to JSON parse tree converter

pub mod config;
pub mod error;
pub mod input;
pub mod parse;
pub mod render;
pub mod sink;

use std::io::Read;

use log::debug;

pub use config::{Cli, Config, IndentSpec, InputSource};
pub use error::{Result, Sql2JsonError};
pub use input::{ClipboardSource, SystemClipboard};
pub use parse::{SqlDocument, parse_sql};
pub use sink::Sink;

/// Resolve, parse and render one document without writing it anywhere
pub fn convert<C, R>(config: &Config, clipboard: &mut C, stdin: R) -> Result<Vec<u8>>
where
    C: ClipboardSource + ?Sized,
    R: Read,
{
    let sql = input::resolve_input(config, clipboard, stdin)?;
    let document = parse::parse_sql(&sql)?;
    let minified = document.to_minified_json()?;
    render::render(&minified, config)
}

/// Full pipeline for one invocation: read, parse, render, then write once
pub fn run(config: &Config) -> Result<()> {
    let rendered = convert(config, &mut SystemClipboard, std::io::stdin().lock())?;
    let sink = Sink::from_config(config);
    debug!("Writing {} bytes to {:?}", rendered.len(), sink);
    sink.write(&rendered)
}
