// Command-line surface and per-invocation configuration
//
// The clap-derived `Cli` mirrors the flags exactly as typed; `Config` is the
// resolved, immutable view handed to every stage of the pipeline.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

use crate::error::ConfigError;

pub const DEFAULT_INDENT: &str = "tab";

/// Widest space indentation accepted for `--indent`
pub const MAX_INDENT_WIDTH: usize = 64;

#[derive(Parser, Debug)]
#[command(
    name = "sql2json",
    author,
    version,
    about = "Convert a SQL script into the JSON form of its parse tree"
)]
pub struct Cli {
    /// SQL file to read (standard input is used when omitted)
    #[arg(value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    /// Disable pretty-printed (indented) JSON output
    #[arg(long)]
    pub no_pretty: bool,

    /// Disable colorized JSON output
    #[arg(long)]
    pub no_color: bool,

    /// Output file path (implies pretty output)
    #[arg(long, value_name = "PATH")]
    pub out: Option<String>,

    /// Indentation style: 'tab' or a number of spaces from 0 to 64 (e.g. '2', '4')
    #[arg(long, default_value = DEFAULT_INDENT, value_name = "tab|N")]
    pub indent: String,

    /// Read the SQL script from the system clipboard
    #[arg(short = 'c', long)]
    pub use_clipboard: bool,
}

/// Indentation unit for one nesting level of pretty output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentSpec {
    Tab,
    Spaces(usize),
}

impl IndentSpec {
    /// The literal text written once per nesting level by the plain renderer
    pub fn unit(&self) -> String {
        match self {
            IndentSpec::Tab => "\t".to_string(),
            IndentSpec::Spaces(n) => " ".repeat(*n),
        }
    }
}

impl FromStr for IndentSpec {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "tab" {
            return Ok(IndentSpec::Tab);
        }
        match s.parse::<usize>() {
            Ok(n) if n <= MAX_INDENT_WIDTH => Ok(IndentSpec::Spaces(n)),
            _ => Err(ConfigError::InvalidIndent(s.to_string())),
        }
    }
}

/// Where the SQL text is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Clipboard,
    File(PathBuf),
    Stdin,
}

/// Resolved options for a single invocation
#[derive(Debug, Clone)]
pub struct Config {
    pub pretty: bool,
    pub color: bool,
    /// Raw `--indent` token; only resolved when pretty output is produced
    pub indent: String,
    pub use_clipboard: bool,
    pub out: Option<PathBuf>,
    pub inputs: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pretty: true,
            color: true,
            indent: DEFAULT_INDENT.to_string(),
            use_clipboard: false,
            out: None,
            inputs: Vec::new(),
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            pretty: !cli.no_pretty,
            color: !cli.no_color,
            indent: cli.indent,
            use_clipboard: cli.use_clipboard,
            // An empty --out behaves like no --out at all
            out: cli.out.filter(|p| !p.is_empty()).map(PathBuf::from),
            inputs: cli.inputs,
        }
    }
}

impl Config {
    /// Pretty output is produced when requested or whenever writing to a file,
    /// even if `--no-pretty` was given.
    pub fn pretty_active(&self) -> bool {
        self.pretty || self.out.is_some()
    }

    pub fn color_active(&self) -> bool {
        self.color
    }

    pub fn indent_spec(&self) -> Result<IndentSpec, ConfigError> {
        self.indent.parse()
    }
}
