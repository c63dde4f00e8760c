// Output shaping
//
// Pretty-printing and colorization are two independent axes. Both are decided
// from the configuration up front, then the minified document is rendered in
// one pass.

pub mod color;

use log::debug;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::config::{Config, IndentSpec};
use crate::error::{OutputError, Result};

pub use self::color::{ColorFormatter, Palette};

/// How the document is laid out, before any coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Minified,
    Indented(IndentSpec),
}

/// Width in spaces used by the colorizer for an indentation spec. The
/// colorizer cannot emit tabs, so a tab degrades to a single space.
pub fn color_indent_width(indent: IndentSpec) -> usize {
    match indent {
        IndentSpec::Tab => 1,
        IndentSpec::Spaces(n) => n,
    }
}

/// Resolve the layout for this invocation. The indent is only validated when
/// the output is going to be indented.
pub fn layout_for(config: &Config) -> Result<Layout> {
    if config.pretty_active() {
        Ok(Layout::Indented(config.indent_spec()?))
    } else {
        Ok(Layout::Minified)
    }
}

/// Turn the minified JSON of a parsed document into the bytes to emit,
/// including the single trailing newline.
pub fn render(minified: &[u8], config: &Config) -> Result<Vec<u8>> {
    let layout = layout_for(config)?;
    let color = config.color_active();
    debug!("Rendering with layout {:?}, color {}", layout, color);

    let mut out = if layout == Layout::Minified && !color {
        minified.to_vec()
    } else {
        let value: Value = serde_json::from_slice(minified)?;
        if color {
            render_colored(&value, layout, Palette::default())?
        } else {
            render_plain(&value, layout)?
        }
    };

    out.push(b'\n');
    Ok(out)
}

/// Uncolored rendering of an already parsed value
pub fn render_plain(value: &Value, layout: Layout) -> Result<Vec<u8>> {
    match layout {
        Layout::Minified => Ok(serde_json::to_vec(value)?),
        Layout::Indented(indent) => {
            let unit = indent.unit();
            let mut buf = Vec::new();
            let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(unit.as_bytes()));
            value.serialize(&mut ser)?;
            Ok(buf)
        }
    }
}

/// ANSI-colored rendering of an already parsed value
pub fn render_colored(value: &Value, layout: Layout, palette: Palette) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    match layout {
        Layout::Minified => {
            let mut ser = Serializer::with_formatter(&mut buf, ColorFormatter::compact(palette));
            value.serialize(&mut ser).map_err(OutputError::Colorize)?;
        }
        Layout::Indented(indent) => {
            if indent == IndentSpec::Tab {
                debug!("Tab indentation is not supported with color; using one space");
            }
            let unit = " ".repeat(color_indent_width(indent));
            let mut ser = Serializer::with_formatter(&mut buf, ColorFormatter::pretty(unit.as_bytes(), palette));
            value.serialize(&mut ser).map_err(OutputError::Colorize)?;
        }
    }
    Ok(buf)
}
