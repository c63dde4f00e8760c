use std::io::{self, Write};

use colored::{Color, Colorize};
use serde_json::ser::{CharEscape, CompactFormatter, Formatter, PrettyFormatter};

/// Foreground colors for each kind of JSON token
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub key: Color,
    pub string: Color,
    pub number: Color,
    pub boolean: Color,
    pub null: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            key: Color::White,
            string: Color::Green,
            number: Color::Cyan,
            boolean: Color::Yellow,
            null: Color::Magenta,
        }
    }
}

/// serde_json formatter that colors scalar tokens and object keys. Each token
/// is first rendered by the inner formatter into a scratch buffer, then
/// painted by `colored`. Layout (whitespace, newlines, indentation) is left
/// entirely to the inner formatter; punctuation is never colored.
pub struct ColorFormatter<F> {
    inner: F,
    palette: Palette,
    in_key: bool,
    // Open string token and its color, between begin_string and end_string
    string: Option<(Color, Vec<u8>)>,
}

impl ColorFormatter<CompactFormatter> {
    pub fn compact(palette: Palette) -> Self {
        Self::wrap(CompactFormatter, palette)
    }
}

impl<'a> ColorFormatter<PrettyFormatter<'a>> {
    /// Indented output. Only a width in spaces is accepted; callers holding a
    /// tab indentation have to pick a width themselves.
    pub fn pretty(indent: &'a [u8], palette: Palette) -> Self {
        Self::wrap(PrettyFormatter::with_indent(indent), palette)
    }
}

impl<F> ColorFormatter<F> {
    fn wrap(inner: F, palette: Palette) -> Self {
        // Colors were asked for; only --no-color turns them off, not
        // terminal detection
        colored::control::set_override(true);
        Self {
            inner,
            palette,
            in_key: false,
            string: None,
        }
    }
}

fn paint<W: ?Sized + Write>(writer: &mut W, token: &[u8], color: Color) -> io::Result<()> {
    let text = std::str::from_utf8(token).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    write!(writer, "{}", text.color(color))
}

impl<F: Formatter> Formatter for ColorFormatter<F> {
    fn write_null<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        let mut token = Vec::new();
        self.inner.write_null(&mut token)?;
        paint(writer, &token, self.palette.null)
    }

    fn write_bool<W: ?Sized + Write>(&mut self, writer: &mut W, value: bool) -> io::Result<()> {
        let mut token = Vec::new();
        self.inner.write_bool(&mut token, value)?;
        paint(writer, &token, self.palette.boolean)
    }

    fn write_i64<W: ?Sized + Write>(&mut self, writer: &mut W, value: i64) -> io::Result<()> {
        let mut token = Vec::new();
        self.inner.write_i64(&mut token, value)?;
        paint(writer, &token, self.palette.number)
    }

    fn write_u64<W: ?Sized + Write>(&mut self, writer: &mut W, value: u64) -> io::Result<()> {
        let mut token = Vec::new();
        self.inner.write_u64(&mut token, value)?;
        paint(writer, &token, self.palette.number)
    }

    fn write_f64<W: ?Sized + Write>(&mut self, writer: &mut W, value: f64) -> io::Result<()> {
        let mut token = Vec::new();
        self.inner.write_f64(&mut token, value)?;
        paint(writer, &token, self.palette.number)
    }

    fn write_number_str<W: ?Sized + Write>(&mut self, writer: &mut W, value: &str) -> io::Result<()> {
        let mut token = Vec::new();
        self.inner.write_number_str(&mut token, value)?;
        paint(writer, &token, self.palette.number)
    }

    fn begin_string<W: ?Sized + Write>(&mut self, _writer: &mut W) -> io::Result<()> {
        let color = if self.in_key {
            self.palette.key
        } else {
            self.palette.string
        };
        let mut token = Vec::new();
        self.inner.begin_string(&mut token)?;
        self.string = Some((color, token));
        Ok(())
    }

    fn write_string_fragment<W: ?Sized + Write>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()> {
        match self.string.as_mut() {
            Some((_, token)) => self.inner.write_string_fragment(token, fragment),
            None => self.inner.write_string_fragment(writer, fragment),
        }
    }

    fn write_char_escape<W: ?Sized + Write>(&mut self, writer: &mut W, char_escape: CharEscape) -> io::Result<()> {
        match self.string.as_mut() {
            Some((_, token)) => self.inner.write_char_escape(token, char_escape),
            None => self.inner.write_char_escape(writer, char_escape),
        }
    }

    fn end_string<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        match self.string.take() {
            Some((color, mut token)) => {
                self.inner.end_string(&mut token)?;
                paint(writer, &token, color)
            }
            None => self.inner.end_string(writer),
        }
    }

    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.in_key = true;
        self.inner.begin_object_key(writer, first)
    }

    fn end_object_key<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.in_key = false;
        self.inner.end_object_key(writer)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }
}
