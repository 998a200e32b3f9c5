//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides a set of convenience methods for applying
//! ANSI styling via the `colored` crate. Implementations for `&str` and
//! `String` are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};
use textwrap::{Options, termwidth};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn room_titlebar_style(&self) -> ColoredString;
    fn description_style(&self) -> ColoredString;
    fn exit_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn engine_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
    fn title_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn room_titlebar_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10).underline()
    }
    fn description_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn exit_style(&self) -> ColoredString {
        self.italic().truecolor(110, 220, 110)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn engine_style(&self) -> ColoredString {
        self.truecolor(75, 80, 75)
    }
    fn prompt_style(&self) -> ColoredString {
        self.bold().truecolor(220, 180, 40)
    }
    fn title_style(&self) -> ColoredString {
        self.bright_yellow().underline()
    }
}

impl GameStyle for String {
    fn room_titlebar_style(&self) -> ColoredString {
        self.as_str().room_titlebar_style()
    }
    fn description_style(&self) -> ColoredString {
        self.as_str().description_style()
    }
    fn exit_style(&self) -> ColoredString {
        self.as_str().exit_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn engine_style(&self) -> ColoredString {
        self.as_str().engine_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
    fn title_style(&self) -> ColoredString {
        self.as_str().title_style()
    }
}

/// Wrapping options for ordinary paragraphs at the current terminal width.
pub fn normal_block() -> Options<'static> {
    Options::new(termwidth().min(100))
}

/// Wrapping options for text set in by four columns.
pub fn indented_block() -> Options<'static> {
    normal_block().initial_indent("    ").subsequent_indent("    ")
}
