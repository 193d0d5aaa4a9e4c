use std::fmt;

use colored::Colorize;

/// Styles driver output. Plain mode drops all decoration, mirroring the
/// `plain_output` configuration switch.
pub struct Formatter {
    plain: bool,
}

impl Formatter {
    pub fn new(plain: bool) -> Self {
        Self { plain }
    }

    pub fn print_header(&self, title: impl fmt::Display) {
        println!("\n{}", self.header_text(title));
    }

    pub fn header_text(&self, title: impl fmt::Display) -> String {
        let text = format!("=== {} ===", title);
        if self.plain {
            text
        } else {
            text.bold().to_string()
        }
    }

    /// Primary output, printed verbatim (report bodies).
    pub fn print_info(&self, message: impl fmt::Display) {
        println!("{message}");
    }

    /// Secondary narration lines.
    pub fn print_detail(&self, message: impl fmt::Display) {
        if self.plain {
            println!("{message}");
        } else {
            println!("{}", message.to_string().dimmed());
        }
    }
}
