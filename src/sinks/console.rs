//! Console mirror
//!
//! Every line written to the file sink is also mirrored to standard output
//! for operator visibility. The mirror shares the facade's lock with the file
//! write, so the two never interleave across threads.

use crate::core::formatter::LogLine;
use colored::Colorize;

pub struct ConsoleMirror {
    use_colors: bool,
}

impl ConsoleMirror {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Mirror one formatted line to stdout, colored by its level when enabled.
    pub fn write(&self, line: &LogLine) {
        if self.use_colors {
            println!("{}", line.text().color(line.level().color_code()));
        } else {
            println!("{}", line.text());
        }
    }

    pub fn flush(&self) {
        use std::io::Write;
        let _ = std::io::stdout().flush();
    }
}

impl Default for ConsoleMirror {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::log_level::LogLevel;

    #[test]
    fn test_write_does_not_panic() {
        let mirror = ConsoleMirror::with_colors(false);
        mirror.write(&LogLine::new("plain line".to_string(), LogLevel::Info));
        mirror.flush();

        let colored = ConsoleMirror::new();
        colored.write(&LogLine::new("colored line".to_string(), LogLevel::Error));
    }
}
