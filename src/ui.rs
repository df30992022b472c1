//! Terminal output styling.

use console::Style;

/// Tent's visual theme.
#[derive(Debug, Clone)]
pub struct TentTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (bold cyan).
    pub header: Style,
}

impl Default for TentTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl TentTheme {
    /// Create the default tent theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
        }
    }
}

/// Print a success line to stdout.
pub fn print_success(message: &str) {
    println!("{}", TentTheme::new().success.apply_to(message));
}

/// Print a warning line to stderr.
pub fn print_warning(message: &str) {
    eprintln!("{}", TentTheme::new().warning.apply_to(message));
}

/// Print an error line to stderr.
pub fn print_error(message: &str) {
    eprintln!("{}", TentTheme::new().error.apply_to(message));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_styles_apply_without_panicking() {
        let theme = TentTheme::new();
        let rendered = format!("{}", theme.header.apply_to("Configured projects:"));
        assert!(rendered.contains("Configured projects:"));
    }
}
