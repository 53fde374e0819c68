//! Visual theme and styling.

use console::Style;

/// Carnet's visual theme.
#[derive(Debug, Clone)]
pub struct CarnetTheme {
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
    /// Style for headers (blue bold).
    pub header: Style,
    /// Style for section titles (bold).
    pub section: Style,
    /// Style for contextual hints (blue dim).
    pub hint: Style,
    /// Style for field labels (bold).
    pub key: Style,
    /// Style for field values (normal).
    pub value: Style,
}

impl Default for CarnetTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl CarnetTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().blue(),
            section: Style::new().bold(),
            hint: Style::new().blue().dim(),
            key: Style::new().bold(),
            value: Style::new(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            section: Style::new(),
            hint: Style::new(),
            key: Style::new(),
            value: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("▣"),
            self.highlight.apply_to(title)
        )
    }

    /// Format a section title with its expanded marker.
    pub fn format_section(&self, title: &str, expanded: bool) -> String {
        let marker = if expanded { "▾" } else { "▸" };
        format!("{}", self.section.apply_to(format!("{} {}", marker, title)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let theme = CarnetTheme::plain();
        let msg = theme.format_success("Sauvegardé");
        assert!(msg.contains("✓"));
        assert!(msg.contains("Sauvegardé"));
    }

    #[test]
    fn theme_formats_warning() {
        let theme = CarnetTheme::plain();
        let msg = theme.format_warning("Attention");
        assert!(msg.contains("⚠"));
        assert!(msg.contains("Attention"));
    }

    #[test]
    fn theme_formats_error() {
        let theme = CarnetTheme::plain();
        let msg = theme.format_error("Échec");
        assert!(msg.contains("✗"));
        assert!(msg.contains("Échec"));
    }

    #[test]
    fn theme_formats_sections() {
        let theme = CarnetTheme::plain();
        assert_eq!(theme.format_section("Santé", true), "▾ Santé");
        assert_eq!(theme.format_section("Bilans", false), "▸ Bilans");
    }

    #[test]
    fn theme_formats_header() {
        let theme = CarnetTheme::plain();
        let msg = theme.format_header("Carnet EPS");
        assert!(msg.contains("Carnet EPS"));
    }

    #[test]
    fn default_impl_matches_new() {
        let default = CarnetTheme::default();
        let new = CarnetTheme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }
}
