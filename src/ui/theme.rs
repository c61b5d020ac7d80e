//! Color palettes backing the theme setting.

use ratatui::style::Color;

use crate::config::Theme;

/// Resolved colors used across every screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Regular text.
    pub text: Color,
    /// De-emphasized text (hints, timestamps).
    pub dim: Color,
    /// Titles and focused elements.
    pub accent: Color,
    /// Background of the selected list row.
    pub highlight_bg: Color,
    /// Error status messages.
    pub error: Color,
    /// Success status messages.
    pub success: Color,
}

impl Palette {
    /// Palette for a theme preference.
    ///
    /// `System` stays on the terminal's own foreground/background so it
    /// follows whatever the emulator is configured to.
    #[must_use]
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::System => Self {
                text: Color::Reset,
                dim: Color::DarkGray,
                accent: Color::Cyan,
                highlight_bg: Color::DarkGray,
                error: Color::Red,
                success: Color::Green,
            },
            Theme::Light => Self {
                text: Color::Black,
                dim: Color::Gray,
                accent: Color::Blue,
                highlight_bg: Color::Gray,
                error: Color::LightRed,
                success: Color::Green,
            },
            Theme::Dark => Self {
                text: Color::White,
                dim: Color::DarkGray,
                accent: Color::LightCyan,
                highlight_bg: Color::DarkGray,
                error: Color::LightRed,
                success: Color::LightGreen,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// # Palette per Theme
    ///
    /// Tests that each theme resolves to its own palette.
    ///
    /// ## Test Scenario
    /// - Resolves all three themes
    ///
    /// ## Expected Outcome
    /// - The palettes differ and System keeps the terminal foreground
    #[test]
    fn test_palette_per_theme() {
        let system = Palette::for_theme(Theme::System);
        let light = Palette::for_theme(Theme::Light);
        let dark = Palette::for_theme(Theme::Dark);

        assert_eq!(system.text, Color::Reset);
        assert_eq!(light.text, Color::Black);
        assert_eq!(dark.text, Color::White);
        assert_ne!(light, dark);
    }
}
