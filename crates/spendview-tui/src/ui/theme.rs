// Centralized theme - all colors and shared styles live here.

use ratatui::style::{Color, Modifier, Style};

/// App background
pub const BG_APP: Color = Color::Rgb(0, 0, 0);

/// Selected row background
pub const BG_SELECTED: Color = Color::Rgb(32, 32, 32);

/// Panel/input background
pub const BG_PANEL: Color = Color::Rgb(16, 16, 16);

/// Primary text
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 220);

/// Secondary/muted text
pub const TEXT_MUTED: Color = Color::Rgb(128, 128, 128);

/// Dim text for hints and placeholders
pub const TEXT_DIM: Color = Color::Rgb(90, 90, 90);

/// Primary accent - interactive elements, focus
pub const ACCENT_PRIMARY: Color = Color::Rgb(86, 156, 214);

/// Muted green - High confidence, success
pub const ACCENT_SUCCESS: Color = Color::Rgb(106, 153, 85);

/// Muted amber - Medium confidence, warnings
pub const ACCENT_WARNING: Color = Color::Rgb(206, 145, 120);

/// Muted red - Low confidence, errors
pub const ACCENT_ERROR: Color = Color::Rgb(224, 108, 117);

/// Drop-target highlight while a drag is active
pub const ACCENT_DROP: Color = Color::Rgb(80, 70, 25);

pub fn title_style() -> Style {
    Style::default()
        .fg(ACCENT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn muted_style() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn confidence_color(confidence: spendview_core::models::Confidence) -> Color {
    use spendview_core::models::Confidence;
    match confidence {
        Confidence::High => ACCENT_SUCCESS,
        Confidence::Medium => ACCENT_WARNING,
        Confidence::Low => ACCENT_ERROR,
        Confidence::Unknown => TEXT_MUTED,
    }
}
