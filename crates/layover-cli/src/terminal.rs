//! Terminal styling and color utilities.

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bold reverse green for the departure tag.
    pub const TAG_FROM: &str = "\x1b[1;7;32m";
    /// Bold reverse yellow for layover tags.
    pub const TAG_VIA: &str = "\x1b[1;7;33m";
    /// Bold reverse magenta for the arrival tag.
    pub const TAG_TO: &str = "\x1b[1;7;35m";
    /// Bright bold white for airport codes.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for secondary elements.
    pub const GRAY: &str = "\x1b[90m";
    /// Green for distances.
    pub const GREEN: &str = "\x1b[32m";
}

/// Resolved color codes, either ANSI sequences or empty strings when color
/// is disabled.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub tag_from: &'static str,
    pub tag_via: &'static str,
    pub tag_to: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    pub green: &'static str,
}

impl ColorPalette {
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            tag_from: colors::TAG_FROM,
            tag_via: colors::TAG_VIA,
            tag_to: colors::TAG_TO,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
            green: colors::GREEN,
        }
    }

    pub const fn plain() -> Self {
        Self {
            reset: "",
            tag_from: "",
            tag_via: "",
            tag_to: "",
            white_bold: "",
            gray: "",
            green: "",
        }
    }

    /// Pick a palette based on [`supports_color`].
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

/// Check whether the terminal should receive ANSI colors.
///
/// Respects the `NO_COLOR` environment variable (https://no-color.org/) and
/// the `TERM=dumb` convention.
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}

/// Format a whole number of kilometres with thousand separators.
///
/// ```
/// # use layover_cli::terminal::format_km;
/// assert_eq!(format_km(282.4), "282 km");
/// assert_eq!(format_km(1725.6), "1,726 km");
/// ```
#[must_use]
pub fn format_km(distance: f64) -> String {
    let rounded = distance.round().max(0.0) as u64;
    let digits = rounded.to_string();
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    let grouped: String = result.chars().rev().collect();
    format!("{grouped} km")
}
