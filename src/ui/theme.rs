//! Visual theme and styling.

use console::Style;

use crate::probe::{ProbeOutcome, ProbeStatus};

/// Styles for report lines.
///
/// Styling wraps text in escape codes only; a colored line reads the same
/// as a plain one once the codes are stripped.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for the capability name on found lines (green bold).
    pub name: Style,
    /// Style for not-found lines (orange).
    pub missing: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            name: Style::new().green().bold(),
            missing: Style::new().color256(208),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            name: Style::new(),
            missing: Style::new(),
        }
    }

    /// Pick the colored or plain theme.
    pub fn for_terminal(colors: bool) -> Self {
        if colors {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format one probe outcome as a report line.
    pub fn format_outcome(&self, outcome: &ProbeOutcome) -> String {
        match &outcome.status {
            ProbeStatus::Found { version } => format!(
                "{}: {}",
                self.name.apply_to(&outcome.name),
                version
            ),
            ProbeStatus::NotFound { .. } => {
                format!("{}", self.missing.apply_to(&outcome.missing_message))
            }
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors(no_color_flag: bool) -> bool {
    if no_color_flag {
        return false;
    }

    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
