//! Light/dark theme state and the colours each theme renders with.

use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Self::Light => &LIGHT,
            Self::Dark => &DARK,
        }
    }
}

/// Session-scoped holder for the current theme. Owned by `AppState`.
#[derive(Debug, Clone, Default)]
pub struct ThemeStore {
    theme: Theme,
}

impl ThemeStore {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        tracing::debug!(theme = self.theme.as_str(), "theme toggled");
    }

    pub fn palette(&self) -> &'static Palette {
        self.theme.palette()
    }
}

pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
    pub error: Color,
    pub pending: Color,
    pub running: Color,
    pub successful: Color,
    pub failed: Color,
    pub unknown: Color,
}

impl Palette {
    /// Colour for a status class as produced by `status::status_class`.
    pub fn status_color(&self, class: &str) -> Color {
        match class {
            "pending" => self.pending,
            "running" => self.running,
            "successful" => self.successful,
            "failed" => self.failed,
            _ => self.unknown,
        }
    }
}

static LIGHT: Palette = Palette {
    background: Color::Rgb(248, 251, 255),
    foreground: Color::Rgb(12, 22, 37),
    muted: Color::Rgb(91, 102, 120),
    accent: Color::Rgb(37, 99, 235),
    error: Color::Rgb(225, 29, 72),
    pending: Color::Rgb(217, 119, 6),
    running: Color::Rgb(37, 99, 235),
    successful: Color::Rgb(14, 166, 108),
    failed: Color::Rgb(225, 29, 72),
    unknown: Color::Rgb(127, 139, 160),
};

static DARK: Palette = Palette {
    background: Color::Rgb(5, 9, 15),
    foreground: Color::Rgb(230, 237, 247),
    muted: Color::Rgb(127, 139, 160),
    accent: Color::Rgb(92, 176, 255),
    error: Color::Rgb(240, 99, 92),
    pending: Color::Rgb(247, 200, 67),
    running: Color::Rgb(92, 176, 255),
    successful: Color::Rgb(63, 182, 139),
    failed: Color::Rgb(240, 99, 92),
    unknown: Color::Rgb(127, 139, 160),
};
