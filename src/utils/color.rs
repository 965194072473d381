use std::fmt;
use std::str::FromStr;

use crate::error::WidgetError;

/// Accent colors offered by the accent selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccentColor {
    Blue,
    Beige,
    Orange,
    Pink,
    Yellow,
    Cyan,
}

impl AccentColor {
    /// Palette in display order
    pub const ALL: [AccentColor; 6] = [
        Self::Blue,
        Self::Beige,
        Self::Orange,
        Self::Pink,
        Self::Yellow,
        Self::Cyan,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Beige => "beige",
            Self::Orange => "orange",
            Self::Pink => "pink",
            Self::Yellow => "yellow",
            Self::Cyan => "cyan",
        }
    }

    #[must_use]
    pub fn hex(self) -> &'static str {
        match self {
            Self::Blue => "#A7CBDA",
            Self::Beige => "#DCDCC9",
            Self::Orange => "#FA9133",
            Self::Pink => "#F9C8C5",
            Self::Yellow => "#F5C260",
            Self::Cyan => "#33DBF5",
        }
    }

    /// Look up a palette entry by name, case-insensitively
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        Self::ALL.into_iter().find(|color| color.name() == name)
    }
}

impl Default for AccentColor {
    fn default() -> Self {
        Self::Blue
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AccentColor {
    type Err = WidgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| WidgetError::UnknownAccentColor(s.to_string()))
    }
}
