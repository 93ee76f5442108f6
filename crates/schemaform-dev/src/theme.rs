//! Catppuccin theme support for the playground.

use catppuccin::{FlavorColors, Hex, PALETTE};

/// Theme variants: Dark (Mocha) and Light (Latte).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "Light Mode",
            Theme::Light => "Dark Mode",
        }
    }

    fn palette(self) -> FlavorColors {
        match self {
            Theme::Dark => PALETTE.mocha.colors,
            Theme::Light => PALETTE.latte.colors,
        }
    }

    /// Pane and input background.
    pub fn bg_color(self) -> Hex {
        self.palette().base.hex
    }

    /// Page background (slightly darker than panes).
    pub fn page_bg_color(self) -> Hex {
        self.palette().mantle.hex
    }

    pub fn text_color(self) -> Hex {
        self.palette().text.hex
    }

    /// Descriptions, placeholders and hints.
    pub fn subtext_color(self) -> Hex {
        self.palette().subtext0.hex
    }

    pub fn caret_color(self) -> Hex {
        self.palette().rosewater.hex
    }

    pub fn border_color(self) -> Hex {
        self.palette().surface0.hex
    }

    /// Section headers, buttons and toggles.
    pub fn surface1_color(self) -> Hex {
        self.palette().surface1.hex
    }

    pub fn accent_color(self) -> Hex {
        self.palette().mauve.hex
    }

    /// Inline field errors and the required marker.
    pub fn error_color(self) -> Hex {
        self.palette().red.hex
    }

    pub fn success_color(self) -> Hex {
        self.palette().green.hex
    }
}
