//! Theme module
//!
//! Navy and sand palette of the website, as terminal styles.

use ratatui::style::{Color, Modifier, Style};

/// Theme colors
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Page background
    pub bg: Color,
    /// Body text
    pub fg: Color,
    /// Headings and active controls
    pub navy: Color,
    /// Badges and borders
    pub sand: Color,
    /// Light text on navy
    pub sand_light: Color,
    /// Secondary text
    pub hint: Color,
    /// Error and empty states
    pub warning: Color,
}

/// Global theme instance
pub static THEME: Theme = Theme {
    bg: Color::Reset,
    fg: Color::Reset,
    navy: Color::Rgb(35, 48, 89),
    sand: Color::Rgb(226, 211, 182),
    sand_light: Color::Rgb(247, 241, 229),
    hint: Color::Gray,
    warning: Color::Yellow,
};

impl Theme {
    /// Body text
    pub fn normal(&self) -> Style {
        Style::new().fg(self.fg).bg(self.bg)
    }

    /// Page and card titles
    pub fn title(&self) -> Style {
        Style::new().fg(self.fg).add_modifier(Modifier::BOLD)
    }

    /// Focused control or highlighted row
    pub fn selected(&self) -> Style {
        Style::new()
            .fg(self.sand_light)
            .bg(self.navy)
            .add_modifier(Modifier::BOLD)
    }

    /// Checked filter chip
    pub fn chip_on(&self) -> Style {
        Style::new().fg(self.sand_light).bg(self.navy)
    }

    /// Unchecked filter chip
    pub fn chip_off(&self) -> Style {
        Style::new().fg(self.navy).add_modifier(Modifier::BOLD)
    }

    /// Offer, delivery and staff-pick badges
    pub fn badge(&self) -> Style {
        Style::new().fg(Color::Black).bg(self.sand)
    }

    /// Borders
    pub fn border(&self) -> Style {
        Style::new().fg(self.sand)
    }

    /// Secondary text
    pub fn hint(&self) -> Style {
        Style::new().fg(self.hint)
    }

    /// Empty and error states
    pub fn warning(&self) -> Style {
        Style::new().fg(self.warning)
    }

    /// Open dropdown, faded while it transitions
    pub fn menu(&self, visibility: f32) -> Style {
        let style = Style::new().fg(self.fg).bg(self.bg);
        if visibility < 0.5 {
            style.add_modifier(Modifier::DIM)
        } else {
            style
        }
    }
}

/// Get the global theme
pub fn theme() -> &'static Theme {
    &THEME
}

/// Marker in front of the highlighted list row
pub const HIGHLIGHT_SYMBOL: &str = "▌ ";
