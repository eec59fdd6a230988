//! Display records for the landing page.
//!
//! Everything here is static content built once at startup. The records hold
//! `&'static str` so the whole page can live in `const` tables.

use std::fmt;

/// Dropdown menus available in the header. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuId {
    Personal,
    Business,
    Wealth,
}

impl MenuId {
    pub const ALL: [MenuId; 3] = [MenuId::Personal, MenuId::Business, MenuId::Wealth];

    /// Stable identifier used in DOM ids and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            MenuId::Personal => "personal",
            MenuId::Business => "business",
            MenuId::Wealth => "wealth",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuId::Personal => "Personal",
            MenuId::Business => "Business",
            MenuId::Wealth => "Wealth",
        }
    }
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accent used for a slide's call-to-action and indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccentColor {
    Blue,
    Emerald,
    Violet,
    Amber,
}

impl AccentColor {
    pub fn css_suffix(self) -> &'static str {
        match self {
            AccentColor::Blue => "blue",
            AccentColor::Emerald => "emerald",
            AccentColor::Violet => "violet",
            AccentColor::Amber => "amber",
        }
    }

    /// Class list for the slide's primary button.
    pub fn button_class(self) -> String {
        format!("btn btn-accent-{}", self.css_suffix())
    }

    /// Class list for the slide indicator dot.
    pub fn indicator_class(self, active: bool) -> String {
        if active {
            format!("carousel-dot active dot-{}", self.css_suffix())
        } else {
            "carousel-dot".to_string()
        }
    }
}

/// One promotional slide of the hero carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub id: u32,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    /// Glyph shown in the slide's illustration panel.
    pub image: &'static str,
    /// Background style token, resolved by the stylesheet.
    pub bg_color: &'static str,
    pub accent: AccentColor,
    pub cta_label: &'static str,
    pub cta_href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub description: &'static str,
    pub href: &'static str,
}

/// A header entry with a hover dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavMenu {
    pub id: MenuId,
    pub links: &'static [NavLink],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [NavLink],
}
