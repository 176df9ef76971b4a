//! Design tokens referenced by card view models.
//!
//! Views carry tokens, not CSS; painters resolve them with [`ColorToken::css`]
//! and [`Weight::value`].

use serde::{Deserialize, Serialize};

/// Palette entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorToken {
    White,
    Primary,
    Secondary,
    #[serde(rename = "gray-100")]
    Gray100,
    #[serde(rename = "gray-300")]
    Gray300,
    #[serde(rename = "gray-500")]
    Gray500,
    #[serde(rename = "gray-700")]
    Gray700,
    #[serde(rename = "gray-900")]
    Gray900,
}

impl ColorToken {
    pub const ALL: [ColorToken; 8] = [
        ColorToken::White,
        ColorToken::Primary,
        ColorToken::Secondary,
        ColorToken::Gray100,
        ColorToken::Gray300,
        ColorToken::Gray500,
        ColorToken::Gray700,
        ColorToken::Gray900,
    ];

    /// Token name, usable as a CSS custom property suffix.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorToken::White => "white",
            ColorToken::Primary => "primary",
            ColorToken::Secondary => "secondary",
            ColorToken::Gray100 => "gray-100",
            ColorToken::Gray300 => "gray-300",
            ColorToken::Gray500 => "gray-500",
            ColorToken::Gray700 => "gray-700",
            ColorToken::Gray900 => "gray-900",
        }
    }

    /// CSS color value.
    pub fn css(&self) -> &'static str {
        match self {
            ColorToken::White => "hsl(0deg 0% 100%)",
            ColorToken::Primary => "hsl(340deg 65% 47%)",
            ColorToken::Secondary => "hsl(240deg 60% 63%)",
            ColorToken::Gray100 => "hsl(185deg 5% 95%)",
            ColorToken::Gray300 => "hsl(190deg 5% 80%)",
            ColorToken::Gray500 => "hsl(196deg 4% 60%)",
            ColorToken::Gray700 => "hsl(220deg 5% 40%)",
            ColorToken::Gray900 => "hsl(220deg 3% 20%)",
        }
    }
}

/// Font weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Weight {
    #[default]
    Normal,
    Medium,
    Bold,
}

impl Weight {
    pub fn value(&self) -> u16 {
        match self {
            Weight::Normal => 500,
            Weight::Medium => 600,
            Weight::Bold => 800,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_colors_are_distinct() {
        assert_ne!(ColorToken::Primary.css(), ColorToken::Secondary.css());
    }

    #[test]
    fn test_token_names_are_unique() {
        let mut names: Vec<_> = ColorToken::ALL.iter().map(|t| t.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), ColorToken::ALL.len());
    }

    #[test]
    fn test_weights() {
        assert_eq!(Weight::Normal.value(), 500);
        assert_eq!(Weight::Medium.value(), 600);
        assert_eq!(Weight::Bold.value(), 800);
    }
}
