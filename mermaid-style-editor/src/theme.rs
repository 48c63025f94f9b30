//! Mermaid theme model.
//!
//! Maps the six user-facing style fields onto the larger set of
//! `themeVariables` keys understood by the Mermaid renderer.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use iced::Color;
use serde::Serialize;
use thiserror::Error;

/// Built-in Mermaid themes.
///
/// Only [`ThemeName::Default`] honours custom style fields; every other theme
/// falls back to the renderer's own palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Default,
    Forest,
    Dark,
    Neutral,
    Base,
}

impl ThemeName {
    /// All themes, in the order they are offered to the user.
    pub const ALL: [ThemeName; 5] = [
        ThemeName::Default,
        ThemeName::Forest,
        ThemeName::Dark,
        ThemeName::Neutral,
        ThemeName::Base,
    ];

    /// Returns the name the renderer expects.
    ///
    /// # Examples
    ///
    /// ```
    /// use mermaid_style_editor::ThemeName;
    ///
    /// assert_eq!(ThemeName::Forest.as_str(), "forest");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Forest => "forest",
            Self::Dark => "dark",
            Self::Neutral => "neutral",
            Self::Base => "base",
        }
    }

    /// Whether this theme accepts custom style fields.
    #[must_use]
    pub const fn is_customizable(self) -> bool {
        matches!(self, Self::Default)
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Default => "Default",
            Self::Forest => "Forest",
            Self::Dark => "Dark",
            Self::Neutral => "Neutral",
            Self::Base => "Base",
        };
        f.write_str(label)
    }
}

/// Error returned when a string is not a `#rgb` or `#rrggbb` color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex color `{0}`, expected #rgb or #rrggbb")]
pub struct HexColorError(String);

/// A validated hex color string.
///
/// The input spelling is preserved, so `#9370DB` stays uppercase when it
/// is handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor {
    text: String,
    rgb: [u8; 3],
}

impl HexColor {
    /// Parses a `#rgb` or `#rrggbb` string.
    ///
    /// # Errors
    ///
    /// Returns [`HexColorError`] when the string has no leading `#`, has the
    /// wrong length, or contains non-hex digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use mermaid_style_editor::HexColor;
    ///
    /// let color = HexColor::parse("#ECECFF").unwrap();
    /// assert_eq!(color.as_str(), "#ECECFF");
    /// assert!(HexColor::parse("ECECFF").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, HexColorError> {
        let invalid = || HexColorError(text.to_owned());
        let digits = text.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        let rgb = match digits.len() {
            3 => {
                let mut rgb = [0; 3];
                for (slot, i) in rgb.iter_mut().zip(0..3) {
                    *slot = channel(&digits[i..=i].repeat(2))?;
                }
                rgb
            }
            6 => [
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            ],
            _ => return Err(invalid()),
        };

        Ok(Self { text: text.to_owned(), rgb })
    }

    /// Builds a lowercase `#rrggbb` color from an Iced color, dropping alpha.
    ///
    /// # Examples
    ///
    /// ```
    /// use mermaid_style_editor::HexColor;
    ///
    /// let color = HexColor::from_color(iced::Color::from_rgb8(0x11, 0x22, 0x33));
    /// assert_eq!(color.as_str(), "#112233");
    /// ```
    #[must_use]
    pub fn from_color(color: Color) -> Self {
        let [r, g, b, _] = color.into_rgba8();
        Self { text: format!("#{r:02x}{g:02x}{b:02x}"), rgb: [r, g, b] }
    }

    /// The color as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The color as an opaque Iced color.
    #[must_use]
    pub fn to_color(&self) -> Color {
        let [r, g, b] = self.rgb;
        Color::from_rgb8(r, g, b)
    }

    // Only used for the compile-time-known defaults below.
    fn known(text: &str) -> Self {
        Self::parse(text).unwrap_or_else(|_| Self::from_color(Color::WHITE))
    }
}

impl FromStr for HexColor {
    type Err = HexColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// One of the six user-facing style fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleField {
    /// Node fill
    Background,
    /// Node and note borders
    Border,
    /// Labels inside nodes, actors, signals and notes
    Text,
    /// Edges and sequence lines
    Edge,
    /// Fill behind edge labels
    EdgeLabelBackground,
    /// Subgraph (cluster) fill
    SubgraphBackground,
}

impl StyleField {
    /// All fields, in display order.
    pub const ALL: [StyleField; 6] = [
        StyleField::Background,
        StyleField::Border,
        StyleField::Text,
        StyleField::Edge,
        StyleField::EdgeLabelBackground,
        StyleField::SubgraphBackground,
    ];

    /// The renderer variables populated by this field.
    ///
    /// # Examples
    ///
    /// ```
    /// use mermaid_style_editor::StyleField;
    ///
    /// assert_eq!(StyleField::SubgraphBackground.renderer_keys(), ["clusterBkg"]);
    /// ```
    #[must_use]
    pub const fn renderer_keys(self) -> &'static [&'static str] {
        match self {
            Self::Background => {
                &["primaryBkg", "secondaryBkg", "tertiaryBkg", "mainBkg"]
            }
            Self::Border => {
                &["border1", "border2", "nodeBorder", "noteBorderColor"]
            }
            Self::Text => &[
                "nodeTextColor",
                "actorTextColor",
                "signalTextColor",
                "labelTextColor",
                "noteTextColor",
            ],
            Self::Edge => {
                &["lineColor", "edgeColor", "actorLineColor", "signalColor"]
            }
            Self::EdgeLabelBackground => &["edgeLabelBackground"],
            Self::SubgraphBackground => &["clusterBkg"],
        }
    }
}

/// The six colors a user can pick for the default theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleFields {
    pub background_color: HexColor,
    pub border_color: HexColor,
    pub text_color: HexColor,
    pub edge_color: HexColor,
    pub edge_label_bg: HexColor,
    pub sub_graph_bg: HexColor,
}

impl Default for StyleFields {
    fn default() -> Self {
        Self {
            background_color: HexColor::known("#ffffff"),
            border_color: HexColor::known("#9370DB"),
            text_color: HexColor::known("#000000"),
            edge_color: HexColor::known("#333333"),
            edge_label_bg: HexColor::known("#ECECFF"),
            sub_graph_bg: HexColor::known("#f4f4f4"),
        }
    }
}

impl StyleFields {
    /// Returns the color stored for `field`.
    #[must_use]
    pub fn get(&self, field: StyleField) -> &HexColor {
        match field {
            StyleField::Background => &self.background_color,
            StyleField::Border => &self.border_color,
            StyleField::Text => &self.text_color,
            StyleField::Edge => &self.edge_color,
            StyleField::EdgeLabelBackground => &self.edge_label_bg,
            StyleField::SubgraphBackground => &self.sub_graph_bg,
        }
    }

    /// Replaces the color stored for `field`, leaving the others untouched.
    pub fn set(&mut self, field: StyleField, color: HexColor) {
        let slot = match field {
            StyleField::Background => &mut self.background_color,
            StyleField::Border => &mut self.border_color,
            StyleField::Text => &mut self.text_color,
            StyleField::Edge => &mut self.edge_color,
            StyleField::EdgeLabelBackground => &mut self.edge_label_bg,
            StyleField::SubgraphBackground => &mut self.sub_graph_bg,
        };
        *slot = color;
    }
}

/// Renderer `themeVariables`, keyed by Mermaid variable name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ThemeVariables(BTreeMap<&'static str, String>);

impl ThemeVariables {
    /// Value of a renderer variable, if set.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(key, value)| (*key, value.as_str()))
    }
}

/// Derives the renderer variables for a theme and a set of style fields.
///
/// Non-default themes yield an empty map so the renderer uses its built-in
/// palette. The default theme yields every key of every field.
///
/// # Examples
///
/// ```
/// use mermaid_style_editor::{StyleFields, ThemeName, theme_variables};
///
/// let fields = StyleFields::default();
/// assert!(theme_variables(ThemeName::Dark, &fields).is_empty());
///
/// let vars = theme_variables(ThemeName::Default, &fields);
/// assert_eq!(vars.len(), 19);
/// assert_eq!(vars.get("nodeBorder"), Some("#9370DB"));
/// ```
#[must_use]
pub fn theme_variables(theme: ThemeName, fields: &StyleFields) -> ThemeVariables {
    if !theme.is_customizable() {
        return ThemeVariables::default();
    }

    let mut map = BTreeMap::new();
    for field in StyleField::ALL {
        let value = fields.get(field).as_str();
        for key in field.renderer_keys() {
            map.insert(*key, value.to_owned());
        }
    }
    ThemeVariables(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(text: &str) -> HexColor {
        HexColor::parse(text).unwrap_or_else(|e| panic!("{e}"))
    }

    #[test]
    fn test_non_default_themes_yield_empty_map() {
        let mut fields = StyleFields::default();
        fields.set(StyleField::Edge, hex("#ff0000"));

        for theme in ThemeName::ALL.into_iter().filter(|t| *t != ThemeName::Default) {
            assert!(
                theme_variables(theme, &fields).is_empty(),
                "{theme:?} should defer to the built-in palette"
            );
        }
    }

    #[test]
    fn test_default_theme_expands_all_keys() {
        let fields = StyleFields {
            background_color: hex("#000001"),
            border_color: hex("#000002"),
            text_color: hex("#000003"),
            edge_color: hex("#000004"),
            edge_label_bg: hex("#000005"),
            sub_graph_bg: hex("#000006"),
        };
        let vars = theme_variables(ThemeName::Default, &fields);

        assert_eq!(vars.len(), 19);
        for field in StyleField::ALL {
            for key in field.renderer_keys() {
                assert_eq!(vars.get(key), Some(fields.get(field).as_str()), "{key}");
            }
        }
    }

    #[test]
    fn test_expansion_key_counts() {
        let counts: Vec<usize> =
            StyleField::ALL.iter().map(|f| f.renderer_keys().len()).collect();
        assert_eq!(counts, vec![4, 4, 5, 4, 1, 1]);
    }

    #[test]
    fn test_background_change_touches_only_background_keys() {
        let before = theme_variables(ThemeName::Default, &StyleFields::default());

        let mut fields = StyleFields::default();
        fields.set(StyleField::Background, hex("#112233"));
        let after = theme_variables(ThemeName::Default, &fields);

        for key in ["primaryBkg", "secondaryBkg", "tertiaryBkg", "mainBkg"] {
            assert_eq!(after.get(key), Some("#112233"));
        }
        for (key, value) in after.iter() {
            if !StyleField::Background.renderer_keys().contains(&key) {
                assert_eq!(before.get(key), Some(value), "{key} changed");
            }
        }
    }

    #[test]
    fn test_default_fields() {
        let vars = theme_variables(ThemeName::Default, &StyleFields::default());
        assert_eq!(vars.get("mainBkg"), Some("#ffffff"));
        assert_eq!(vars.get("border1"), Some("#9370DB"));
        assert_eq!(vars.get("noteTextColor"), Some("#000000"));
        assert_eq!(vars.get("signalColor"), Some("#333333"));
        assert_eq!(vars.get("edgeLabelBackground"), Some("#ECECFF"));
        assert_eq!(vars.get("clusterBkg"), Some("#f4f4f4"));
    }

    #[test]
    fn test_hex_color_parsing() {
        assert_eq!(hex("#abc").to_color(), Color::from_rgb8(0xaa, 0xbb, 0xcc));
        assert_eq!(hex("#9370DB").to_color(), Color::from_rgb8(0x93, 0x70, 0xdb));

        for bad in ["", "#", "#12", "#12345", "#1234567", "123456", "#gggggg"] {
            assert_eq!(HexColor::parse(bad), Err(HexColorError(bad.to_owned())));
        }
    }

    #[test]
    fn test_hex_color_from_color_is_lowercase() {
        let color = HexColor::from_color(hex("#ECECFF").to_color());
        assert_eq!(color.as_str(), "#ececff");
    }

    #[test]
    fn test_theme_variables_serialize_flat() {
        let vars = theme_variables(ThemeName::Default, &StyleFields::default());
        let json = serde_json::to_value(&vars).unwrap_or_default();
        assert_eq!(json["clusterBkg"], "#f4f4f4");
        assert_eq!(json.as_object().map(serde_json::Map::len), Some(19));
    }

    #[test]
    fn test_theme_name_serializes_lowercase() {
        let json = serde_json::to_string(&ThemeName::Neutral).unwrap_or_default();
        assert_eq!(json, "\"neutral\"");
        assert_eq!(ThemeName::Neutral.to_string(), "Neutral");
    }
}
