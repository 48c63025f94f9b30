//! Theme selection and custom color controls.
//!
//! The controls own the six [`StyleFields`] and report the derived
//! [`ThemeVariables`] to their owner as [`Event`]s. The mapping reported is
//! always complete: every field edit re-emits all nineteen renderer keys.

use iced::{Color, Element};

use crate::i18n::Translations;
use crate::theme::{
    HexColor, StyleField, StyleFields, ThemeName, ThemeVariables, theme_variables,
};

mod view;

/// Whether the custom color rows are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    ShowingStyleControls,
    Hidden,
}

impl Visibility {
    fn for_theme(theme: ThemeName) -> Self {
        if theme.is_customizable() { Self::ShowingStyleControls } else { Self::Hidden }
    }
}

/// Messages handled by [`StyleControls`].
#[derive(Debug, Clone)]
pub enum Message {
    /// A theme was picked from the list
    ThemeSelected(ThemeName),
    /// Open the color picker for a field
    OpenPicker(StyleField),
    /// Close the open color picker without changes
    ClosePicker,
    /// A color was submitted for a field
    FieldChanged(StyleField, Color),
    /// Restore the default colors
    Reset,
}

/// Changes reported to the owner of the controls.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    ThemeChanged(ThemeName),
    VariablesChanged(ThemeVariables),
}

/// Theme pick list plus one color picker per [`StyleField`].
#[derive(Debug)]
pub struct StyleControls {
    theme: ThemeName,
    fields: StyleFields,
    visibility: Visibility,
    open_picker: Option<StyleField>,
}

impl Default for StyleControls {
    fn default() -> Self {
        Self::new(ThemeName::default())
    }
}

impl StyleControls {
    /// Creates the controls for `theme` with the default colors.
    #[must_use]
    pub fn new(theme: ThemeName) -> Self {
        Self {
            theme,
            fields: StyleFields::default(),
            visibility: Visibility::for_theme(theme),
            open_picker: None,
        }
    }

    /// The theme the controls currently reflect.
    #[must_use]
    pub fn theme(&self) -> ThemeName {
        self.theme
    }

    #[must_use]
    pub fn fields(&self) -> &StyleFields {
        &self.fields
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// The field whose color picker is open, if any.
    #[must_use]
    pub fn open_picker(&self) -> Option<StyleField> {
        self.open_picker
    }

    /// The renderer variables for the current theme and colors.
    #[must_use]
    pub fn theme_variables(&self) -> ThemeVariables {
        theme_variables(self.theme, &self.fields)
    }

    /// Enters `theme`.
    ///
    /// The default theme shows the color rows and reports the mapping of the
    /// current colors. Any other theme hides them and reports an empty
    /// mapping so the renderer falls back to its own palette.
    ///
    /// # Examples
    ///
    /// ```
    /// use mermaid_style_editor::style_controls::{Event, StyleControls, Visibility};
    /// use mermaid_style_editor::ThemeName;
    ///
    /// let mut controls = StyleControls::new(ThemeName::Default);
    /// let event = controls.sync_theme(ThemeName::Forest);
    ///
    /// assert_eq!(controls.visibility(), Visibility::Hidden);
    /// assert!(matches!(event, Event::VariablesChanged(vars) if vars.is_empty()));
    /// ```
    pub fn sync_theme(&mut self, theme: ThemeName) -> Event {
        self.theme = theme;
        self.visibility = Visibility::for_theme(theme);
        if self.visibility == Visibility::Hidden {
            self.open_picker = None;
        }
        Event::VariablesChanged(self.theme_variables())
    }

    /// Replaces one color, leaving the other five untouched.
    ///
    /// Reports the full mapping while the color rows are shown.
    pub fn set_field(&mut self, field: StyleField, color: HexColor) -> Option<Event> {
        self.fields.set(field, color);
        self.emit_variables()
    }

    /// Restores all six default colors at once.
    pub fn reset(&mut self) -> Option<Event> {
        self.fields = StyleFields::default();
        self.emit_variables()
    }

    fn emit_variables(&self) -> Option<Event> {
        match self.visibility {
            Visibility::ShowingStyleControls => {
                Some(Event::VariablesChanged(self.theme_variables()))
            }
            Visibility::Hidden => None,
        }
    }

    /// Handles a message and returns the events for the owner, in order.
    pub fn update(&mut self, message: &Message) -> Vec<Event> {
        match message {
            Message::ThemeSelected(theme) => {
                vec![Event::ThemeChanged(*theme), self.sync_theme(*theme)]
            }
            Message::OpenPicker(field) => {
                self.open_picker = Some(*field);
                Vec::new()
            }
            Message::ClosePicker => {
                self.open_picker = None;
                Vec::new()
            }
            Message::FieldChanged(field, color) => {
                self.open_picker = None;
                self.set_field(*field, HexColor::from_color(*color))
                    .into_iter()
                    .collect()
            }
            Message::Reset => self.reset().into_iter().collect(),
        }
    }

    /// Renders the theme pick list and, for the default theme, the color rows.
    pub fn view<'a>(&'a self, translations: &Translations) -> Element<'a, Message> {
        view::view(self, translations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variables(events: &[Event]) -> Option<&ThemeVariables> {
        events.iter().rev().find_map(|event| match event {
            Event::VariablesChanged(vars) => Some(vars),
            Event::ThemeChanged(_) => None,
        })
    }

    #[test]
    fn test_new_visibility_follows_theme() {
        assert_eq!(
            StyleControls::new(ThemeName::Default).visibility(),
            Visibility::ShowingStyleControls
        );
        assert_eq!(StyleControls::new(ThemeName::Dark).visibility(), Visibility::Hidden);
    }

    #[test]
    fn test_theme_selected_reports_theme_then_variables() {
        let mut controls = StyleControls::default();
        let events = controls.update(&Message::ThemeSelected(ThemeName::Neutral));

        assert_eq!(
            events,
            vec![
                Event::ThemeChanged(ThemeName::Neutral),
                Event::VariablesChanged(ThemeVariables::default()),
            ]
        );
        assert_eq!(controls.visibility(), Visibility::Hidden);
    }

    #[test]
    fn test_returning_to_default_restores_mapping() {
        let mut controls = StyleControls::default();
        let _ = controls.update(&Message::FieldChanged(
            StyleField::Edge,
            Color::from_rgb8(0xff, 0, 0),
        ));
        let _ = controls.update(&Message::ThemeSelected(ThemeName::Base));

        let events = controls.update(&Message::ThemeSelected(ThemeName::Default));
        let vars = variables(&events);

        assert_eq!(controls.visibility(), Visibility::ShowingStyleControls);
        assert_eq!(vars.map(ThemeVariables::len), Some(19));
        assert_eq!(vars.and_then(|v| v.get("lineColor")), Some("#ff0000"));
    }

    #[test]
    fn test_field_change_emits_full_mapping() {
        let mut controls = StyleControls::default();
        let before = controls.theme_variables();

        let events = controls.update(&Message::FieldChanged(
            StyleField::Background,
            Color::from_rgb8(0x11, 0x22, 0x33),
        ));
        let Some(vars) = variables(&events) else {
            panic!("expected a mapping, got {events:?}");
        };

        assert_eq!(vars.len(), 19);
        for key in StyleField::Background.renderer_keys() {
            assert_eq!(vars.get(key), Some("#112233"));
        }
        for (key, value) in vars.iter() {
            if !StyleField::Background.renderer_keys().contains(&key) {
                assert_eq!(before.get(key), Some(value));
            }
        }
    }

    #[test]
    fn test_field_change_leaves_other_fields() {
        let mut controls = StyleControls::default();
        let _ = controls.update(&Message::FieldChanged(StyleField::Text, Color::WHITE));

        let defaults = StyleFields::default();
        for field in StyleField::ALL.into_iter().filter(|f| *f != StyleField::Text) {
            assert_eq!(controls.fields().get(field), defaults.get(field));
        }
        assert_eq!(controls.fields().text_color.as_str(), "#ffffff");
    }

    #[test]
    fn test_field_change_while_hidden_is_silent() {
        let mut controls = StyleControls::new(ThemeName::Forest);
        let events = controls.update(&Message::FieldChanged(StyleField::Border, Color::BLACK));

        assert!(events.is_empty());
        assert_eq!(controls.fields().border_color.as_str(), "#000000");
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut controls = StyleControls::default();
        for field in StyleField::ALL {
            let _ = controls.update(&Message::FieldChanged(field, Color::BLACK));
        }

        let events = controls.update(&Message::Reset);

        assert_eq!(controls.fields(), &StyleFields::default());
        assert_eq!(
            events,
            vec![Event::VariablesChanged(theme_variables(
                ThemeName::Default,
                &StyleFields::default()
            ))]
        );
    }

    #[test]
    fn test_picker_open_and_close() {
        let mut controls = StyleControls::default();
        assert!(controls.update(&Message::OpenPicker(StyleField::Edge)).is_empty());
        assert_eq!(controls.open_picker(), Some(StyleField::Edge));

        let _ = controls.update(&Message::ClosePicker);
        assert_eq!(controls.open_picker(), None);

        let _ = controls.update(&Message::OpenPicker(StyleField::Edge));
        let _ = controls.update(&Message::FieldChanged(StyleField::Edge, Color::BLACK));
        assert_eq!(controls.open_picker(), None);
    }

    #[test]
    fn test_hiding_closes_picker() {
        let mut controls = StyleControls::default();
        let _ = controls.update(&Message::OpenPicker(StyleField::Border));
        let _ = controls.sync_theme(ThemeName::Dark);
        assert_eq!(controls.open_picker(), None);
    }
}
