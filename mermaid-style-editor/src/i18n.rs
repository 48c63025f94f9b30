//! Internationalization support for the editor UI.
//!
//! Translations live in YAML files under `locales/` and are looked up through
//! `rust-i18n`. English, French, and Spanish are supported.

use crate::theme::StyleField;

/// Supported languages for the editor UI.
///
/// # Examples
///
/// ```
/// use mermaid_style_editor::Language;
///
/// let lang = Language::English;
/// assert_eq!(lang, Language::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// English language
    #[default]
    English,
    /// French language
    French,
    /// Spanish language
    Spanish,
}

impl Language {
    /// All supported languages.
    pub const ALL: [Language; 3] =
        [Language::English, Language::French, Language::Spanish];

    /// Returns the locale code for this language.
    ///
    /// # Examples
    ///
    /// ```
    /// use mermaid_style_editor::Language;
    ///
    /// assert_eq!(Language::English.to_locale(), "en");
    /// assert_eq!(Language::French.to_locale(), "fr");
    /// assert_eq!(Language::Spanish.to_locale(), "es");
    /// ```
    #[must_use]
    pub const fn to_locale(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::French => "fr",
            Self::Spanish => "es",
        }
    }
}

/// Provides translated text for every label in the editor.
///
/// # Examples
///
/// ```
/// use mermaid_style_editor::{Language, Translations};
///
/// let translations = Translations::new(Language::French);
/// assert_eq!(translations.preview_title(), "Aperçu");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Translations {
    language: Language,
}

impl Translations {
    /// Creates a new `Translations` instance with the specified language.
    ///
    /// This sets the global rust-i18n locale to the specified language.
    #[must_use]
    pub fn new(language: Language) -> Self {
        rust_i18n::set_locale(language.to_locale());
        Self { language }
    }

    /// Returns the current language.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Sets the language for translations.
    ///
    /// This updates the global rust-i18n locale.
    ///
    /// # Examples
    ///
    /// ```
    /// use mermaid_style_editor::{Language, Translations};
    ///
    /// let mut translations = Translations::new(Language::English);
    /// translations.set_language(Language::Spanish);
    /// assert_eq!(translations.language(), Language::Spanish);
    /// ```
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        rust_i18n::set_locale(language.to_locale());
    }

    /// Label above the source editor.
    #[must_use]
    pub fn editor_label(&self) -> String {
        rust_i18n::t!("editor.label", locale = self.language.to_locale())
            .into_owned()
    }

    /// Placeholder shown while the source editor is empty.
    #[must_use]
    pub fn editor_placeholder(&self) -> String {
        rust_i18n::t!("editor.placeholder", locale = self.language.to_locale())
            .into_owned()
    }

    /// Label of the theme pick list.
    #[must_use]
    pub fn theme_label(&self) -> String {
        rust_i18n::t!("theme.label", locale = self.language.to_locale())
            .into_owned()
    }

    /// Heading of the custom style panel.
    #[must_use]
    pub fn style_heading(&self) -> String {
        rust_i18n::t!("style.heading", locale = self.language.to_locale())
            .into_owned()
    }

    /// Label of the button that restores the default colors.
    #[must_use]
    pub fn reset_label(&self) -> String {
        rust_i18n::t!("style.reset", locale = self.language.to_locale())
            .into_owned()
    }

    /// Label of a color picker row.
    ///
    /// # Examples
    ///
    /// ```
    /// use mermaid_style_editor::{Language, StyleField, Translations};
    ///
    /// let en = Translations::new(Language::English);
    /// assert_eq!(en.field_label(StyleField::Background), "Node Color");
    /// ```
    #[must_use]
    pub fn field_label(&self, field: StyleField) -> String {
        let locale = self.language.to_locale();
        let label = match field {
            StyleField::Background => {
                rust_i18n::t!("style.background", locale = locale)
            }
            StyleField::Border => rust_i18n::t!("style.border", locale = locale),
            StyleField::Text => rust_i18n::t!("style.text", locale = locale),
            StyleField::Edge => rust_i18n::t!("style.edge", locale = locale),
            StyleField::EdgeLabelBackground => {
                rust_i18n::t!("style.edge_label", locale = locale)
            }
            StyleField::SubgraphBackground => {
                rust_i18n::t!("style.subgraph", locale = locale)
            }
        };
        label.into_owned()
    }

    /// Title of the preview pane.
    #[must_use]
    pub fn preview_title(&self) -> String {
        rust_i18n::t!("preview.title", locale = self.language.to_locale())
            .into_owned()
    }

    /// The message shown in place of a diagram that failed to render.
    #[must_use]
    pub fn render_error(&self) -> String {
        rust_i18n::t!("preview.render_error", locale = self.language.to_locale())
            .into_owned()
    }

    /// Tooltip of the light/dark preview toggle.
    #[must_use]
    pub fn toggle_tooltip(&self) -> String {
        rust_i18n::t!("preview.toggle_tooltip", locale = self.language.to_locale())
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_language() {
        let translations = Translations::default();
        assert_eq!(translations.language(), Language::English);
    }

    #[test]
    fn test_set_language() {
        let mut translations = Translations::new(Language::English);
        translations.set_language(Language::Spanish);
        assert_eq!(translations.language(), Language::Spanish);
    }

    #[test]
    fn test_english_translations() {
        let t = Translations::new(Language::English);
        assert_eq!(t.editor_label(), "Mermaid Code");
        assert_eq!(t.editor_placeholder(), "Enter your Mermaid diagram code here...");
        assert_eq!(t.theme_label(), "Theme");
        assert_eq!(t.style_heading(), "Custom Style Controls");
        assert_eq!(t.reset_label(), "Reset to Default");
        assert_eq!(t.preview_title(), "Preview");
        assert_eq!(t.render_error(), "Error rendering diagram");
    }

    #[test]
    fn test_field_labels() {
        let t = Translations::new(Language::English);
        let labels: Vec<String> =
            StyleField::ALL.into_iter().map(|f| t.field_label(f)).collect();
        assert_eq!(
            labels,
            [
                "Node Color",
                "Border Color",
                "Text Color",
                "Edge Color",
                "Edge Label",
                "Subgraph"
            ]
        );
    }

    #[test]
    fn test_french_translations() {
        let t = Translations::new(Language::French);
        assert_eq!(t.editor_label(), "Code Mermaid");
        assert_eq!(t.theme_label(), "Thème");
        assert_eq!(t.reset_label(), "Rétablir les valeurs par défaut");
        assert_eq!(t.render_error(), "Erreur lors du rendu du diagramme");
    }

    #[test]
    fn test_spanish_translations() {
        let t = Translations::new(Language::Spanish);
        assert_eq!(t.editor_label(), "Código Mermaid");
        assert_eq!(t.preview_title(), "Vista previa");
        assert_eq!(t.field_label(StyleField::SubgraphBackground), "Subgrafo");
    }

    #[test]
    fn test_language_switching() {
        let mut t = Translations::new(Language::English);
        assert_eq!(t.theme_label(), "Theme");

        t.set_language(Language::French);
        assert_eq!(t.theme_label(), "Thème");

        t.set_language(Language::Spanish);
        assert_eq!(t.theme_label(), "Tema");
    }
}
