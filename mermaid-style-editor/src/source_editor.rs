//! Text input for the diagram source.

use iced::widget::{column, text, text_editor};
use iced::{Element, Font, Length};

use crate::i18n::Translations;

const EDITOR_HEIGHT: f32 = 300.0;

/// A controlled editor for Mermaid markup.
///
/// The owner keeps the authoritative source string; every edit is reported
/// back as the full new text.
#[derive(Debug, Default)]
pub struct SourceEditor {
    content: text_editor::Content,
    font: Font,
}

/// Messages emitted by the source editor.
#[derive(Debug, Clone)]
pub enum Message {
    /// Keystroke, paste, cursor move, or selection change
    Action(text_editor::Action),
}

impl SourceEditor {
    /// Creates an editor holding `source`.
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self { content: text_editor::Content::with_text(source), font: Font::MONOSPACE }
    }

    /// Sets the editor font.
    #[must_use]
    pub fn font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// The current text.
    #[must_use]
    pub fn text(&self) -> String {
        self.content.text()
    }

    /// Replaces the whole text, discarding the cursor and selection.
    pub fn set_text(&mut self, source: &str) {
        self.content = text_editor::Content::with_text(source);
    }

    /// Applies an editor action.
    ///
    /// Returns the full new text when the action modified it, and `None`
    /// for cursor movement or selection.
    pub fn update(&mut self, message: &Message) -> Option<String> {
        match message {
            Message::Action(action) => {
                let is_edit = action.is_edit();
                self.content.perform(action.clone());
                is_edit.then(|| self.content.text())
            }
        }
    }

    /// Renders the label and the editor.
    pub fn view<'a>(&'a self, translations: &Translations) -> Element<'a, Message> {
        let editor = text_editor(&self.content)
            .placeholder(translations.editor_placeholder())
            .on_action(Message::Action)
            .font(self.font)
            .height(Length::Fixed(EDITOR_HEIGHT));

        column![text(translations.editor_label()).size(14), editor]
            .spacing(8)
            .width(Length::Fill)
            .into()
    }
}
