//! The page container.
//!
//! Owns the shared state and wires the source editor and style controls
//! into the preview. Any change to the source, the theme, or the theme
//! variables starts a new render.

use std::sync::Arc;

use iced::widget::{column, container, row};
use iced::{Element, Length, Task};

use crate::i18n::{Language, Translations};
use crate::preview::{self, Preview};
use crate::renderer::DiagramRenderer;
use crate::source_editor::{self, SourceEditor};
use crate::state::StudioState;
use crate::style_controls::{self, Event, StyleControls};

const SIDEBAR_WIDTH: f32 = 400.0;

/// Messages routed by [`Studio`].
#[derive(Debug, Clone)]
pub enum Message {
    Editor(source_editor::Message),
    Controls(style_controls::Message),
    Preview(preview::Message),
}

/// Source editor, style controls, and live preview side by side.
#[derive(Debug)]
pub struct Studio {
    state: StudioState,
    editor: SourceEditor,
    controls: StyleControls,
    preview: Preview,
    translations: Translations,
}

impl Studio {
    /// Creates an empty studio rendering through `renderer`.
    #[must_use]
    pub fn new(renderer: Arc<dyn DiagramRenderer>) -> Self {
        let state = StudioState::default();
        Self {
            editor: SourceEditor::new(state.source()),
            controls: StyleControls::new(state.theme()),
            preview: Preview::new(renderer),
            translations: Translations::default(),
            state,
        }
    }

    /// Sets the source editor font.
    #[must_use]
    pub fn editor_font(mut self, font: iced::Font) -> Self {
        self.editor = self.editor.font(font);
        self
    }

    #[must_use]
    pub fn state(&self) -> &StudioState {
        &self.state
    }

    #[must_use]
    pub fn controls(&self) -> &StyleControls {
        &self.controls
    }

    #[must_use]
    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.translations.language()
    }

    /// Switches the language of every label.
    pub fn set_language(&mut self, language: Language) {
        self.translations.set_language(language);
    }

    /// Replaces the diagram source, e.g. from a template.
    pub fn load_source(&mut self, source: &str) -> Task<Message> {
        self.editor.set_text(source);
        if self.state.set_source(source.to_owned()) {
            self.refresh()
        } else {
            Task::none()
        }
    }

    /// Handles a message and returns the render task, if one was started.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Editor(message) => {
                let changed = self
                    .editor
                    .update(&message)
                    .is_some_and(|source| self.state.set_source(source));
                if changed { self.refresh() } else { Task::none() }
            }
            Message::Controls(message) => {
                let mut changed = false;
                for event in self.controls.update(&message) {
                    changed |= match event {
                        Event::ThemeChanged(theme) => self.state.set_theme(theme),
                        Event::VariablesChanged(variables) => {
                            self.state.set_variables(variables)
                        }
                    };
                }
                if changed { self.refresh() } else { Task::none() }
            }
            Message::Preview(message) => {
                self.preview.update(&message);
                Task::none()
            }
        }
    }

    fn refresh(&mut self) -> Task<Message> {
        self.preview
            .request(self.state.source(), self.state.theme(), self.state.variables())
            .map(Message::Preview)
    }

    /// Renders the editor and controls on the left, the preview on the right.
    pub fn view(&self) -> Element<'_, Message> {
        let sidebar = column![
            self.editor.view(&self.translations).map(Message::Editor),
            self.controls.view(&self.translations).map(Message::Controls),
        ]
        .spacing(16)
        .width(Length::Fixed(SIDEBAR_WIDTH));

        let preview = container(self.preview.view(&self.translations).map(Message::Preview))
            .padding(16)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(container::rounded_box);

        row![sidebar, preview].spacing(16).height(Length::Fill).into()
    }
}

#[cfg(test)]
mod tests {
    use iced::Color;
    use iced::widget::text_editor::{Action, Edit};

    use super::*;
    use crate::preview::{DisplayMode, PreviewOutput};
    use crate::renderer::testing::FakeRenderer;
    use crate::theme::{StyleField, ThemeName};

    fn setup() -> (Arc<FakeRenderer>, Studio) {
        let renderer = Arc::new(FakeRenderer::default());
        let studio = Studio::new(renderer.clone());
        (renderer, studio)
    }

    fn finish(studio: &mut Studio, result: Result<String, crate::RenderError>) {
        let generation = studio.preview().generation();
        let _ = studio.update(Message::Preview(preview::Message::Rendered(
            generation,
            result.map_err(Arc::new),
        )));
    }

    #[test]
    fn test_nothing_renders_until_there_is_source() {
        let (renderer, mut studio) = setup();
        let _ = studio.update(Message::Controls(style_controls::Message::FieldChanged(
            StyleField::Edge,
            Color::BLACK,
        )));

        assert_eq!(renderer.render_count(), 0);
        assert_eq!(studio.state().variables().get("lineColor"), Some("#000000"));
    }

    #[test]
    fn test_typing_triggers_render() {
        let (renderer, mut studio) = setup();
        let _ = studio.update(Message::Editor(source_editor::Message::Action(
            Action::Edit(Edit::Insert('A')),
        )));

        assert_eq!(studio.state().source().trim_end(), "A");
        assert_eq!(renderer.render_count(), 1);
    }

    #[test]
    fn test_load_source_renders_once() {
        let (renderer, mut studio) = setup();
        let _ = studio.load_source("graph TD; A-->B");
        let _ = studio.load_source("graph TD; A-->B");

        assert_eq!(studio.state().source(), "graph TD; A-->B");
        assert_eq!(renderer.render_count(), 1);
    }

    #[test]
    fn test_theme_change_clears_variables_and_rerenders() {
        let (renderer, mut studio) = setup();
        let _ = studio.load_source("graph TD; A-->B");

        let _ = studio.update(Message::Controls(style_controls::Message::ThemeSelected(
            ThemeName::Forest,
        )));

        assert_eq!(studio.state().theme(), ThemeName::Forest);
        assert!(studio.state().variables().is_empty());
        assert_eq!(renderer.render_count(), 2);

        let config = renderer.last_config();
        assert_eq!(config.as_ref().map(|c| c.theme), Some(ThemeName::Forest));
        assert_eq!(config.map(|c| c.theme_variables.is_empty()), Some(true));
    }

    #[test]
    fn test_color_change_rerenders_with_full_mapping() {
        let (renderer, mut studio) = setup();
        let _ = studio.load_source("graph TD; A-->B");

        let _ = studio.update(Message::Controls(style_controls::Message::FieldChanged(
            StyleField::Background,
            Color::from_rgb8(0x11, 0x22, 0x33),
        )));

        let config = renderer.last_config();
        let vars = config.map(|c| c.theme_variables).unwrap_or_default();
        assert_eq!(vars.len(), 19);
        assert_eq!(vars.get("primaryBkg"), Some("#112233"));
        assert_eq!(vars.get("nodeBorder"), Some("#9370DB"));
        assert_eq!(renderer.render_count(), 2);
    }

    #[test]
    fn test_render_results_reach_the_preview() {
        let (_, mut studio) = setup();
        let _ = studio.load_source("graph TD; A-->B");
        finish(&mut studio, Ok(String::from("<svg/>")));
        assert_eq!(studio.preview().output(), &PreviewOutput::Rendered(String::from("<svg/>")));

        let _ = studio.load_source("graph TD; A-->");
        finish(&mut studio, Err(crate::RenderError::MissingOutput));
        assert_eq!(studio.preview().output(), &PreviewOutput::Failed);
    }

    #[test]
    fn test_display_mode_toggle_leaves_theme_alone() {
        let (renderer, mut studio) = setup();
        let _ = studio.load_source("graph TD; A-->B");
        let state = studio.state().clone();

        let _ = studio.update(Message::Preview(preview::Message::ToggleDisplayMode));

        assert_eq!(studio.preview().display_mode(), DisplayMode::Dark);
        assert_eq!(studio.state(), &state);
        assert_eq!(renderer.render_count(), 1);
    }

    #[test]
    fn test_set_language() {
        let (_, mut studio) = setup();
        studio.set_language(Language::French);
        assert_eq!(studio.language(), Language::French);
    }
}
