//! Live diagram preview.
//!
//! Every change of source, theme, or theme variables starts a new render.
//! Renders are not cancelled; each request bumps a generation counter and
//! results from older generations are dropped when they arrive, so the
//! display always ends up showing the most recent request.

use std::sync::Arc;

use iced::futures::future::BoxFuture;
use iced::widget::svg;
use iced::{Color, Element, Task};
use uuid::Uuid;
use web_time::Instant;

use crate::i18n::Translations;
use crate::renderer::{DiagramRenderer, RenderConfig, RenderError};
use crate::theme::{ThemeName, ThemeVariables};

mod view;

/// Background of the preview area. Independent of the Mermaid theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    /// Returns the other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Background color of the preview container.
    #[must_use]
    pub fn background(self) -> Color {
        match self {
            Self::Light => Color::WHITE,
            Self::Dark => Color::from_rgb8(0x11, 0x18, 0x27),
        }
    }
}

/// What the preview currently displays.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PreviewOutput {
    /// Nothing rendered yet, or cleared for an in-flight render
    #[default]
    Empty,
    /// SVG markup exactly as returned by the renderer
    Rendered(String),
    /// The last render failed; a fixed message is shown
    Failed,
}

/// Messages handled by [`Preview`].
#[derive(Debug, Clone)]
pub enum Message {
    /// A render finished. Carries the generation it was requested under.
    Rendered(u64, Result<String, Arc<RenderError>>),
    /// Flip the light/dark background
    ToggleDisplayMode,
}

/// Renders diagrams through a [`DiagramRenderer`] and shows the result.
pub struct Preview {
    id: String,
    renderer: Arc<dyn DiagramRenderer>,
    output: PreviewOutput,
    handle: Option<svg::Handle>,
    generation: u64,
    requested_at: Instant,
    display_mode: DisplayMode,
}

impl std::fmt::Debug for Preview {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preview")
            .field("id", &self.id)
            .field("output", &self.output)
            .field("generation", &self.generation)
            .field("display_mode", &self.display_mode)
            .finish_non_exhaustive()
    }
}

impl Preview {
    /// Creates an empty preview with a fresh random element id.
    #[must_use]
    pub fn new(renderer: Arc<dyn DiagramRenderer>) -> Self {
        let suffix = Uuid::new_v4().simple().to_string();
        Self {
            id: format!("mermaid-diagram-{}", &suffix[..9]),
            renderer,
            output: PreviewOutput::Empty,
            handle: None,
            generation: 0,
            requested_at: Instant::now(),
            display_mode: DisplayMode::default(),
        }
    }

    /// The element id passed to every render. Stable for the preview's lifetime.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn output(&self) -> &PreviewOutput {
        &self.output
    }

    #[must_use]
    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    /// Generation of the most recent render request.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Starts a render of `source`.
    ///
    /// An empty source is ignored and leaves the current output in place.
    pub fn request(
        &mut self,
        source: &str,
        theme: ThemeName,
        variables: &ThemeVariables,
    ) -> Task<Message> {
        match self.begin(source, theme, variables) {
            Some((generation, render)) => Task::perform(render, move |result| {
                Message::Rendered(generation, result.map_err(Arc::new))
            }),
            None => Task::none(),
        }
    }

    /// Configures the renderer, clears the output, and returns the pending
    /// render tagged with its generation.
    fn begin(
        &mut self,
        source: &str,
        theme: ThemeName,
        variables: &ThemeVariables,
    ) -> Option<(u64, BoxFuture<'static, Result<String, RenderError>>)> {
        if source.is_empty() {
            return None;
        }

        self.renderer.configure(&RenderConfig::new(theme, variables.clone()));
        self.replace_output(PreviewOutput::Empty);

        self.generation += 1;
        self.requested_at = Instant::now();
        tracing::debug!(
            id = %self.id,
            generation = self.generation,
            theme = theme.as_str(),
            "requesting diagram render"
        );

        Some((self.generation, self.renderer.render(&self.id, source)))
    }

    /// Handles a message.
    pub fn update(&mut self, message: &Message) {
        match message {
            Message::Rendered(generation, _) if *generation != self.generation => {
                tracing::debug!(
                    generation,
                    latest = self.generation,
                    "discarding stale render"
                );
            }
            Message::Rendered(_, Ok(svg)) => {
                tracing::info!(
                    elapsed_ms = self.requested_at.elapsed().as_millis(),
                    bytes = svg.len(),
                    "rendered diagram"
                );
                self.replace_output(PreviewOutput::Rendered(svg.clone()));
            }
            Message::Rendered(_, Err(err)) => {
                tracing::error!(error = %err, "failed to render mermaid diagram");
                self.replace_output(PreviewOutput::Failed);
            }
            Message::ToggleDisplayMode => {
                self.display_mode = self.display_mode.toggled();
            }
        }
    }

    /// Replaces the displayed output in one step.
    fn replace_output(&mut self, output: PreviewOutput) {
        self.handle = match &output {
            PreviewOutput::Rendered(markup) => {
                Some(svg::Handle::from_memory(markup.clone().into_bytes()))
            }
            PreviewOutput::Empty | PreviewOutput::Failed => None,
        };
        self.output = output;
    }

    /// Renders the title bar and the display area.
    pub fn view<'a>(&'a self, translations: &Translations) -> Element<'a, Message> {
        view::view(self, translations)
    }
}
