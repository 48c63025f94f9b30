//! The seam between the editor and the diagram rendering engine.
//!
//! The engine itself is opaque: it is configured with a theme and a set of
//! theme variables, then asked to turn diagram source into SVG markup.

use iced::futures::future::BoxFuture;
use serde::Serialize;
use thiserror::Error;

use crate::theme::{ThemeName, ThemeVariables};

pub mod mmdc;

/// How much the renderer trusts diagram content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SecurityLevel {
    #[default]
    Strict,
    /// Allows click handlers and HTML labels.
    Loose,
    Antiscript,
    Sandbox,
}

/// Renderer configuration, serialized in the shape Mermaid expects.
///
/// # Examples
///
/// ```
/// use mermaid_style_editor::{RenderConfig, ThemeName, ThemeVariables};
///
/// let config = RenderConfig::new(ThemeName::Dark, ThemeVariables::default());
/// let json = serde_json::to_string(&config).unwrap();
/// assert_eq!(
///     json,
///     r#"{"startOnLoad":false,"theme":"dark","securityLevel":"loose","themeVariables":{}}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderConfig {
    pub start_on_load: bool,
    pub theme: ThemeName,
    pub security_level: SecurityLevel,
    pub theme_variables: ThemeVariables,
}

impl RenderConfig {
    /// Creates the configuration used for every preview render.
    ///
    /// Sandboxing is relaxed to [`SecurityLevel::Loose`] so that advanced
    /// diagram features are available.
    #[must_use]
    pub fn new(theme: ThemeName, theme_variables: ThemeVariables) -> Self {
        Self {
            start_on_load: false,
            theme,
            security_level: SecurityLevel::Loose,
            theme_variables,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(ThemeName::Default, ThemeVariables::default())
    }
}

/// A failed render.
///
/// Every variant is treated the same way by the preview: the user sees a
/// fixed message and the details go to the log.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The engine refused the diagram source.
    #[error("renderer rejected the diagram (exit code {status:?}): {stderr}")]
    Rejected { status: Option<i32>, stderr: String },
    /// The engine reported success but produced no SVG.
    #[error("renderer produced no output")]
    MissingOutput,
    #[error("renderer I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not encode renderer configuration: {0}")]
    Config(#[from] serde_json::Error),
    /// The render worker went away before reporting a result.
    #[error("render was interrupted")]
    Interrupted,
}

/// A diagram rendering engine.
///
/// Mirrors the engine's own contract: a global [`configure`] followed by any
/// number of [`render`] calls. Implementations must snapshot the
/// configuration when `render` is called.
///
/// [`configure`]: DiagramRenderer::configure
/// [`render`]: DiagramRenderer::render
pub trait DiagramRenderer: Send + Sync {
    /// Applies the theme and theme variables for subsequent renders.
    fn configure(&self, config: &RenderConfig);

    /// Renders `source` into SVG markup whose root element carries `id`.
    fn render(
        &self,
        id: &str,
        source: &str,
    ) -> BoxFuture<'static, Result<String, RenderError>>;
}
