//! Iced components for editing Mermaid diagrams with a live preview.
//!
//! This crate provides a source editor, a theme and color panel, and a preview
//! pane that re-renders the diagram whenever the source or the styling
//! changes. Rendering is delegated to an external engine behind the
//! [`DiagramRenderer`] trait; [`MermaidCli`] drives the Mermaid command line
//! tool.
//!
//! # Features
//!
//! - **Live preview** re-rendered on every edit, theme switch, or color change
//! - **Built-in Mermaid themes**: default, forest, dark, neutral, base
//! - **Custom colors** for the default theme, expanded onto Mermaid's
//!   `themeVariables`
//! - **Light/dark preview background**, independent of the diagram theme
//! - **Localized UI** in English, French, and Spanish
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use iced::{Element, Task};
//! use mermaid_style_editor::{MermaidCli, Studio, StudioMessage};
//!
//! struct MyApp {
//!     studio: Studio,
//! }
//!
//! impl MyApp {
//!     fn new() -> (Self, Task<StudioMessage>) {
//!         let mut studio = Studio::new(Arc::new(MermaidCli::new()));
//!         let task = studio.load_source("graph TD;\n    A-->B;");
//!         (Self { studio }, task)
//!     }
//!
//!     fn update(&mut self, message: StudioMessage) -> Task<StudioMessage> {
//!         self.studio.update(message)
//!     }
//!
//!     fn view(&self) -> Element<'_, StudioMessage> {
//!         self.studio.view()
//!     }
//! }
//!
//! fn main() -> iced::Result {
//!     iced::application(MyApp::new, MyApp::update, MyApp::view).run()
//! }
//! ```
//!
//! # Theme variables
//!
//! Each color field populates several Mermaid variables at once:
//!
//! | Field | Mermaid variables |
//! |-------|-------------------|
//! | Node color | `primaryBkg`, `secondaryBkg`, `tertiaryBkg`, `mainBkg` |
//! | Border color | `border1`, `border2`, `nodeBorder`, `noteBorderColor` |
//! | Text color | `nodeTextColor`, `actorTextColor`, `signalTextColor`, `labelTextColor`, `noteTextColor` |
//! | Edge color | `lineColor`, `edgeColor`, `actorLineColor`, `signalColor` |
//! | Edge label | `edgeLabelBackground` |
//! | Subgraph | `clusterBkg` |
//!
//! ```
//! use mermaid_style_editor::{HexColor, StyleFields, ThemeName, theme_variables};
//!
//! let mut fields = StyleFields::default();
//! fields.background_color = HexColor::parse("#112233").unwrap();
//!
//! let vars = theme_variables(ThemeName::Default, &fields);
//! assert_eq!(vars.get("mainBkg"), Some("#112233"));
//!
//! // Other themes use the renderer's own palette.
//! assert!(theme_variables(ThemeName::Forest, &fields).is_empty());
//! ```

rust_i18n::i18n!("locales", fallback = "en");

mod i18n;
mod state;
mod studio;

pub mod preview;
pub mod renderer;
pub mod source_editor;
pub mod style_controls;
pub mod theme;

pub use i18n::{Language, Translations};
pub use preview::{DisplayMode, Preview, PreviewOutput};
pub use renderer::mmdc::MermaidCli;
pub use renderer::{DiagramRenderer, RenderConfig, RenderError, SecurityLevel};
pub use source_editor::SourceEditor;
pub use state::StudioState;
pub use studio::{Message as StudioMessage, Studio};
pub use style_controls::StyleControls;
pub use theme::{
    HexColor, HexColorError, StyleField, StyleFields, ThemeName, ThemeVariables,
    theme_variables,
};
