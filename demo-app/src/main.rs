//! Mermaid Studio: a desktop editor for styling Mermaid diagrams.
//!
//! Layout:
//! - A toolbar at the top with a template picker and a UI language picker
//! - The studio below it: source editor and style controls on the left,
//!   live preview on the right
//!
//! Diagrams are rendered with the Mermaid CLI. A local
//! `node_modules/.bin/mmdc` in the working directory is preferred over the
//! one on `PATH`.

use std::sync::Arc;

use iced::widget::{Space, column, pick_list, row, text};
use iced::{Element, Font, Length, Task, Theme};
use mermaid_style_editor::{Language, MermaidCli, Studio, StudioMessage};
use tracing_subscriber::EnvFilter;

/// Main entry point for the demo application.
fn main() -> iced::Result {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    iced::application(DemoApp::new, DemoApp::update, DemoApp::view)
        .title("Mermaid Graph Style Editor")
        .theme(DemoApp::theme)
        .run()
}

/// Wrapper for Language to implement Display trait for pick_list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LanguageOption(Language);

impl LanguageOption {
    const ALL: [LanguageOption; 3] = [
        LanguageOption(Language::English),
        LanguageOption(Language::French),
        LanguageOption(Language::Spanish),
    ];

    fn inner(self) -> Language {
        self.0
    }
}

impl From<Language> for LanguageOption {
    fn from(lang: Language) -> Self {
        LanguageOption(lang)
    }
}

impl std::fmt::Display for LanguageOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Language::English => write!(f, "English"),
            Language::French => write!(f, "Français"),
            Language::Spanish => write!(f, "Español"),
        }
    }
}

/// Diagram templates available in the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Template {
    Empty,
    Flowchart,
    Sequence,
    Class,
    State,
}

impl Template {
    const ALL: [Template; 5] = [
        Template::Empty,
        Template::Flowchart,
        Template::Sequence,
        Template::Class,
        Template::State,
    ];

    fn name(self) -> &'static str {
        match self {
            Template::Empty => "Empty",
            Template::Flowchart => "Flowchart",
            Template::Sequence => "Sequence",
            Template::Class => "Class",
            Template::State => "State",
        }
    }

    fn content(self) -> &'static str {
        match self {
            Template::Empty => "",
            Template::Flowchart => {
                r#"graph TD
    A[Start] --> B{Is it working?}
    B -->|Yes| C[Great]
    B -->|No| D[Debug]
    D --> B
    subgraph Review
        C --> E[Ship it]
    end
"#
            }
            Template::Sequence => {
                r#"sequenceDiagram
    participant Alice
    participant Bob
    Alice->>Bob: Hello Bob, how are you?
    Bob-->>Alice: Fine, thanks!
    Note right of Bob: Bob thinks
"#
            }
            Template::Class => {
                r#"classDiagram
    Animal <|-- Duck
    Animal : +int age
    Animal : +isMammal()
    class Duck {
        +String beakColor
        +swim()
    }
"#
            }
            Template::State => {
                r#"stateDiagram-v2
    [*] --> Idle
    Idle --> Rendering : edit
    Rendering --> Idle : done
    Rendering --> Failed : error
    Failed --> Idle : fix
"#
            }
        }
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Demo application state.
struct DemoApp {
    /// Editor, style controls, and preview
    studio: Studio,
}

/// Application messages.
#[derive(Debug, Clone)]
enum Message {
    /// Studio event
    Studio(StudioMessage),
    /// Template selected
    TemplateSelected(Template),
    /// UI Language changed
    LanguageChanged(LanguageOption),
}

impl DemoApp {
    /// Creates a new instance of the application.
    fn new() -> (Self, Task<Message>) {
        let root = std::env::current_dir().unwrap_or_default();
        let renderer = MermaidCli::locate(&root);
        tracing::info!(
            program = %renderer.program_path().display(),
            "using mermaid cli"
        );

        let studio = Studio::new(Arc::new(renderer)).editor_font(Font::MONOSPACE);
        (Self { studio }, Task::none())
    }

    /// Handles messages and updates the application state.
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Studio(event) => self.studio.update(event).map(Message::Studio),
            Message::TemplateSelected(template) => {
                tracing::info!(template = template.name(), "template loaded");
                self.studio.load_source(template.content()).map(Message::Studio)
            }
            Message::LanguageChanged(option) => {
                tracing::info!(language = %option, "UI language changed");
                self.studio.set_language(option.inner());
                Task::none()
            }
        }
    }

    /// Returns the current theme for the application.
    ///
    /// The window stays light; the preview has its own light/dark toggle.
    fn theme(&self) -> Theme {
        Theme::Light
    }

    /// Renders the user interface.
    fn view(&self) -> Element<'_, Message> {
        let toolbar = row![
            text("Mermaid Graph Style Editor").size(24),
            Space::new().width(Length::Fill),
            pick_list(Template::ALL, None::<Template>, Message::TemplateSelected)
                .placeholder("Choose template...")
                .text_size(14),
            Space::new().width(10),
            text("Language:"),
            pick_list(
                LanguageOption::ALL,
                Some(LanguageOption::from(self.studio.language())),
                Message::LanguageChanged
            ),
        ]
        .spacing(10)
        .align_y(iced::Center);

        column![toolbar, self.studio.view().map(Message::Studio)]
            .spacing(16)
            .padding(16)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
