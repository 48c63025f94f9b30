//! Renderer backed by the Mermaid command line tool (`mmdc`).
//!
//! Each render runs on its own thread: the source and configuration are
//! written to a temporary directory, `mmdc` is invoked on them, and the
//! produced SVG is read back.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{Mutex, PoisonError};

use iced::futures::channel::oneshot;
use iced::futures::future::{self, BoxFuture};

use super::{DiagramRenderer, RenderConfig, RenderError};

const INPUT_FILE: &str = "diagram.mmd";
const OUTPUT_FILE: &str = "diagram.svg";
const CONFIG_FILE: &str = "mermaid-config.json";

/// Renders diagrams by shelling out to `mmdc`.
///
/// # Example
///
/// ```no_run
/// use mermaid_style_editor::renderer::mmdc::MermaidCli;
///
/// let renderer = MermaidCli::locate(std::path::Path::new("."))
///     .puppeteer_config("puppeteer.json");
/// ```
#[derive(Debug)]
pub struct MermaidCli {
    program: PathBuf,
    puppeteer_config: Option<PathBuf>,
    config: Mutex<RenderConfig>,
}

impl Default for MermaidCli {
    fn default() -> Self {
        Self::new()
    }
}

impl MermaidCli {
    /// Uses `mmdc` from `PATH`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            program: PathBuf::from("mmdc"),
            puppeteer_config: None,
            config: Mutex::new(RenderConfig::default()),
        }
    }

    /// Prefers a project-local `node_modules/.bin/mmdc` under `root`, and
    /// falls back to `mmdc` from `PATH`.
    #[must_use]
    pub fn locate(root: &Path) -> Self {
        let bin_root = root.join("node_modules").join(".bin");
        let local = ["mmdc.cmd", "mmdc"]
            .into_iter()
            .map(|name| bin_root.join(name))
            .find(|path| path.is_file());

        match local {
            Some(program) => Self::new().program(program),
            None => Self::new(),
        }
    }

    /// Sets the `mmdc` executable.
    #[must_use]
    pub fn program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Passes a Puppeteer configuration file to `mmdc` (`-p`).
    #[must_use]
    pub fn puppeteer_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.puppeteer_config = Some(path.into());
        self
    }

    /// The configured executable.
    #[must_use]
    pub fn program_path(&self) -> &Path {
        &self.program
    }

    fn snapshot(&self) -> Job {
        Job {
            program: self.program.clone(),
            puppeteer_config: self.puppeteer_config.clone(),
            config: self
                .config
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone(),
        }
    }
}

impl DiagramRenderer for MermaidCli {
    fn configure(&self, config: &RenderConfig) {
        *self.config.lock().unwrap_or_else(PoisonError::into_inner) =
            config.clone();
    }

    fn render(
        &self,
        id: &str,
        source: &str,
    ) -> BoxFuture<'static, Result<String, RenderError>> {
        let job = self.snapshot();
        let id = id.to_owned();
        let source = source.to_owned();
        let (sender, receiver) = oneshot::channel();

        let spawned = std::thread::Builder::new()
            .name(String::from("mmdc-render"))
            .spawn(move || {
                // The receiver is gone when the preview was dropped.
                let _ = sender.send(job.run(&id, &source));
            });

        match spawned {
            Ok(_) => Box::pin(async move {
                receiver.await.unwrap_or(Err(RenderError::Interrupted))
            }),
            Err(err) => Box::pin(future::ready(Err(RenderError::Io(err)))),
        }
    }
}

/// Everything a single render needs, detached from the renderer.
struct Job {
    program: PathBuf,
    puppeteer_config: Option<PathBuf>,
    config: RenderConfig,
}

impl Job {
    fn run(&self, id: &str, source: &str) -> Result<String, RenderError> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join(INPUT_FILE);
        let output = dir.path().join(OUTPUT_FILE);
        let config = dir.path().join(CONFIG_FILE);

        fs::write(&input, source)?;
        fs::write(&config, serde_json::to_vec_pretty(&self.config)?)?;

        let result = self.command(id, &input, &output, &config).output()?;
        if !result.status.success() {
            return Err(RenderError::Rejected {
                status: result.status.code(),
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_owned(),
            });
        }

        // mmdc sometimes exits cleanly after only logging a parse error.
        match fs::read_to_string(&output) {
            Ok(svg) if !svg.trim().is_empty() => Ok(svg),
            Ok(_) => Err(RenderError::MissingOutput),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(RenderError::MissingOutput)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn command(
        &self,
        id: &str,
        input: &Path,
        output: &Path,
        config: &Path,
    ) -> Command {
        let is_batch = self.program.extension().and_then(|ext| ext.to_str()).is_some_and(
            |ext| ext.eq_ignore_ascii_case("cmd") || ext.eq_ignore_ascii_case("bat"),
        );

        let mut cmd = if is_batch {
            let mut cmd = Command::new("cmd.exe");
            cmd.arg("/c").arg(&self.program);
            cmd
        } else {
            Command::new(&self.program)
        };

        cmd.arg("-i")
            .arg(input)
            .arg("-o")
            .arg(output)
            .arg("-c")
            .arg(config)
            .arg("-t")
            .arg(self.config.theme.as_str())
            .arg("-b")
            .arg("transparent")
            .arg("--svgId")
            .arg(id)
            .arg("-q");

        if let Some(puppeteer) = &self.puppeteer_config {
            cmd.arg("-p").arg(puppeteer);
        }

        cmd
    }
}
