//! Pipeline progress reporting.
//!
//! The pipeline emits [`ProgressEvent`]s; a [`ProgressReporter`] decides how
//! they reach the operator. [`ConsoleProgress`] prints the human-readable
//! lines, [`NullProgress`] discards everything.
//!
//! # Example
//!
//! ```
//! use favgen::progress::{ConsoleProgress, ProgressEvent, ProgressReporter};
//! use std::path::PathBuf;
//!
//! let reporter = ConsoleProgress::with_output(Vec::new());
//! reporter.report(ProgressEvent::Generated { path: PathBuf::from("public/favicon-48x48.png") });
//! ```

use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::sync::Mutex;

/// Advisory follow-up actions printed after a successful run
pub const NEXT_STEPS: [&str; 4] = [
    "Update layout.tsx to reference the new PNG files",
    "Deploy your changes",
    "Request re-indexing in Google Search Console",
    "Wait 1-3 weeks for Google to update",
];

/// Events emitted while the pipeline runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// The converter answered its capability probe
    CapabilityChecked {
        /// Backend name
        converter: String,
    },
    /// An output file was written
    Generated {
        /// Path of the produced file
        path: PathBuf,
    },
    /// ICO bundling is about to start
    BundleStarted {
        /// Path of the ICO being produced
        path: PathBuf,
    },
    /// Every output was produced
    Finished {
        /// Number of files written
        outputs: usize,
    },
}

/// Trait for progress reporters.
pub trait ProgressReporter: Send + Sync {
    /// Report a progress event.
    fn report(&self, event: ProgressEvent);
}

/// A progress reporter that discards all events.
#[derive(Debug, Default)]
pub struct NullProgress;

impl NullProgress {
    /// Create a new null progress reporter.
    pub fn new() -> Self {
        Self
    }
}

impl ProgressReporter for NullProgress {
    fn report(&self, _event: ProgressEvent) {}
}

/// Console progress reporter with optional colors.
pub struct ConsoleProgress {
    /// Whether to use colors
    use_colors: bool,
    /// Output writer (for testing)
    output: Mutex<Box<dyn Write + Send>>,
}

impl std::fmt::Debug for ConsoleProgress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleProgress").field("use_colors", &self.use_colors).finish()
    }
}

impl ConsoleProgress {
    /// Create a console progress reporter writing to stdout.
    ///
    /// Colors are enabled when stdout is a terminal.
    pub fn new() -> Self {
        Self {
            use_colors: std::io::stdout().is_terminal(),
            output: Mutex::new(Box::new(std::io::stdout())),
        }
    }

    /// Create a console progress reporter that writes to a custom output.
    pub fn with_output<W: Write + Send + 'static>(output: W) -> Self {
        Self {
            use_colors: false, // Disable colors for custom output
            output: Mutex::new(Box::new(output)),
        }
    }

    /// Set whether to use colors.
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{}{}\x1b[0m", color, text)
        } else {
            text.to_string()
        }
    }

    fn green(&self, text: &str) -> String {
        self.color(text, "\x1b[32m")
    }

    fn bold(&self, text: &str) -> String {
        self.color(text, "\x1b[1m")
    }

    /// Write a line to output.
    fn writeln(&self, line: &str) {
        if let Ok(mut output) = self.output.lock() {
            let _ = writeln!(output, "{}", line);
        }
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for ConsoleProgress {
    fn report(&self, event: ProgressEvent) {
        match event {
            ProgressEvent::CapabilityChecked { converter } => {
                log::debug!("converter '{}' is available", converter);
            }
            ProgressEvent::Generated { path } => {
                self.writeln(&format!("{} Generated {}", self.green("✓"), path.display()));
            }
            ProgressEvent::BundleStarted { path } => {
                let name = path.file_name().map(|n| n.to_string_lossy().into_owned());
                self.writeln(&format!(
                    "\nGenerating {} with multiple sizes...",
                    name.unwrap_or_else(|| path.display().to_string())
                ));
            }
            ProgressEvent::Finished { outputs } => {
                log::debug!("{} outputs written", outputs);
                self.writeln(&format!(
                    "\n{} {}",
                    self.green("✅"),
                    self.bold("All favicons generated successfully!")
                ));
                self.writeln("\nNext steps:");
                for (i, step) in NEXT_STEPS.iter().enumerate() {
                    self.writeln(&format!("{}. {}", i + 1, step));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    /// Shared buffer so tests can read what the reporter wrote.
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn test_generated_line() {
        let buf = SharedBuf::default();
        let reporter = ConsoleProgress::with_output(buf.clone());
        reporter.report(ProgressEvent::Generated { path: PathBuf::from("public/favicon-48x48.png") });
        assert_eq!(buf.contents(), "✓ Generated public/favicon-48x48.png\n");
    }

    #[test]
    fn test_bundle_started_line() {
        let buf = SharedBuf::default();
        let reporter = ConsoleProgress::with_output(buf.clone());
        reporter.report(ProgressEvent::BundleStarted { path: PathBuf::from("public/favicon.ico") });
        assert_eq!(buf.contents(), "\nGenerating favicon.ico with multiple sizes...\n");
    }

    #[test]
    fn test_finished_prints_banner_and_next_steps() {
        let buf = SharedBuf::default();
        let reporter = ConsoleProgress::with_output(buf.clone());
        reporter.report(ProgressEvent::Finished { outputs: 5 });

        let out = buf.contents();
        assert!(out.contains("✅ All favicons generated successfully!"));
        assert!(out.contains("Next steps:"));
        assert!(out.contains("1. Update layout.tsx to reference the new PNG files"));
        assert!(out.contains("4. Wait 1-3 weeks for Google to update"));
    }

    #[test]
    fn test_capability_checked_is_silent() {
        let buf = SharedBuf::default();
        let reporter = ConsoleProgress::with_output(buf.clone());
        reporter.report(ProgressEvent::CapabilityChecked { converter: "magick".to_string() });
        assert!(buf.contents().is_empty());
    }

    #[test]
    fn test_colors_wrap_glyph() {
        let buf = SharedBuf::default();
        let reporter = ConsoleProgress::with_output(buf.clone()).with_colors(true);
        reporter.report(ProgressEvent::Generated { path: PathBuf::from("a.png") });
        assert!(buf.contents().starts_with("\x1b[32m✓\x1b[0m Generated a.png"));
    }
}
