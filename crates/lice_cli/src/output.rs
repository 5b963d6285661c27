//! Output dispatch: stdout, file or clipboard.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use thiserror::Error;
use tracing::{debug, info};

use lice_templates::RenderedOutput;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Error copying to clipboard: {0}")]
    Clipboard(String),

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where rendered text goes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Destination {
    #[default]
    Stdout,
    File(PathBuf),
    Clipboard,
}

/// A clipboard tool that reads the text on stdin.
#[derive(Debug, Clone)]
pub struct ClipboardCommand {
    program: String,
    args: Vec<String>,
}

impl ClipboardCommand {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    fn copy(&self, text: &str) -> io::Result<()> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(text.as_bytes()) {
                drop(stdin);
                let _ = child.kill();
                let _ = child.wait();
                return Err(e);
            }
        }

        let status = child.wait()?;
        if status.success() {
            Ok(())
        } else {
            Err(io::Error::other(format!(
                "{} exited with {}",
                self.program, status
            )))
        }
    }
}

/// Clipboard tools to try, in order, for the current platform.
pub fn platform_clipboard() -> Vec<ClipboardCommand> {
    if cfg!(target_os = "macos") {
        vec![ClipboardCommand::new("pbcopy", &[])]
    } else if cfg!(windows) {
        vec![ClipboardCommand::new("clip", &[])]
    } else {
        vec![
            ClipboardCommand::new("wl-copy", &[]),
            ClipboardCommand::new("xclip", &["-selection", "clipboard"]),
            ClipboardCommand::new("xsel", &["--clipboard", "--input"]),
        ]
    }
}

/// Sends rendered output to its destination.
pub struct Dispatcher {
    clipboard: Vec<ClipboardCommand>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            clipboard: platform_clipboard(),
        }
    }

    /// Use specific clipboard tools instead of the platform defaults.
    pub fn with_clipboard(clipboard: Vec<ClipboardCommand>) -> Self {
        Self { clipboard }
    }

    /// Dispatch to stdout, a file or the clipboard.
    pub fn dispatch(
        &self,
        output: &RenderedOutput,
        destination: &Destination,
    ) -> Result<(), OutputError> {
        match destination {
            Destination::Stdout => {
                let stdout = io::stdout();
                self.write_to(output, &mut stdout.lock())
            }
            Destination::File(path) => self.write_file(output, path).map(|_| ()),
            Destination::Clipboard => {
                self.copy_to_clipboard(&output.text)?;
                println!("License text copied to clipboard");
                Ok(())
            }
        }
    }

    pub fn write_to<W: Write>(
        &self,
        output: &RenderedOutput,
        out: &mut W,
    ) -> Result<(), OutputError> {
        out.write_all(output.text.as_bytes())
            .and_then(|_| out.flush())
            .map_err(|source| OutputError::Io {
                path: PathBuf::from("<stdout>"),
                source,
            })
    }

    /// Write to a file, returning the path actually written.
    pub fn write_file(
        &self,
        output: &RenderedOutput,
        path: &Path,
    ) -> Result<PathBuf, OutputError> {
        let target = target_path(path, output);
        fs::write(&target, &output.text).map_err(|source| OutputError::Io {
            path: target.clone(),
            source,
        })?;
        info!("Wrote {}", target.display());
        Ok(target)
    }

    pub fn copy_to_clipboard(&self, text: &str) -> Result<(), OutputError> {
        let mut failures = Vec::new();
        for command in &self.clipboard {
            match command.copy(text) {
                Ok(()) => {
                    info!("Copied to clipboard with {}", command.program);
                    return Ok(());
                }
                Err(e) => {
                    debug!("Clipboard tool {} failed: {}", command.program, e);
                    failures.push(format!("{}: {}", command.program, e));
                }
            }
        }

        if failures.is_empty() {
            return Err(OutputError::Clipboard(
                "no clipboard tool configured".to_string(),
            ));
        }
        Err(OutputError::Clipboard(failures.join("; ")))
    }
}

/// Final file path for `path`.
///
/// An existing directory receives the suggested filename. A path without an
/// extension gets the suggested extension. Anything else is used as given.
pub fn target_path(path: &Path, output: &RenderedOutput) -> PathBuf {
    if path.is_dir() {
        path.join(&output.suggested_filename)
    } else if path.extension().is_none() {
        path.with_extension(output.suggested_extension())
    } else {
        path.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn output() -> RenderedOutput {
        RenderedOutput {
            text: "MIT License\n".to_string(),
            suggested_filename: "mit.txt".to_string(),
        }
    }

    #[test]
    fn test_target_path_keeps_extension() {
        let path = Path::new("output.py");
        assert_eq!(target_path(path, &output()), PathBuf::from("output.py"));
    }

    #[test]
    fn test_target_path_adds_suggested_extension() {
        let path = Path::new("output");
        assert_eq!(target_path(path, &output()), PathBuf::from("output.txt"));
    }

    #[test]
    fn test_target_path_directory() {
        let dir = tempdir().unwrap();
        assert_eq!(target_path(dir.path(), &output()), dir.path().join("mit.txt"));
    }

    #[test]
    fn test_write_file() {
        let dir = tempdir().unwrap();
        let dispatcher = Dispatcher::with_clipboard(Vec::new());

        let written = dispatcher
            .write_file(&output(), &dir.path().join("LICENSE"))
            .unwrap();
        assert_eq!(written, dir.path().join("LICENSE.txt"));
        assert_eq!(fs::read_to_string(written).unwrap(), "MIT License\n");
    }

    #[test]
    fn test_write_to_buffer() {
        let dispatcher = Dispatcher::with_clipboard(Vec::new());
        let mut buffer = Vec::new();
        dispatcher.write_to(&output(), &mut buffer).unwrap();
        assert_eq!(buffer, b"MIT License\n");
    }

    #[test]
    fn test_clipboard_failure_is_distinct() {
        let dispatcher = Dispatcher::with_clipboard(vec![ClipboardCommand::new(
            "lice-test-no-such-clipboard-tool",
            &[],
        )]);
        let err = dispatcher.copy_to_clipboard("text").unwrap_err();
        assert!(matches!(err, OutputError::Clipboard(_)));
        assert!(err.to_string().starts_with("Error copying to clipboard"));
    }

    #[test]
    fn test_clipboard_without_tools() {
        let dispatcher = Dispatcher::with_clipboard(Vec::new());
        assert!(matches!(
            dispatcher.copy_to_clipboard("text"),
            Err(OutputError::Clipboard(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_tool_that_closes_stdin_early_is_an_error() {
        // `true` exits without reading, so a payload larger than the pipe
        // buffer cannot be written.
        let tool = ClipboardCommand::new("true", &[]);
        let text = "x".repeat(1 << 20);
        assert!(tool.copy(&text).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_clipboard_falls_back_to_next_tool() {
        let dispatcher = Dispatcher::with_clipboard(vec![
            ClipboardCommand::new("lice-test-no-such-clipboard-tool", &[]),
            ClipboardCommand::new("cat", &[]),
        ]);
        dispatcher.copy_to_clipboard("text").unwrap();
    }
}
