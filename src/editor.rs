//! Editor abstraction for opening day files.
//!
//! The `edit` command hands a day file to an external editor positioned at the
//! end of the file in insert mode. The trait lets the dispatcher be exercised
//! without spawning a real editor.

use crate::constants;
use crate::errors::{AppResult, EditorError};
use std::io;
use std::path::Path;
use std::process::Command;
use tracing::{debug, warn};

/// An editor command line split into the program and its own arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorCommand {
    /// The program to run.
    pub program: String,
    /// Arguments given before the ones `diary` adds.
    pub args: Vec<String>,
}

impl EditorCommand {
    /// Parses an editor setting such as `vim` or `code --wait`.
    ///
    /// # Errors
    ///
    /// Returns `EditorError::NotConfigured` for an empty or blank setting and
    /// `EditorError::InvalidCommand` if it contains shell metacharacters.
    ///
    /// ```
    /// use diary::editor::EditorCommand;
    ///
    /// let command = EditorCommand::parse("emacs -nw").unwrap();
    /// assert_eq!(command.program, "emacs");
    /// assert_eq!(command.args, vec!["-nw".to_string()]);
    /// ```
    pub fn parse(raw: &str) -> AppResult<Self> {
        if let Some(ch) = raw
            .chars()
            .find(|c| constants::EDITOR_FORBIDDEN_CHARS.contains(c))
        {
            return Err(EditorError::InvalidCommand {
                command: raw.to_string(),
                reason: format!(
                    "shell metacharacter '{}' is not allowed. Use a wrapper script instead",
                    ch
                ),
            }
            .into());
        }

        let mut words = raw.split_whitespace().map(str::to_string);
        let program = words.next().ok_or(EditorError::NotConfigured)?;
        Ok(EditorCommand {
            program,
            args: words.collect(),
        })
    }
}

/// Trait defining the interface for an editor component.
///
/// # Examples
///
/// ```
/// use diary::editor::Editor;
/// use diary::errors::AppResult;
/// use std::path::Path;
///
/// struct DummyEditor;
///
/// impl Editor for DummyEditor {
///     fn open_at_end(&self, path: &Path) -> AppResult<()> {
///         println!("Would open {}", path.display());
///         Ok(())
///     }
/// }
///
/// DummyEditor.open_at_end(Path::new("Journal 2023-01-05.txt")).unwrap();
/// ```
pub trait Editor {
    /// Opens `path` with the cursor on the last line, ready for typing.
    ///
    /// Blocks until the editor exits.
    fn open_at_end(&self, path: &Path) -> AppResult<()>;
}

/// An implementation of the Editor trait that launches an external command.
///
/// The command receives its own arguments, then `+9999999 -c startinsert <path>`,
/// the vi-family way of jumping to the end of the file in insert mode.
pub struct SystemEditor {
    /// The editor setting as configured (e.g., "vim", "emacs -nw").
    pub editor_cmd: String,
}

impl Editor for SystemEditor {
    /// # Errors
    ///
    /// Returns `AppError::Editor` with:
    /// - `EditorError::NotConfigured` if the editor command is empty
    /// - `EditorError::InvalidCommand` if it contains shell metacharacters
    /// - `EditorError::CommandNotFound` if the editor command doesn't exist
    /// - `EditorError::PermissionDenied` if permission is denied to execute the editor
    /// - `EditorError::ExecutionFailed` for other I/O errors during execution
    ///
    /// The editor's exit status is not treated as an error.
    fn open_at_end(&self, path: &Path) -> AppResult<()> {
        let command = EditorCommand::parse(&self.editor_cmd)?;

        debug!("Launching editor: {}", command.program);
        let status = Command::new(&command.program)
            .args(&command.args)
            .args(constants::EDITOR_OPEN_AT_END_ARGS)
            .arg(path)
            .status()
            .map_err(|e| map_spawn_error(&command.program, e))?;

        if !status.success() {
            warn!(
                "Editor '{}' exited with status {:?}",
                command.program,
                status.code()
            );
        }
        Ok(())
    }
}

/// Maps an I/O error from spawning the editor to a specific `EditorError` variant.
fn map_spawn_error(editor_cmd: &str, e: io::Error) -> EditorError {
    let command = editor_cmd.to_string();
    match e.kind() {
        io::ErrorKind::NotFound => EditorError::CommandNotFound { command, source: e },
        io::ErrorKind::PermissionDenied => EditorError::PermissionDenied { command, source: e },
        _ => EditorError::ExecutionFailed { command, source: e },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    struct MockEditor {
        pub opened_files: Arc<Mutex<Vec<PathBuf>>>,
    }

    impl Editor for MockEditor {
        fn open_at_end(&self, path: &Path) -> AppResult<()> {
            self.opened_files.lock().unwrap().push(path.to_path_buf());
            Ok(())
        }
    }

    #[test]
    fn test_mock_editor_records_files() {
        let editor = MockEditor {
            opened_files: Arc::new(Mutex::new(Vec::new())),
        };
        editor.open_at_end(Path::new("a.txt")).unwrap();

        let opened = editor.opened_files.lock().unwrap();
        assert_eq!(opened.as_slice(), &[PathBuf::from("a.txt")]);
    }

    #[test]
    fn test_empty_editor_is_not_configured() {
        let editor = SystemEditor {
            editor_cmd: String::new(),
        };
        let result = editor.open_at_end(Path::new("a.txt"));
        assert!(matches!(
            result,
            Err(AppError::Editor(EditorError::NotConfigured))
        ));
    }

    #[test]
    fn test_parse_splits_editor_arguments() {
        let command = EditorCommand::parse("  code   --wait ").unwrap();
        assert_eq!(command.program, "code");
        assert_eq!(command.args, vec!["--wait".to_string()]);

        let command = EditorCommand::parse("nvim").unwrap();
        assert!(command.args.is_empty());
    }

    #[test]
    fn test_parse_rejects_shell_metacharacters() {
        for cmd in ["vim;rm", "vim|cat", "$(vim)", "vim&", "vim > x"] {
            match EditorCommand::parse(cmd) {
                Err(AppError::Editor(EditorError::InvalidCommand { command, reason })) => {
                    assert_eq!(command, cmd);
                    assert!(reason.contains("metacharacter"));
                }
                other => panic!("Expected InvalidCommand for {cmd}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_parse_blank_is_not_configured() {
        for cmd in ["", "   "] {
            assert!(matches!(
                EditorCommand::parse(cmd),
                Err(AppError::Editor(EditorError::NotConfigured))
            ));
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_editor_arguments_come_first() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use tempfile::tempdir;

        let temp_dir = tempdir().unwrap();
        let log = temp_dir.path().join("args.log");
        let script = temp_dir.path().join("fake-editor");
        fs::write(
            &script,
            format!("#!/bin/sh\necho \"$@\" > '{}'\n", log.display()),
        )
        .unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let editor = SystemEditor {
            editor_cmd: format!("{} -nw", script.display()),
        };
        editor.open_at_end(Path::new("day.txt")).unwrap();

        let args = fs::read_to_string(&log).unwrap();
        assert_eq!(args, "-nw +9999999 -c startinsert day.txt\n");
    }

    #[test]
    fn test_missing_editor_command() {
        let editor = SystemEditor {
            editor_cmd: "definitely-not-an-editor-4f1c2a".to_string(),
        };
        match editor.open_at_end(Path::new("a.txt")) {
            Err(AppError::Editor(EditorError::CommandNotFound { command, .. })) => {
                assert_eq!(command, "definitely-not-an-editor-4f1c2a");
            }
            other => panic!("Expected CommandNotFound, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_not_an_error() {
        let editor = SystemEditor {
            editor_cmd: "false".to_string(),
        };
        assert!(editor.open_at_end(Path::new("a.txt")).is_ok());
    }

    #[test]
    fn test_map_spawn_error_kinds() {
        let err = map_spawn_error("vim", io::Error::new(io::ErrorKind::PermissionDenied, "no"));
        assert!(matches!(err, EditorError::PermissionDenied { .. }));

        let err = map_spawn_error("vim", io::Error::new(io::ErrorKind::Other, "boom"));
        assert!(matches!(err, EditorError::ExecutionFailed { .. }));
    }
}
