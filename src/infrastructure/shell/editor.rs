//! Opening the endpoint file for manual editing.

use std::io;
use std::path::Path;
use std::process::Command;

/// Open `file` in `$VISUAL`/`$EDITOR`, falling back to the desktop opener.
pub fn open_in_editor(file: &Path) -> io::Result<()> {
    let editor = std::env::var("VISUAL")
        .or_else(|_| std::env::var("EDITOR"))
        .ok()
        .filter(|e| !e.trim().is_empty());

    if let Some(editor) = editor {
        match run_editor(&editor, file) {
            Ok(()) => return Ok(()),
            Err(e) => {
                tracing::error!(editor = %editor, error = %e, "cannot edit configuration file");
            }
        }
    }

    open_with_desktop(file)
}

fn run_editor(editor: &str, file: &Path) -> io::Result<()> {
    let mut parts = editor.split_whitespace();
    let Some(program) = parts.next() else {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "empty editor command"));
    };

    let status = Command::new(program).args(parts).arg(file).status()?;
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!("{} exited with {}", program, status)))
    }
}

fn open_with_desktop(file: &Path) -> io::Result<()> {
    let mut command = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]);
        cmd
    } else {
        Command::new("xdg-open")
    };

    let status = command.arg(file).status()?;
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!(
            "cannot open {} in editor ({})",
            file.display(),
            status
        )))
    }
}
