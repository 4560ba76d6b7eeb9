//! Input and file helpers shared by the commands.
//!
//! - Reading a line of player input
//! - Creating parent directories before roster or record files are written

use std::io::BufRead;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Trims the line; `None` means EOF or a read error.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use imposter_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  vote 2 \n");
/// assert_eq!(read_stdin_line(&mut input).as_deref(), Some("vote 2"));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => {
            let trimmed = line.trim();
            Some(trimmed.to_string())
        }
        Err(_) => None, // Read error
    }
}

/// Creates missing parent directories of `path`.
pub fn ensure_parent_dir(path: &std::path::Path) -> Result<(), String> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
    }
    Ok(())
}
