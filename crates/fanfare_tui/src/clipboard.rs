//! Clipboard helper for copying generated copy.
//!
//! Uses `arboard` for cross-platform support. The clipboard is created
//! fresh each time to avoid holding resources between copies.

use arboard::Clipboard;
use fanfare_error::{TuiError, TuiErrorKind, TuiResult};

/// Copy text to the system clipboard.
///
/// Common failure cases: no display server on headless Linux, permission
/// denied.
pub fn copy_to_clipboard(text: &str) -> TuiResult<()> {
    let mut clipboard = Clipboard::new()
        .map_err(|e| TuiError::new(TuiErrorKind::Clipboard(e.to_string())))?;
    clipboard
        .set_text(text)
        .map_err(|e| TuiError::new(TuiErrorKind::Clipboard(e.to_string())))?;
    Ok(())
}
