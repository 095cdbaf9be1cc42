//! Terminal export: printable text file and OSC 52 clipboard copy.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::Utc;

use crate::error::{DashboardError, Result};
use crate::services::ExportSink;
use crate::terminal::surface::render_page_text;
use crate::time_utils::format_utc_rfc3339;
use crate::view::PageView;

/// Export sink for the terminal front-end.
///
/// "Print" writes an uncoloured copy of the page to a text file that can be
/// sent to any printer; "copy link" uses the OSC 52 escape, which most
/// terminal emulators forward to the system clipboard.
pub struct TerminalExport<W: Write> {
    out: W,
    print_dir: PathBuf,
    last_print: Option<PathBuf>,
}

impl<W: Write> TerminalExport<W> {
    pub fn new<P: AsRef<Path>>(out: W, print_dir: P) -> Self {
        Self {
            out,
            print_dir: print_dir.as_ref().to_path_buf(),
            last_print: None,
        }
    }

    /// File written by the most recent print.
    pub fn last_print(&self) -> Option<&Path> {
        self.last_print.as_deref()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn io_error(context: &str, e: std::io::Error) -> DashboardError {
        DashboardError::Internal(anyhow::anyhow!("{}: {}", context, e))
    }
}

impl<W: Write> ExportSink for TerminalExport<W> {
    fn print(&mut self, page: &PageView) -> Result<()> {
        let now = Utc::now();
        fs::create_dir_all(&self.print_dir)
            .map_err(|e| Self::io_error("Failed to create print directory", e))?;

        let path = self
            .print_dir
            .join(format!("dashboard-{}.txt", now.format("%Y%m%d-%H%M%S%3f")));
        let document = format!(
            "Printed {}\n\n{}",
            format_utc_rfc3339(now),
            render_page_text(page, false)
        );
        fs::write(&path, document).map_err(|e| Self::io_error("Failed to write print file", e))?;

        writeln!(self.out, "Printable page saved to {}", path.display())
            .map_err(|e| Self::io_error("Failed to report print", e))?;
        tracing::info!(path = %path.display(), "Page printed");
        self.last_print = Some(path);
        Ok(())
    }

    fn copy_to_clipboard(&mut self, text: &str) -> Result<()> {
        write!(self.out, "\x1b]52;c;{}\x07", BASE64.encode(text))
            .and_then(|_| writeln!(self.out, "Copied link: {}", text))
            .and_then(|_| self.out.flush())
            .map_err(|e| Self::io_error("Failed to copy to clipboard", e))
    }
}
