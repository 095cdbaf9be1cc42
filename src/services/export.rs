// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Export/print of the current view.
//!
//! Nothing is rendered to PDF or image in-process: the user either hands the
//! page to the platform print flow or copies a link for external tooling.

use crate::error::Result;
use crate::view::PageView;

/// The two export choices offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportChoice {
    /// Hand the current page to the platform print flow.
    Print,
    /// Copy the current page URL to the clipboard.
    CopyLink,
}

impl ExportChoice {
    pub const ALL: [ExportChoice; 2] = [ExportChoice::Print, ExportChoice::CopyLink];

    pub fn label(self) -> &'static str {
        match self {
            ExportChoice::Print => "Print / save as PDF",
            ExportChoice::CopyLink => "Copy link (for screenshot tools)",
        }
    }
}

/// Platform side of the export action.
pub trait ExportSink {
    /// Start the print flow for the given page.
    fn print(&mut self, page: &PageView) -> Result<()>;

    /// Put `text` on the clipboard.
    fn copy_to_clipboard(&mut self, text: &str) -> Result<()>;
}
