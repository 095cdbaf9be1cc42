//! Terminal front-end: command parsing, page drawing and export.

pub mod command;
pub mod export;
pub mod surface;

pub use command::{Command, CommandError};
pub use export::TerminalExport;
pub use surface::{render_page_text, TerminalSurface};
