//! Text shell for playing xiangqi one click at a time.

pub mod command;
pub mod error;
pub mod render;
pub mod session;

pub use command::Command;
pub use error::ShellError;
pub use render::{BoardView, GlyphStyle};
pub use session::{Session, ShellConfig};
