//! Serial console: line assembly, count parsing and responses.
//!
//! Lazy polling from the main loop - no dedicated task.
//! Zero heap allocation - all static buffers.

pub mod commands;
pub mod console;
pub mod error;
pub mod line_buffer;
pub mod parser;

pub use commands::{execute, process_line, respond, ACK_PREFIX, ERR_PREFIX};
pub use console::{Console, LineResult, VERSION};
pub use error::{ConsoleError, StartupError};
pub use line_buffer::{trim_line, LineBuffer};
pub use parser::{clamp_count, parse_count, CountScanner};
