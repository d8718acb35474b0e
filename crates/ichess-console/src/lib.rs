//! Interactive text console for exploring ichess positions.

pub mod command;
pub mod config;
pub mod error;
pub mod session;

pub use command::{Command, parse_command};
pub use config::SessionConfig;
pub use error::ConsoleError;
pub use session::{Flow, Session};
