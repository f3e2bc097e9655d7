//! Gess driver - terminal front end for the strictly_gess rules engine
//!
//! # Architecture
//!
//! - **Config**: TOML driver settings (log filter, board symbols)
//! - **Render**: text view of a board
//! - **Script**: replaying a list of moves from a TOML file
//! - **Session**: the interactive command loop
//!
//! # Example
//!
//! ```
//! use gess::{Command, Session, RenderConfig};
//!
//! let mut session = Session::new(RenderConfig::default());
//! let mut out = Vec::new();
//! let command: Command = "o6 o7".parse().unwrap();
//! session.execute(&command, &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().starts_with("Black played o6 -> o7"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod render;
mod script;
mod session;

pub use config::{ConfigError, GessConfig, RenderConfig};
pub use render::BoardView;
pub use script::{ReplayReport, ReplayScript, ReplayStep, ScriptError, ScriptedMove};
pub use session::{describe, Command, CommandError, Flow, Keyword, Session};
