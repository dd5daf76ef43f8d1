//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Provides implementations for all CLI commands.
//! Each command is in its own submodule for maintainability.

pub mod assess;
pub mod init;
pub mod interactive;

pub use assess::{assess_report, execute_assess, AssessOptions};
pub use init::{execute_init, InitOptions};
pub use interactive::{execute_interactive, run_session, InteractiveOptions};
