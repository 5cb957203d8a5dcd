//! Command implementations.

pub mod analyze;
pub mod config;
pub mod process;
pub mod run;

pub use self::analyze::execute_analyze;
pub use self::config::execute_config;
pub use self::process::execute_process;
pub use self::run::execute_run;
