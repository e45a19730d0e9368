//! # inodefs-shell
//!
//! Interactive menu driver for [`inodefs_kernel`]. The shell owns all
//! user-facing text; the kernel only returns values and typed errors.

pub mod config;
pub mod menu;
pub mod shell;

pub use config::{ConfigError, ShellConfig, default_config_path};
pub use menu::{ChoiceError, MenuChoice};
pub use shell::Shell;
