//! Kernel utilities shared by the Motif crates.
//! Keep this crate lightweight: configuration loading and the settings types it fills.
//!
//! ## Config loading
//! ```rust,no_run
//! use motif_kernel::config::{load_config, ShellConfig};
//!
//! let cfg: ShellConfig = load_config(Some("motif.toml")).unwrap();
//! println!("{}", cfg.logger.level);
//! ```

pub mod config;
