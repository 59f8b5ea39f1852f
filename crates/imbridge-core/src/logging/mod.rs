//! Logging setup.
//!
//! The bridge itself only talks to the `log` facade. Hosts that want console
//! output call [`init_logging`] once, early in `main`.

mod init;

pub use init::{LoggingConfig, init_logging};
