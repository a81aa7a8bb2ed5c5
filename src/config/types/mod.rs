//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Configuration error types                    |
//! | `field`  | Type-safe field paths for diagnostics        |
//! | `handle` | Global configuration handle (write-once)     |

mod error;
mod field;
pub mod handle;

pub use error::{ConfigDiagnostics, ConfigError, ValidationError};
pub use field::FieldPath;
pub use handle::{cfg, init_config, try_cfg};
