//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Init logging → Build route table → Bind → Serve
//!
//! Shutdown (shutdown.rs, signals.rs):
//!     SIGTERM/SIGINT or Shutdown::trigger → Stop accepting → Drain → Exit
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
