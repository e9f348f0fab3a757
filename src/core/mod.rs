//! # Core Support
//!
//! Everything the card pipeline needs that is not card layout itself.
//!
//! ```text
//!     ┌────────────┐   CardLayout   ┌────────────┐   String   ┌────────┐
//!     │   config   │ ─────────────► │    card    │ ─────────► │ stdout │
//!     │ (toml/env) │                │ (pipeline) │            │ (main) │
//!     └────────────┘                └─────┬──────┘            └────────┘
//!                                         │ CardError
//!                                         ▼
//!                                   ┌────────────┐
//!                                   │   error    │
//!                                   └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`config`]: config file, env vars and CLI overrides resolved into a `CardLayout`
//! - [`error`]: the `CardError` taxonomy

pub mod config;
pub mod error;
