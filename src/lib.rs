//! Heuristic password strength scoring library
//!
//! This library scores a password from simple structural signals (length,
//! character-class variety, trivial sequences, repeated characters) and maps
//! the score to one of five strength ratings with improvement feedback.
//! It is an advisory tool, not an authentication component.
//!
//! # Features
//!
//! - `cli` (default): Enables the interactive terminal checker binary
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{Config, Strength, evaluate};
//! use secrecy::SecretString;
//!
//! let config = Config::default();
//! config.validate().expect("invalid scoring config");
//!
//! let password = SecretString::new("Password123!".to_string().into());
//! let evaluation = evaluate(&password, &config);
//!
//! assert_eq!(evaluation.strength, Strength::VeryStrong);
//! for suggestion in &evaluation.feedback {
//!     println!("- {}", suggestion);
//! }
//! ```

// Internal modules
mod config;
mod evaluator;
mod sections;
mod types;

// Public API
pub use config::{Config, ConfigError, DEFAULT_SPECIAL_CHARS};
pub use evaluator::evaluate;
pub use types::{Evaluation, Strength};
