//! Guildbot Test Utils
//!
//! Provides shared testing utilities for the guildbot binary: factories for
//! Serenity model objects and fixed configuration fixtures.
//!
//! # Overview
//!
//! - **serenity**: Factories that build Serenity models by deserializing JSON
//! - **fixture**: Environment maps with known-good configuration values
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{fixture::config::valid_env, serenity::create_test_command_data};
//!
//! #[tokio::test]
//! async fn replies_to_help() {
//!     let env = valid_env();
//!     let data = create_test_command_data("help");
//!     // Dispatch the command...
//! }
//! ```

pub mod fixture;
pub mod serenity;
