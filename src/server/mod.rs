//! Bot runtime: configuration, Discord integration, and the liveness endpoint.
//!
//! The process is a thin layer over Serenity. It registers a fixed set of guild
//! slash commands, answers them with static ephemeral replies, and keeps a
//! one-route HTTP server alive so hosting platforms can probe the process.
//!
//! # Architecture
//!
//! - **Model Layer** (`model/`) - Static command descriptors and reply texts
//! - **Service Layer** (`service/`) - Command set validation and guild command registration
//! - **Bot** (`bot/`) - Gateway client setup and event handlers
//! - **Error Layer** (`error/`) - Application error types
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Router** (`router`) - Liveness route
//! - **Startup** (`startup`) - Logging, diagnostics and listener setup
//!
//! # Startup Order
//!
//! 1. **Config** is loaded and validated; missing values abort the process
//! 2. **Command set** is checked so registered names and replies agree
//! 3. **Liveness listener** is bound
//! 4. **Registrar**, **gateway session** and **liveness server** run as separate tasks

pub mod bot;
pub mod config;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
