//! Static domain models.
//!
//! The bot stores nothing at runtime. Its only domain data is the fixed list of
//! slash commands and the replies sent for them, defined here as constants.

pub mod command;
