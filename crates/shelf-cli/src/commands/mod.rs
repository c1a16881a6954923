//! Command handlers, one module per command group.

pub mod init;
pub mod items;
pub mod menu;
pub mod misc;
pub mod reports;
