//! CLI commands

pub mod clean;
pub mod init;
pub mod list;
pub mod new;
pub mod show;
pub mod theme;
