//! Application support modules: configuration, storage location, console
//! messages, table rendering, formatting and export.

pub mod config;
pub mod data_storage;
pub mod export;
pub mod formatter;
pub mod messages;
pub mod view;
