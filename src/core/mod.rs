//! Configuration and request/response models shared by every handler.

pub mod config;
pub mod models;
