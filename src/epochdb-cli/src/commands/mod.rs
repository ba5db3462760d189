//! Command handlers

pub mod document;
pub mod export;
pub mod tools;
