//! Data models for invoice records, batch results and configuration.

pub mod batch;
pub mod config;
pub mod invoice;
