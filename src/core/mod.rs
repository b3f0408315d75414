//! Core configuration shared by the Lambda binaries.

pub mod config;
