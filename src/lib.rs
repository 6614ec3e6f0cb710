//! Core library for the `statmon-analyze` CLI.
//!
//! This crate provides the building blocks used by the binary: CLI argument
//! types, configuration parsing, results and measurement-config readers, the
//! per-series analysis pipeline, and monitor sampling statistics. The primary
//! user-facing interface is the `statmon-analyze` command-line application;
//! library APIs may evolve as the CLI grows.
pub mod analysis;
pub mod args;
pub mod config;
pub mod error;
pub mod input;
pub mod metrics;
pub mod monitor;
