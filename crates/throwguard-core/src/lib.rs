//! Core types, syntax tree arena, and configuration for throwguard.
//!
//! This crate provides the data the analysis engine consumes from its host:
//! - [`types`]: Handles, text ranges, source languages, and error types
//! - [`tree`]: The arena-backed [`SyntaxTree`](tree::SyntaxTree) with resolved call targets
//! - [`builder`]: [`TreeBuilder`](builder::TreeBuilder) for assembling trees by hand
//! - [`config`]: Configuration loading from `.throwguard/throwguard.json`
//! - [`hash`]: Deterministic violation fingerprints (base62 of xxhash64)
//! - [`lines`]: Byte offset to line/column mapping

pub mod builder;
pub mod config;
pub mod hash;
pub mod lines;
pub mod tree;
pub mod types;
