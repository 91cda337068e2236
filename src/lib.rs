//! Popcorntv - TV markup recipes for media browsing
//!
//! This library crate exposes the recipes and configuration used by the CLI.

pub mod config;
pub mod recipes;
