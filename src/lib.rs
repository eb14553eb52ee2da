//! budgetscope - Terminal personal budget analyzer
//!
//! This library provides the core functionality for budgetscope: a small
//! personal-finance tool that analyzes monthly spending, produces a toy
//! savings prediction, and simulates investment growth. It offers both a
//! CLI and an interactive TUI over the same storage-backed core.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, expenses, risk tiers)
//! - `storage`: Flat-file storage layer behind the `BudgetStore` trait
//! - `services`: Analysis, prediction, and simulation logic
//! - `display`: Terminal formatting helpers for CLI output
//! - `cli`: Command handlers
//! - `tui`: Interactive dashboard

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{BudgetError, BudgetResult};
