//! # dockspec-common
//!
//! Shared error definitions, configuration model, and wire-level constants
//! used across the dockspec workspace.
//!
//! This crate is the leaf of the dependency graph. It depends on no other
//! internal crate.
#![cfg_attr(test, allow(clippy::expect_used, clippy::panic))]

pub mod config;
pub mod constants;
pub mod error;
