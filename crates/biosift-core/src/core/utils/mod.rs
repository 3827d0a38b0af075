//! # Utilities Module
//!
//! Shared helpers for the core layer.
//!
//! - **Identifier classification** ([`identifiers`]) - Residue and atom name lookups backed by compile-time tables

pub mod identifiers;
