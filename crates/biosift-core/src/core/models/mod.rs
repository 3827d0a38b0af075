//! # Core Models Module
//!
//! This module contains the fundamental data structures used to represent parsed
//! biological records, providing the foundation for all parsing and analysis operations.
//!
//! ## Overview
//!
//! The models module defines the core abstractions for sequence records and macromolecular
//! structures, including atoms, residues, chains, and models. These types are designed to:
//!
//! - **Represent records faithfully** - Complete description of parsed file content
//! - **Stay immutable after parsing** - Analysis selects and aggregates, never mutates
//! - **Enable efficient traversal** - Arena storage with stable identifiers
//! - **Maintain type safety** - Strong typing for record integrity
//!
//! ## Key Components
//!
//! - [`record`] - Flat sequence records parsed from FASTA and FASTQ input
//! - [`atom`] - Individual atom representation with coordinates and element
//! - [`residue`] - Residue structure and standard/heteroatom classification
//! - [`chain`] - Chain organization within a model
//! - [`structure`] - Complete structure hierarchy with all components
//! - [`builder`] - Incremental construction of a structure during parsing
//! - [`ids`] - Unique identifier types for atoms, residues, chains, and models
//!
//! ## Usage
//!
//! The models form the backbone of record representation in the library. Parsers
//! construct them; the analysis layer reads them.
//!
//! ```ignore
//! use biosift::core::models::builder::StructureBuilder;
//!
//! let mut builder = StructureBuilder::new("1abc");
//! builder.start_model(1).start_chain("A");
//! builder.start_residue(1, None, "ALA", ResidueClass::Standard);
//! builder.add_atom(1, "CA", Point3::new(0.0, 0.0, 0.0), "C");
//! let structure = builder.build();
//! ```

pub mod atom;
pub mod builder;
pub mod chain;
pub mod ids;
pub mod record;
pub mod residue;
pub mod structure;
