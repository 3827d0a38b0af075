//! Provides input/output functionality for biological file formats.
//!
//! This module contains implementations for reading and writing the text
//! formats the engine consumes: FASTA and FASTQ sequence files and mmCIF
//! structure files. Sequence formats share a unified trait-based interface
//! for parsing and format-faithful re-emission; the structure parser
//! produces an immutable [`Structure`](crate::core::models::structure::Structure).

pub mod fasta;
pub mod fastq;
pub mod mmcif;
pub mod traits;
