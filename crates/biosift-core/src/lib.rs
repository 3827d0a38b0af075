//! # BioSift Core Library
//!
//! A library for parsing, summarizing, and filtering text-based biological file
//! formats (FASTA, FASTQ, mmCIF).
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (sequence records,
//!   the `Structure` hierarchy), format parsers and serializers, and shared utilities.
//!
//! - **[`analysis`]: The Logic Core.** This layer computes aggregate statistics over
//!   parsed records, applies threshold filters, and carries the run configuration
//!   and progress-reporting machinery used by long-running operations.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing layer.
//!   It ties `analysis` and `core` together to execute complete operations, such as
//!   filtering a FASTQ file by mean quality. It provides a simple and powerful entry
//!   point for end-users of the library.

pub mod analysis;
pub mod core;
pub mod workflows;
