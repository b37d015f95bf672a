//! Core domain models for leave planning.
//!
//! This module defines the fundamental data structures used throughout the
//! planning pipeline: leave records with their date spans, and the raw text
//! grid handed over by the ingestion side.

pub mod domain;
pub mod grid;
