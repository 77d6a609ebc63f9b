//! Core library for appforge
//!
//! This crate implements the **Functional Core** of the appforge application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The appforge project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`appforge_core`** (this crate): Pure transformation functions with zero I/O
//! - **`appforge`**: I/O operations and orchestration (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Deterministic**: Behavior is predictable and reproducible
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! The core crate is organized by domain:
//!
//! - [`project`]: Domain types for generated multi-file projects
//! - [`normalize`]: Recovery of structured projects from raw model output
//! - [`fallback`]: Static skeleton projects served when recovery fails
//! - [`prompt`]: Instruction templates and prompt assembly
//! - [`questions`]: Follow-up question prompts and response parsing
//!
//! Each module contains:
//!
//! - **Domain models**: Structured types representing model responses and outputs
//! - **Transformation functions**: Pure functions that convert raw text to domain models
//! - **Comprehensive tests**: Unit tests using fixture data (no mocking)
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use appforge_core::normalize::normalize_response;
//! use appforge_core::project::Flavor;
//!
//! // Raw model output, possibly wrapped in markdown fences
//! let raw = "```json\n{\"files\":{\"/App.js\":{\"code\":\"export default 1\"}}}\n```";
//!
//! // Recover a structured project (never fails outward)
//! let normalized = normalize_response(raw, Flavor::Web);
//! assert!(normalized.project.files.contains_key("/App.js"));
//! ```
//!
//! The key insight: **text recovery logic should be pure and ignorant of where
//! the model output comes from or where the resulting project goes**.

pub mod fallback;
pub mod normalize;
pub mod project;
pub mod prompt;
pub mod questions;
