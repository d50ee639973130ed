//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep callers decoupled from store-layout details.
//!
//! # See also
//! - docs/architecture/storage-layout.md

pub mod seed;
