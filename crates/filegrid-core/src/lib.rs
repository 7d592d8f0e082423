//! FileGrid Core Types and Definitions
//!
//! This crate provides the foundational types for turning a directory listing
//! into a grid of diagram vertices. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Files**: Raw file metadata and normalized descriptors ([`file`] module)

pub mod color;
pub mod file;
pub mod geometry;
