//! Reference diagram renderers.
//!
//! # Pipeline Position
//!
//! ```text
//! Directory source
//!     ↓ prepare
//! Descriptors + Placements
//!     ↓ apply (EditScope)
//! DiagramRenderer (this module provides one)
//!     ↓ export
//! Output File
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] — an in-memory canvas rendered to SVG via [`svg::SvgCanvas`]

/// SVG canvas backend.
pub mod svg;
