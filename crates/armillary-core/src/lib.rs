//! Armillary Core Types and Definitions
//!
//! This crate provides the foundational types for rendering hierarchical
//! statechart diagrams. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: SVG primitives for shapes, text runs and arrows ([`draw`] module)
//! - **Semantic**: The laid-out statechart model ([`semantic`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod semantic;
