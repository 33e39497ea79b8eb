//! Lineage Core Types and Definitions
//!
//! This crate provides the foundational types shared by every stage of the
//! Lineage diagram pipeline. It includes:
//!
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Nodes**: The graph entity rendered as one box ([`node::Node`])

pub mod color;
pub mod geometry;
pub mod node;
