//! Diagram Arc Types
//!
//! This crate defines the data contract for one arc segment of a circular
//! diagram, as consumed by an external renderer. It includes:
//!
//! - **Arcs**: The validated [`DiagramArc`] value type ([`arc`] module)
//! - **Errors**: The [`ValidationError`] raised at construction time
//! - **Records**: The serde interchange form ([`record::ArcRecord`])
//! - **Geometry**: The [`geometry::Point`] used for arc centers
//! - **Colors**: Optional CSS color interpretation ([`color::Color`])
//!
//! Nothing here draws, lays out, or stores arcs. Angle units and sweep
//! direction belong to the renderer; see [`DiagramArc`] for the contract.

pub mod arc;
pub mod color;
pub mod geometry;
pub mod record;

mod error;

pub use arc::{ArcFill, DiagramArc};
pub use error::ValidationError;
