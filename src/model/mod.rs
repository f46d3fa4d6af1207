//! Data structures that flow through the trajectory pipelines.
//!
//! - [`frame`] – Raw dump frames, verbatim XYZ frames, and converted frames.
//! - [`layout`] – Per-frame column resolution for dump atom rows.
//! - [`labels`] – Element labels keyed by atom type and identifier.
//! - [`lattice`] – Box edge lengths derived from dump box bounds.
//! - [`atom`] – Parsed dump atom rows and output XYZ atoms.

pub mod atom;
pub mod frame;
pub mod labels;
pub mod lattice;
pub mod layout;
