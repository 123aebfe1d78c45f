#![deny(missing_docs)]

//! A Kuhn-Munkres (Hungarian-algorithm) solver for the "K houses per well"
//! geometric assignment problem: given N wells and N·K houses in the
//! plane, assign exactly K houses to each well so as to minimise the
//! total well→house distance.
//!
//! The crate is organised leaf-first: [`point`] and [`matrix`] are plain
//! data types; [`cost_model`] builds the square benefit matrix the solver
//! needs; [`solver`] is the Kuhn-Munkres engine; [`result`] projects the
//! solver's output back onto the original wells; [`io`] implements the
//! on-disk file formats and synthetic-instance generation used by the
//! `hungarian-wells` command-line tool.

pub mod cost_model;
pub mod error;
pub mod io;
pub mod matrix;
pub mod point;
pub mod result;
pub mod solver;

pub use error::{Error, Result};
pub use point::Point;
