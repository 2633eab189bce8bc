#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

pub mod discretize;
pub mod element;
pub mod errors;
pub mod extract;
pub mod section;
pub mod solver;

pub use discretize::discretize;
pub use element::{BeamElement, BoundaryFlags, ElementBuilder, ElementSolution, Loads};
pub use errors::{ArgumentError, BeamError, PropertyError};
pub use extract::{coordinates, displacements, moments, rotations, shears, ChainResults};
pub use section::{Section, SectionProperties};
pub use solver::ChainSolver;
