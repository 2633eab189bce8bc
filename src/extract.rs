//! Flat result sequences for reporting and plotting.
//!
//! Every extractor emits two values per element, one for each node, so the
//! sequences line up with [`coordinates`].

use serde::Serialize;

use crate::element::{BeamElement, ElementSolution};
use crate::errors::BeamError;

/// Start and end position of every element along the chain.
///
/// # Errors
///
/// Returns [`BeamError::NotSolved`] when any element has not been solved.
pub fn coordinates(elements: &[BeamElement]) -> Result<Vec<f64>, BeamError> {
    solutions(elements)?;
    let mut position = 0.0;
    let mut values = Vec::with_capacity(2 * elements.len());
    for element in elements {
        values.push(position);
        position += element.length();
        values.push(position);
    }
    Ok(values)
}

/// Bending moment at both ends of every element.
///
/// # Errors
///
/// Returns [`BeamError::NotSolved`] when any element has not been solved.
pub fn moments(elements: &[BeamElement]) -> Result<Vec<f64>, BeamError> {
    collect(elements, |solution| {
        [solution.internal_forces[1], -solution.internal_forces[3]]
    })
}

/// Shear force at both ends of every element.
///
/// # Errors
///
/// Returns [`BeamError::NotSolved`] when any element has not been solved.
pub fn shears(elements: &[BeamElement]) -> Result<Vec<f64>, BeamError> {
    collect(elements, |solution| {
        [solution.internal_forces[0], -solution.internal_forces[2]]
    })
}

/// Transverse displacement at both ends of every element.
///
/// # Errors
///
/// Returns [`BeamError::NotSolved`] when any element has not been solved.
pub fn displacements(elements: &[BeamElement]) -> Result<Vec<f64>, BeamError> {
    collect(elements, |solution| {
        [solution.nodal_solution[0], solution.nodal_solution[2]]
    })
}

/// Rotation at both ends of every element.
///
/// # Errors
///
/// Returns [`BeamError::NotSolved`] when any element has not been solved.
pub fn rotations(elements: &[BeamElement]) -> Result<Vec<f64>, BeamError> {
    collect(elements, |solution| {
        [solution.nodal_solution[1], solution.nodal_solution[3]]
    })
}

/// Every result sequence for a solved chain.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChainResults {
    /// Positions along the chain in metres.
    pub coordinates: Vec<f64>,
    /// Bending moments in newton metres.
    pub moments: Vec<f64>,
    /// Shear forces in newtons.
    pub shears: Vec<f64>,
    /// Transverse displacements in metres.
    pub displacements: Vec<f64>,
    /// Rotations in radians.
    pub rotations: Vec<f64>,
}

impl ChainResults {
    /// Gather all result sequences.
    ///
    /// # Errors
    ///
    /// Returns [`BeamError::NotSolved`] when any element has not been solved.
    ///
    /// # Examples
    /// ```
    /// use beamx::{discretize, BeamElement, BoundaryFlags, ChainResults, ChainSolver, Loads};
    ///
    /// let beam = BeamElement::builder(4.0, 1.0)
    ///     .boundary(BoundaryFlags::simply_supported())
    ///     .loads(Loads::distributed(1_000.0))
    ///     .build()
    ///     .unwrap();
    /// let solver = ChainSolver::new(discretize(&beam, 4).unwrap()).unwrap();
    /// let results = ChainResults::from_elements(solver.results()).unwrap();
    /// assert_eq!(results.coordinates.len(), 8);
    /// assert!((results.peak_moment().abs() - 2_000.0).abs() < 1e-6);
    /// ```
    pub fn from_elements(elements: &[BeamElement]) -> Result<Self, BeamError> {
        Ok(Self {
            coordinates: coordinates(elements)?,
            moments: moments(elements)?,
            shears: shears(elements)?,
            displacements: displacements(elements)?,
            rotations: rotations(elements)?,
        })
    }

    /// Moment with the largest magnitude, sign kept.
    #[must_use]
    pub fn peak_moment(&self) -> f64 {
        peak(&self.moments)
    }

    /// Shear with the largest magnitude, sign kept.
    #[must_use]
    pub fn peak_shear(&self) -> f64 {
        peak(&self.shears)
    }

    /// Displacement with the largest magnitude, sign kept.
    #[must_use]
    pub fn peak_displacement(&self) -> f64 {
        peak(&self.displacements)
    }
}

/// Solutions of every element, or the index of the first unsolved one.
fn solutions(elements: &[BeamElement]) -> Result<Vec<&ElementSolution>, BeamError> {
    elements
        .iter()
        .enumerate()
        .map(|(element, beam)| beam.solution().ok_or(BeamError::NotSolved { element }))
        .collect()
}

/// Apply `pick` to every solution and flatten the node pairs.
fn collect<F>(elements: &[BeamElement], pick: F) -> Result<Vec<f64>, BeamError>
where
    F: Fn(&ElementSolution) -> [f64; 2],
{
    Ok(solutions(elements)?.into_iter().flat_map(pick).collect())
}

/// Value with the largest magnitude; zero for an empty slice.
fn peak(values: &[f64]) -> f64 {
    values
        .iter()
        .copied()
        .fold(0.0, |best, value| if value.abs() > best.abs() { value } else { best })
}
