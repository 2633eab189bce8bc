//! Assembly and direct solution of a chain of beam elements.

use nalgebra::{DMatrix, DVector, Vector4};

use crate::element::BeamElement;
use crate::errors::{ArgumentError, BeamError};

/// Degrees of freedom carried by each node.
const DOFS_PER_NODE: usize = 2;

/// Degrees of freedom carried by each element.
const DOFS_PER_ELEMENT: usize = 4;

/// Smallest accepted ratio between the smallest and largest LU pivot magnitude.
const SINGULAR_PIVOT_RATIO: f64 = 1.0e-12;

/// A solved chain of beam elements.
///
/// Element `i` shares its second node with the first node of element `i + 1`, so
/// its local degree of freedom `j` maps to global degree of freedom `2i + j`.
/// The whole analysis runs when the solver is constructed; afterwards it only
/// exposes results.
#[derive(Clone, Debug)]
pub struct ChainSolver {
    /// Flattened elements with results populated.
    elements: Vec<BeamElement>,
    /// Assembled global stiffness matrix.
    stiffness: DMatrix<f64>,
    /// Assembled global load vector.
    loads: DVector<f64>,
    /// Per global degree of freedom, `true` when restrained.
    boundary: Vec<bool>,
    /// Per global degree of freedom, `true` when solved for.
    free_mask: Vec<bool>,
    /// Full solution vector, zero at restrained degrees of freedom.
    solution: DVector<f64>,
}

impl ChainSolver {
    /// Assemble and solve a chain of elements.
    ///
    /// # Errors
    ///
    /// Returns [`BeamError::InvalidArgument`] for an empty chain and
    /// [`BeamError::SingularSystem`] when the supports do not prevent rigid-body
    /// motion.
    ///
    /// # Examples
    /// ```
    /// use beamx::{BeamElement, BoundaryFlags, ChainSolver, Loads};
    ///
    /// let beam = BeamElement::builder(4.0, 1.0)
    ///     .boundary(BoundaryFlags::fixed())
    ///     .loads(Loads::distributed(1_000.0))
    ///     .build()
    ///     .unwrap();
    /// let solver = ChainSolver::new(vec![beam]).unwrap();
    /// let forces = solver.results()[0].solution().unwrap().internal_forces;
    /// assert!((forces[0] + 2_000.0).abs() < 1e-9);
    /// ```
    pub fn new(elements: Vec<BeamElement>) -> Result<Self, BeamError> {
        if elements.is_empty() {
            return Err(ArgumentError::EmptyChain.into());
        }
        let dof = dof_count(elements.len());
        log::debug!(
            "assembling chain of {} elements with {} degrees of freedom",
            elements.len(),
            dof
        );

        let stiffness = build_stiffness_matrix(&elements, dof);
        let boundary = build_boundary_vector(&elements, dof);
        let loads = build_load_vector(&elements, dof);
        let free_dofs = collect_free_dofs(&boundary);
        let free_mask = boundary.iter().map(|fixed| !fixed).collect();
        log::debug!("{} free degrees of freedom", free_dofs.len());

        let solution = solve_displacements(&stiffness, &loads, &free_dofs)?;
        let mut solver = Self {
            elements,
            stiffness,
            loads,
            boundary,
            free_mask,
            solution,
        };
        solver.update_elements();
        Ok(solver)
    }

    /// Flatten nested sequences of elements into one chain and solve it.
    ///
    /// This is convenient when each span of a structure has been discretized
    /// separately.
    ///
    /// # Errors
    ///
    /// See [`ChainSolver::new`].
    pub fn from_segments<I, S>(segments: I) -> Result<Self, BeamError>
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = BeamElement>,
    {
        Self::new(segments.into_iter().flatten().collect())
    }

    /// Solved elements in chain order.
    #[must_use]
    pub fn results(&self) -> &[BeamElement] {
        &self.elements
    }

    /// Consume the solver and return the solved elements.
    #[must_use]
    pub fn into_results(self) -> Vec<BeamElement> {
        self.elements
    }

    /// Number of global degrees of freedom.
    #[must_use]
    pub fn dof_count(&self) -> usize {
        self.solution.len()
    }

    /// Assembled global stiffness matrix.
    #[must_use]
    pub fn global_stiffness(&self) -> &DMatrix<f64> {
        &self.stiffness
    }

    /// Assembled global load vector.
    #[must_use]
    pub fn global_loads(&self) -> &DVector<f64> {
        &self.loads
    }

    /// Restraint state of each global degree of freedom.
    #[must_use]
    pub fn global_boundary(&self) -> &[bool] {
        &self.boundary
    }

    /// `true` for each global degree of freedom that was solved for.
    #[must_use]
    pub fn free_mask(&self) -> &[bool] {
        &self.free_mask
    }

    /// Full solution vector; restrained entries are zero.
    #[must_use]
    pub fn global_solution(&self) -> &DVector<f64> {
        &self.solution
    }

    /// Nodal forces required to hold the solved shape, `K·u − F`.
    ///
    /// At restrained degrees of freedom these are the support reactions; at free
    /// degrees of freedom they vanish up to round-off.
    #[must_use]
    pub fn reactions(&self) -> DVector<f64> {
        &self.stiffness * &self.solution - &self.loads
    }

    /// Push each element's slice of the global solution back to the element.
    fn update_elements(&mut self) {
        for (index, element) in self.elements.iter_mut().enumerate() {
            let base = index * DOFS_PER_NODE;
            let nodal: Vector4<f64> = self
                .solution
                .fixed_rows::<DOFS_PER_ELEMENT>(base)
                .into_owned();
            element.recover_internal_forces(nodal);
        }
    }
}

/// Global degree-of-freedom count for a chain of `elements` elements.
fn dof_count(elements: usize) -> usize {
    DOFS_PER_ELEMENT + DOFS_PER_NODE * (elements - 1)
}

/// Sum each element's local stiffness into the global matrix.
fn build_stiffness_matrix(elements: &[BeamElement], dof: usize) -> DMatrix<f64> {
    let mut matrix = DMatrix::zeros(dof, dof);
    for (index, element) in elements.iter().enumerate() {
        let base = index * DOFS_PER_NODE;
        let local = element.stiffness();
        for row_local in 0..DOFS_PER_ELEMENT {
            for col_local in 0..DOFS_PER_ELEMENT {
                matrix[(base + row_local, base + col_local)] += local[(row_local, col_local)];
            }
        }
    }
    matrix
}

/// Mark every global degree of freedom restrained by any element.
fn build_boundary_vector(elements: &[BeamElement], dof: usize) -> Vec<bool> {
    let mut counts = vec![0_u8; dof];
    for (index, element) in elements.iter().enumerate() {
        let base = index * DOFS_PER_NODE;
        for (offset, fixed) in element.boundary().to_array().into_iter().enumerate() {
            counts[base + offset] += u8::from(fixed);
        }
    }
    counts.into_iter().map(|count| count != 0).collect()
}

/// Sum each element's equivalent nodal loads into the global vector.
fn build_load_vector(elements: &[BeamElement], dof: usize) -> DVector<f64> {
    let mut load = DVector::zeros(dof);
    for (index, element) in elements.iter().enumerate() {
        let base = index * DOFS_PER_NODE;
        for (offset, value) in element.load_vector().iter().enumerate() {
            load[base + offset] += value;
        }
    }
    load
}

/// Indices of the unrestrained degrees of freedom in ascending order.
fn collect_free_dofs(boundary: &[bool]) -> Vec<usize> {
    boundary
        .iter()
        .enumerate()
        .filter_map(|(index, fixed)| (!fixed).then_some(index))
        .collect()
}

/// Solve the reduced system and scatter the result into a full-length vector.
fn solve_displacements(
    stiffness: &DMatrix<f64>,
    load: &DVector<f64>,
    free_dofs: &[usize],
) -> Result<DVector<f64>, BeamError> {
    let mut displacements = DVector::zeros(load.len());
    if free_dofs.is_empty() {
        return Ok(displacements);
    }
    let k_ff = stiffness.select_rows(free_dofs).select_columns(free_dofs);
    let f_f = load.select_rows(free_dofs);

    let lu = k_ff.lu();
    let pivots = lu.u().diagonal();
    if pivots.amin() <= SINGULAR_PIVOT_RATIO * pivots.amax() {
        log::warn!(
            "singular reduced stiffness matrix (pivots between {:e} and {:e})",
            pivots.amin(),
            pivots.amax()
        );
        return Err(BeamError::SingularSystem);
    }
    let solution = lu.solve(&f_f).ok_or(BeamError::SingularSystem)?;
    if solution.iter().any(|value| !value.is_finite()) {
        return Err(BeamError::SingularSystem);
    }

    for (&dof, value) in free_dofs.iter().zip(solution.iter()) {
        displacements[dof] = *value;
    }
    Ok(displacements)
}
