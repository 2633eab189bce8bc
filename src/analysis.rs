use crate::config::ModelConfig;
use beamx::{BeamError, ChainResults, ChainSolver};

/// Summary of the results from a beam analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisSummary {
    /// Total length of the chain in metres.
    pub total_length: f64,
    /// Number of elements after discretization.
    pub element_count: usize,
    /// Number of global degrees of freedom.
    pub dof_count: usize,
    /// Number of degrees of freedom that were solved for.
    pub free_dof_count: usize,
    /// Moment with the largest magnitude.
    pub peak_moment: f64,
    /// Shear with the largest magnitude.
    pub peak_shear: f64,
    /// Displacement with the largest magnitude.
    pub peak_displacement: f64,
    /// Full result sequences.
    pub results: ChainResults,
}

/// Build, discretize and solve the configured spans and extract key response metrics.
///
/// The chain is solved with the direct stiffness method described at
/// <https://en.wikipedia.org/wiki/Direct_stiffness_method>.
pub fn run_analysis(config: &ModelConfig) -> Result<AnalysisSummary, BeamError> {
    let solver = ChainSolver::from_segments(config.build_segments()?)?;
    let results = ChainResults::from_elements(solver.results())?;
    log::info!(
        "solved {} elements, {} of {} degrees of freedom free",
        solver.results().len(),
        solver.free_mask().iter().filter(|free| **free).count(),
        solver.dof_count()
    );

    Ok(AnalysisSummary {
        total_length: solver.results().iter().map(|element| element.length()).sum(),
        element_count: solver.results().len(),
        dof_count: solver.dof_count(),
        free_dof_count: solver.free_mask().iter().filter(|free| **free).count(),
        peak_moment: results.peak_moment(),
        peak_shear: results.peak_shear(),
        peak_displacement: results.peak_displacement(),
        results,
    })
}
