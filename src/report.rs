use crate::analysis::AnalysisSummary;
use std::fmt::Write;

/// Render a textual summary of the beam analysis.
///
/// The peak values can be cross-checked against the beam formulas collected at
/// <https://en.wikipedia.org/wiki/Euler%E2%80%93Bernoulli_beam_theory>.
#[must_use]
pub fn render_summary(summary: &AnalysisSummary) -> String {
    let mut output = String::new();

    writeln!(
        &mut output,
        "Beam chain analysis ({} elements over {:.3} m, {} of {} DOFs free)",
        summary.element_count, summary.total_length, summary.free_dof_count, summary.dof_count
    )
    .expect("writing to string cannot fail");

    writeln!(
        &mut output,
        "Peak response: M = {:+.3e} Nm, V = {:+.3e} N, d = {:+.3e} m",
        summary.peak_moment, summary.peak_shear, summary.peak_displacement
    )
    .expect("writing to string cannot fail");

    // One row per node; the second value of each element is the first of the next.
    writeln!(
        &mut output,
        "{:>10} {:>12} {:>12} {:>12} {:>12}",
        "x [m]", "M [Nm]", "V [N]", "d [m]", "r [rad]"
    )
    .expect("writing to string cannot fail");
    let results = &summary.results;
    for index in 0..results.coordinates.len() {
        if index % 2 == 1 && index + 1 != results.coordinates.len() {
            continue;
        }
        writeln!(
            &mut output,
            "{:>10.3} {:>12.4e} {:>12.4e} {:>12.4e} {:>12.4e}",
            results.coordinates[index],
            results.moments[index],
            results.shears[index],
            results.displacements[index],
            results.rotations[index]
        )
        .expect("writing to string cannot fail");
    }

    output
}
