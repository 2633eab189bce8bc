use beamx::{discretize, BeamElement, BoundaryFlags, ChainResults, ChainSolver, Loads, Section};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let section = Section::hollow_rectangle(0.2, 0.1, 0.008)?;

    // Two spans sharing the middle support, the right one clamped at its far end
    let left = BeamElement::builder(4.0, 210.0e9)
        .section(section)
        .boundary(BoundaryFlags::simply_supported())
        .loads(Loads::distributed(2_000.0))
        .build()?;
    let right = BeamElement::builder(3.0, 210.0e9)
        .section(section)
        .boundary(BoundaryFlags::new(false, false, true, true))
        .loads(Loads::distributed(2_000.0))
        .build()?;

    let solver = ChainSolver::from_segments([discretize(&left, 8)?, discretize(&right, 6)?])?;
    let results = ChainResults::from_elements(solver.results())?;

    println!("peak moment       {:+.1} Nm", results.peak_moment());
    println!("peak shear        {:+.1} N", results.peak_shear());
    println!("peak displacement {:+.3e} m", results.peak_displacement());

    Ok(())
}
