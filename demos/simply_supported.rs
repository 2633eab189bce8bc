use beamx::{coordinates, discretize, moments, BeamElement, BoundaryFlags, ChainSolver, Loads, Section};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A 6 m steel beam, simply supported, under 5 kN/m
    let beam = BeamElement::builder(6.0, 210.0e9)
        .section(Section::i_beam(0.3, 0.15, 0.0107, 0.0071)?)
        .boundary(BoundaryFlags::simply_supported())
        .loads(Loads::distributed(5_000.0))
        .build()?;

    // Refine and solve
    let solver = ChainSolver::new(discretize(&beam, 12)?)?;

    // Print the moment diagram node by node
    let x = coordinates(solver.results())?;
    let m = moments(solver.results())?;
    for (position, moment) in x.iter().zip(m.iter()).step_by(2) {
        println!("x = {position:5.2} m  M = {moment:+10.1} Nm");
    }

    Ok(())
}
