use approx::assert_relative_eq;
use beamx::{
    discretize, moments, rotations, shears, ArgumentError, BeamElement, BeamError, BoundaryFlags,
    ChainResults, ChainSolver, Loads, Section,
};

#[derive(Debug, Clone, Copy)]
struct BeamProperties {
    length: f64,
    youngs_modulus: f64,
    linear_load: f64,
}

impl Default for BeamProperties {
    fn default() -> Self {
        Self {
            length: 4.0,
            youngs_modulus: 1.0,
            linear_load: 1_000.0,
        }
    }
}

fn build_beam(properties: BeamProperties, boundary: BoundaryFlags, loads: Loads) -> BeamElement {
    BeamElement::builder(properties.length, properties.youngs_modulus)
        .boundary(boundary)
        .loads(loads)
        .build()
        .expect("valid beam element")
}

fn peak_magnitude(values: &[f64]) -> f64 {
    values.iter().fold(0.0_f64, |acc, value| acc.max(value.abs()))
}

#[test]
fn fixed_fixed_beam_carries_fixed_end_forces() {
    let properties = BeamProperties::default();
    let beam = build_beam(
        properties,
        BoundaryFlags::fixed(),
        Loads::distributed(properties.linear_load),
    );
    let solver = ChainSolver::new(vec![beam]).expect("restrained beam solves");
    let forces = solver.results()[0]
        .solution()
        .expect("solution available")
        .internal_forces;

    let w = properties.linear_load;
    let l = properties.length;
    assert_relative_eq!(forces[0], -w * l / 2.0, max_relative = 1e-12);
    assert_relative_eq!(forces[1], -w * l * l / 12.0, max_relative = 1e-12);
    assert_relative_eq!(forces[2], -w * l / 2.0, max_relative = 1e-12);
    assert_relative_eq!(forces[3], w * l * l / 12.0, max_relative = 1e-12);
}

#[test]
fn simply_supported_single_element_matches_closed_form_rotations() {
    let properties = BeamProperties::default();
    let beam = build_beam(
        properties,
        BoundaryFlags::simply_supported(),
        Loads::distributed(properties.linear_load),
    );
    let solver = ChainSolver::new(vec![beam]).expect("stable beam");
    let rotation = rotations(solver.results()).expect("solved");
    let expected = properties.linear_load * properties.length.powi(3)
        / (24.0 * properties.youngs_modulus);

    assert_relative_eq!(rotation[0], expected, max_relative = 1e-10);
    assert_relative_eq!(rotation[1], -expected, max_relative = 1e-10);

    let moment = moments(solver.results()).expect("solved");
    assert!(moment[0].abs() < 1e-9);
    assert!(moment[1].abs() < 1e-9);
}

#[test]
fn refined_simply_supported_beam_reaches_midspan_moment() {
    let properties = BeamProperties::default();
    let beam = build_beam(
        properties,
        BoundaryFlags::simply_supported(),
        Loads::distributed(properties.linear_load),
    );
    let expected = properties.linear_load * properties.length.powi(2) / 8.0;

    for count in [2, 4, 10, 40] {
        let solver = ChainSolver::new(discretize(&beam, count).expect("positive count"))
            .expect("stable chain");
        let peak = peak_magnitude(&moments(solver.results()).expect("solved"));
        assert_relative_eq!(peak, expected, max_relative = 0.02);
    }
}

#[test]
fn cantilever_tip_load_matches_closed_form() {
    let properties = BeamProperties::default();
    let section = Section::rectangle(0.3, 0.2).expect("valid section");
    let inertia = section.properties().moment_of_inertia_z;
    let tip_load = 750.0;
    let beam = BeamElement::builder(properties.length, 200.0e9)
        .section(section)
        .boundary(BoundaryFlags::cantilever())
        .loads(Loads {
            force_2: tip_load,
            ..Loads::none()
        })
        .build()
        .expect("valid beam element");

    let solver = ChainSolver::new(discretize(&beam, 5).expect("positive count"))
        .expect("stable chain");
    let results = ChainResults::from_elements(solver.results()).expect("solved");

    let deflection = tip_load * properties.length.powi(3) / (3.0 * 200.0e9 * inertia);
    assert_relative_eq!(results.peak_displacement(), deflection, max_relative = 1e-9);
    assert_relative_eq!(
        results.peak_moment().abs(),
        tip_load * properties.length,
        max_relative = 1e-9
    );
    // The tip load is part of the last element's load vector, so the recovered
    // end force at the free tip is zero and every other node carries the full shear.
    let shear = shears(solver.results()).expect("solved");
    let (tip, span) = shear.split_last().expect("non-empty chain");
    for value in span {
        assert_relative_eq!(value.abs(), tip_load, max_relative = 1e-9);
    }
    assert!(tip.abs() < 1e-6 * tip_load);
}

#[test]
fn two_span_continuous_beam_has_wl2_over_8_at_the_middle_support() {
    let properties = BeamProperties::default();
    let w = properties.linear_load;
    let left = build_beam(
        properties,
        BoundaryFlags::simply_supported(),
        Loads::distributed(w),
    );
    let right = build_beam(
        properties,
        BoundaryFlags::new(false, false, true, false),
        Loads::distributed(w),
    );
    let segments = vec![
        discretize(&left, 8).expect("positive count"),
        discretize(&right, 8).expect("positive count"),
    ];
    let solver = ChainSolver::from_segments(segments).expect("stable chain");
    assert_eq!(solver.results().len(), 16);
    assert_eq!(solver.dof_count(), 34);

    let moment = moments(solver.results()).expect("solved");
    // Second value of element 7 sits on the middle support.
    let support_moment = moment[15];
    assert_relative_eq!(
        support_moment.abs(),
        w * properties.length.powi(2) / 8.0,
        max_relative = 1e-9
    );

    // End supports carry 3wL/8 and the middle support 10wL/8.
    let reactions = solver.reactions();
    assert_relative_eq!(reactions[0].abs(), 3.0 * w * properties.length / 8.0, max_relative = 1e-9);
    assert_relative_eq!(reactions[16].abs(), 10.0 * w * properties.length / 8.0, max_relative = 1e-9);
    assert_relative_eq!(reactions[32].abs(), 3.0 * w * properties.length / 8.0, max_relative = 1e-9);
}

#[test]
fn discretized_lengths_recover_the_span() {
    let properties = BeamProperties {
        length: 7.3,
        ..BeamProperties::default()
    };
    let beam = build_beam(
        properties,
        BoundaryFlags::simply_supported(),
        Loads::distributed(properties.linear_load),
    );
    let pieces = discretize(&beam, 13).expect("positive count");
    let total: f64 = pieces.iter().map(BeamElement::length).sum();
    assert_relative_eq!(total, properties.length, max_relative = 1e-12);
}

#[test]
fn results_do_not_change_between_reads() {
    let properties = BeamProperties::default();
    let beam = build_beam(
        properties,
        BoundaryFlags::simply_supported(),
        Loads::distributed(properties.linear_load),
    );
    let solver = ChainSolver::new(discretize(&beam, 6).expect("positive count"))
        .expect("stable chain");
    let first = moments(solver.results()).expect("solved");
    let second = moments(solver.results()).expect("solved");
    assert_eq!(first, second);
    assert_eq!(solver.results(), solver.results());
}

#[test]
fn invalid_chains_are_rejected() {
    let empty = ChainSolver::new(Vec::new()).expect_err("empty chain rejected");
    assert_eq!(empty, BeamError::InvalidArgument(ArgumentError::EmptyChain));

    let properties = BeamProperties::default();
    let floating = build_beam(
        properties,
        BoundaryFlags::free(),
        Loads::distributed(properties.linear_load),
    );
    let singular = ChainSolver::new(vec![floating.clone()]).expect_err("mechanism rejected");
    assert_eq!(singular, BeamError::SingularSystem);

    let refined = discretize(&floating, 5).expect("positive count");
    let singular = ChainSolver::new(refined).expect_err("mechanism rejected");
    assert_eq!(singular, BeamError::SingularSystem);

    let zero = discretize(&floating, 0).expect_err("zero count rejected");
    assert_eq!(
        zero,
        BeamError::InvalidArgument(ArgumentError::ZeroElementCount)
    );
}

#[test]
fn unsolved_elements_cannot_be_extracted() {
    let properties = BeamProperties::default();
    let beam = build_beam(
        properties,
        BoundaryFlags::simply_supported(),
        Loads::distributed(properties.linear_load),
    );
    let pieces = discretize(&beam, 3).expect("positive count");
    assert_eq!(
        moments(&pieces),
        Err(BeamError::NotSolved { element: 0 })
    );
}
