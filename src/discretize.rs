//! Uniform subdivision of a beam element into a finer chain.

use crate::element::{BeamElement, BoundaryFlags, Loads};
use crate::errors::{ArgumentError, BeamError};

/// Split `element` into `count` elements of equal length.
///
/// The first piece keeps the restraints and point loads of the original first
/// node, the last piece keeps those of the original second node, and every piece
/// carries the distributed load. The pieces are unsolved.
///
/// # Errors
///
/// Returns [`BeamError::InvalidArgument`] when `count` is zero.
///
/// # Examples
/// ```
/// use beamx::{discretize, BeamElement, BoundaryFlags, Loads};
///
/// let beam = BeamElement::builder(4.0, 1.0)
///     .boundary(BoundaryFlags::simply_supported())
///     .loads(Loads::distributed(1_000.0))
///     .build()
///     .unwrap();
/// let pieces = discretize(&beam, 8).unwrap();
/// assert_eq!(pieces.len(), 8);
/// assert_eq!(pieces[3].length(), 0.5);
/// ```
pub fn discretize(element: &BeamElement, count: usize) -> Result<Vec<BeamElement>, BeamError> {
    if count == 0 {
        return Err(ArgumentError::ZeroElementCount.into());
    }
    let boundary = element.boundary();
    let loads = element.loads();
    if count == 1 {
        return Ok(vec![element.with_length(element.length(), boundary, loads)?]);
    }

    let length = element.length() / count as f64;
    let distributed = Loads::distributed(loads.linear_load);
    let mut pieces = Vec::with_capacity(count);
    for index in 0..count {
        let (piece_boundary, piece_loads) = if index == 0 {
            (
                BoundaryFlags::new(boundary.translation_1, boundary.rotation_1, false, false),
                Loads {
                    force_1: loads.force_1,
                    moment_1: loads.moment_1,
                    ..distributed
                },
            )
        } else if index == count - 1 {
            (
                BoundaryFlags::new(false, false, boundary.translation_2, boundary.rotation_2),
                Loads {
                    force_2: loads.force_2,
                    moment_2: loads.moment_2,
                    ..distributed
                },
            )
        } else {
            (BoundaryFlags::free(), distributed)
        };
        pieces.push(element.with_length(length, piece_boundary, piece_loads)?);
    }
    log::trace!(
        "discretized element of length {} into {} pieces",
        element.length(),
        count
    );
    Ok(pieces)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::section::Section;

    fn loaded_beam() -> BeamElement {
        BeamElement::builder(3.0, 210.0e9)
            .section(Section::circle(0.1).expect("valid section"))
            .boundary(BoundaryFlags::new(true, true, true, false))
            .loads(Loads {
                force_1: 1.0,
                moment_1: 2.0,
                force_2: 3.0,
                moment_2: 4.0,
                linear_load: 500.0,
            })
            .build()
            .expect("valid element")
    }

    #[test]
    fn lengths_sum_to_the_original() {
        let beam = loaded_beam();
        for count in [1, 2, 3, 7, 10] {
            let pieces = discretize(&beam, count).expect("positive count");
            assert_eq!(pieces.len(), count);
            let total: f64 = pieces.iter().map(BeamElement::length).sum();
            assert_relative_eq!(total, beam.length(), max_relative = 1e-12);
        }
    }

    #[test]
    fn end_conditions_stay_at_the_ends() {
        let beam = loaded_beam();
        let pieces = discretize(&beam, 4).expect("positive count");

        assert_eq!(
            pieces[0].boundary(),
            BoundaryFlags::new(true, true, false, false)
        );
        assert_eq!(
            pieces[0].loads(),
            Loads {
                force_1: 1.0,
                moment_1: 2.0,
                ..Loads::distributed(500.0)
            }
        );

        for piece in &pieces[1..3] {
            assert_eq!(piece.boundary(), BoundaryFlags::free());
            assert_eq!(piece.loads(), Loads::distributed(500.0));
        }

        assert_eq!(
            pieces[3].boundary(),
            BoundaryFlags::new(false, false, true, false)
        );
        assert_eq!(
            pieces[3].loads(),
            Loads {
                force_2: 3.0,
                moment_2: 4.0,
                ..Loads::distributed(500.0)
            }
        );
    }

    #[test]
    fn pieces_share_material_and_section() {
        let beam = loaded_beam();
        for piece in discretize(&beam, 3).expect("positive count") {
            assert_eq!(piece.youngs_modulus(), beam.youngs_modulus());
            assert_eq!(piece.section(), beam.section());
            assert!(piece.solution().is_none());
        }
    }

    #[test]
    fn single_piece_keeps_both_ends() {
        let beam = loaded_beam();
        let pieces = discretize(&beam, 1).expect("positive count");
        assert_eq!(pieces, vec![beam]);
    }

    #[test]
    fn zero_count_is_rejected() {
        let error = discretize(&loaded_beam(), 0).expect_err("zero count rejected");
        assert_eq!(
            error,
            BeamError::InvalidArgument(ArgumentError::ZeroElementCount)
        );
    }
}
