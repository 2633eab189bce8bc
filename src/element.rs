//! Euler-Bernoulli beam elements with two nodes and two degrees of freedom per node.

use nalgebra::{Matrix4, Vector4};
use serde::{Deserialize, Serialize};

use crate::errors::{BeamError, PropertyError};
use crate::section::SectionProperties;

/// Restraint state of the four element degrees of freedom.
///
/// A value of `true` fixes the degree of freedom at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[bool; 4]", into = "[bool; 4]")]
pub struct BoundaryFlags {
    /// Transverse translation at the first node.
    pub translation_1: bool,
    /// Rotation at the first node.
    pub rotation_1: bool,
    /// Transverse translation at the second node.
    pub translation_2: bool,
    /// Rotation at the second node.
    pub rotation_2: bool,
}

impl BoundaryFlags {
    /// Create flags in degree-of-freedom order.
    #[must_use]
    pub const fn new(
        translation_1: bool,
        rotation_1: bool,
        translation_2: bool,
        rotation_2: bool,
    ) -> Self {
        Self {
            translation_1,
            rotation_1,
            translation_2,
            rotation_2,
        }
    }

    /// No restraint at either node.
    #[must_use]
    pub const fn free() -> Self {
        Self::new(false, false, false, false)
    }

    /// Both translations fixed, both rotations free.
    #[must_use]
    pub const fn simply_supported() -> Self {
        Self::new(true, false, true, false)
    }

    /// Every degree of freedom fixed.
    #[must_use]
    pub const fn fixed() -> Self {
        Self::new(true, true, true, true)
    }

    /// First node clamped, second node free.
    #[must_use]
    pub const fn cantilever() -> Self {
        Self::new(true, true, false, false)
    }

    /// Flags in degree-of-freedom order.
    #[must_use]
    pub const fn to_array(self) -> [bool; 4] {
        [
            self.translation_1,
            self.rotation_1,
            self.translation_2,
            self.rotation_2,
        ]
    }
}

impl From<[bool; 4]> for BoundaryFlags {
    fn from(value: [bool; 4]) -> Self {
        Self::new(value[0], value[1], value[2], value[3])
    }
}

impl From<BoundaryFlags> for [bool; 4] {
    fn from(value: BoundaryFlags) -> Self {
        value.to_array()
    }
}

/// Loads applied to an element.
///
/// Forces act in the transverse direction at the nodes, moments act about the
/// bending axis, and `linear_load` is uniformly distributed over the length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Loads {
    /// Point force at the first node in newtons.
    pub force_1: f64,
    /// Point moment at the first node in newton metres.
    pub moment_1: f64,
    /// Point force at the second node in newtons.
    pub force_2: f64,
    /// Point moment at the second node in newton metres.
    pub moment_2: f64,
    /// Uniformly distributed load in newtons per metre.
    pub linear_load: f64,
}

impl Loads {
    /// An unloaded element.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            force_1: 0.0,
            moment_1: 0.0,
            force_2: 0.0,
            moment_2: 0.0,
            linear_load: 0.0,
        }
    }

    /// A uniformly distributed load with no point loads.
    ///
    /// # Examples
    /// ```
    /// use beamx::Loads;
    ///
    /// let loads = Loads {
    ///     force_2: -500.0,
    ///     ..Loads::distributed(1_000.0)
    /// };
    /// assert_eq!(loads.linear_load, 1_000.0);
    /// assert_eq!(loads.force_1, 0.0);
    /// ```
    #[must_use]
    pub const fn distributed(linear_load: f64) -> Self {
        Self {
            linear_load,
            ..Self::none()
        }
    }

    /// Reject components that are not finite numbers.
    fn validate(&self) -> Result<(), BeamError> {
        let components = [
            ("force_1", self.force_1),
            ("moment_1", self.moment_1),
            ("force_2", self.force_2),
            ("moment_2", self.moment_2),
            ("linear_load", self.linear_load),
        ];
        for (component, value) in components {
            if !value.is_finite() {
                return Err(BeamError::InvalidLoad { component, value });
            }
        }
        Ok(())
    }
}

/// Results written to an element by the chain solver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementSolution {
    /// Translation and rotation at both nodes, in degree-of-freedom order.
    pub nodal_solution: Vector4<f64>,
    /// Shear and moment at both nodes, in degree-of-freedom order, as element end forces.
    pub internal_forces: Vector4<f64>,
}

/// A two-node beam element.
///
/// The local degrees of freedom are ordered `[translation_1, rotation_1,
/// translation_2, rotation_2]`.
#[derive(Clone, Debug, PartialEq)]
pub struct BeamElement {
    /// Length in metres.
    length: f64,
    /// Young's modulus in pascals.
    youngs_modulus: f64,
    /// Cross-section properties.
    section: SectionProperties,
    /// Restrained degrees of freedom.
    boundary: BoundaryFlags,
    /// Loads as supplied, before conversion to nodal equivalents.
    loads: Loads,
    /// Local stiffness matrix.
    stiffness: Matrix4<f64>,
    /// Fixed-end equivalent nodal loads.
    load_vector: Vector4<f64>,
    /// Solver output, present once the element has been solved in a chain.
    solution: Option<ElementSolution>,
}

impl BeamElement {
    /// Start building an element with the given length and Young's modulus.
    ///
    /// # Examples
    /// ```
    /// use beamx::{BeamElement, BoundaryFlags, Loads};
    ///
    /// let element = BeamElement::builder(4.0, 1.0)
    ///     .boundary(BoundaryFlags::simply_supported())
    ///     .loads(Loads::distributed(1_000.0))
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(element.length(), 4.0);
    /// assert!(element.solution().is_none());
    /// ```
    #[must_use]
    pub fn builder(length: f64, youngs_modulus: f64) -> ElementBuilder {
        ElementBuilder {
            length,
            youngs_modulus,
            section: None,
            boundary: None,
            loads: None,
        }
    }

    /// Length in metres.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Young's modulus in pascals.
    #[must_use]
    pub fn youngs_modulus(&self) -> f64 {
        self.youngs_modulus
    }

    /// Cross-section properties.
    #[must_use]
    pub fn section(&self) -> SectionProperties {
        self.section
    }

    /// Restrained degrees of freedom.
    #[must_use]
    pub fn boundary(&self) -> BoundaryFlags {
        self.boundary
    }

    /// Applied loads.
    #[must_use]
    pub fn loads(&self) -> Loads {
        self.loads
    }

    /// Local stiffness matrix.
    #[must_use]
    pub fn stiffness(&self) -> &Matrix4<f64> {
        &self.stiffness
    }

    /// Fixed-end equivalent nodal load vector.
    #[must_use]
    pub fn load_vector(&self) -> &Vector4<f64> {
        &self.load_vector
    }

    /// Solver output, or `None` before the element has been solved.
    #[must_use]
    pub fn solution(&self) -> Option<&ElementSolution> {
        self.solution.as_ref()
    }

    /// Replace the boundary flags.
    ///
    /// Any previous solution is discarded.
    pub fn set_boundary(&mut self, boundary: BoundaryFlags) {
        self.boundary = boundary;
        self.solution = None;
    }

    /// Replace the loads and re-derive the nodal load vector.
    ///
    /// The stiffness matrix is unaffected. Any previous solution is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`BeamError::InvalidLoad`] when a component is not finite; the
    /// element is left unchanged in that case.
    pub fn set_loads(&mut self, loads: Loads) -> Result<(), BeamError> {
        loads.validate()?;
        self.loads = loads;
        self.load_vector = equivalent_load_vector(self.length, &loads);
        self.solution = None;
        Ok(())
    }

    /// Recover end forces from the element's slice of the global solution.
    pub(crate) fn recover_internal_forces(&mut self, nodal_solution: Vector4<f64>) {
        let internal_forces = self.stiffness * nodal_solution - self.load_vector;
        self.solution = Some(ElementSolution {
            nodal_solution,
            internal_forces,
        });
    }

    /// Copy the element geometry and material with new boundary flags and loads.
    pub(crate) fn with_length(
        &self,
        length: f64,
        boundary: BoundaryFlags,
        loads: Loads,
    ) -> Result<Self, BeamError> {
        BeamElement::builder(length, self.youngs_modulus)
            .section(self.section)
            .boundary(boundary)
            .loads(loads)
            .build()
    }
}

/// Builder for [`BeamElement`].
///
/// Boundary flags and loads have no defaults and must be given explicitly.
#[derive(Clone, Debug)]
#[must_use]
pub struct ElementBuilder {
    /// Length in metres.
    length: f64,
    /// Young's modulus in pascals.
    youngs_modulus: f64,
    /// Optional section; unit properties when absent.
    section: Option<SectionProperties>,
    /// Boundary flags, required.
    boundary: Option<BoundaryFlags>,
    /// Loads, required.
    loads: Option<Loads>,
}

impl ElementBuilder {
    /// Use the given cross-section. Accepts a [`Section`](crate::Section) or raw properties.
    pub fn section(mut self, section: impl Into<SectionProperties>) -> Self {
        self.section = Some(section.into());
        self
    }

    /// Set the boundary flags.
    pub fn boundary(mut self, boundary: impl Into<BoundaryFlags>) -> Self {
        self.boundary = Some(boundary.into());
        self
    }

    /// Set the loads.
    pub fn loads(mut self, loads: Loads) -> Self {
        self.loads = Some(loads);
        self
    }

    /// Validate the configuration and derive the stiffness matrix and load vector.
    ///
    /// # Errors
    ///
    /// Returns [`BeamError::MissingProperty`] when the length, modulus or
    /// weak-axis inertia is not strictly positive, or when the boundary flags or
    /// loads were never set, and [`BeamError::InvalidLoad`] when a load component
    /// is not finite.
    pub fn build(self) -> Result<BeamElement, BeamError> {
        let section = self.section.unwrap_or_default();
        if !(self.length.is_finite() && self.length > 0.0) {
            return Err(PropertyError::NonPositiveLength {
                length: self.length,
            }
            .into());
        }
        if !(self.youngs_modulus.is_finite() && self.youngs_modulus > 0.0) {
            return Err(PropertyError::NonPositiveModulus {
                youngs_modulus: self.youngs_modulus,
            }
            .into());
        }
        let moment_of_inertia = section.weak_moment_of_inertia();
        if !(moment_of_inertia.is_finite() && moment_of_inertia > 0.0) {
            return Err(PropertyError::NonPositiveInertia { moment_of_inertia }.into());
        }
        let boundary = self.boundary.ok_or(PropertyError::MissingBoundary)?;
        let loads = self.loads.ok_or(PropertyError::MissingLoads)?;
        loads.validate()?;

        log::trace!(
            "beam element: L = {}, E = {}, I = {}",
            self.length,
            self.youngs_modulus,
            moment_of_inertia
        );
        Ok(BeamElement {
            length: self.length,
            youngs_modulus: self.youngs_modulus,
            section,
            boundary,
            loads,
            stiffness: local_stiffness(self.length, self.youngs_modulus, moment_of_inertia),
            load_vector: equivalent_load_vector(self.length, &loads),
            solution: None,
        })
    }
}

/// Euler-Bernoulli stiffness matrix for a prismatic element.
fn local_stiffness(length: f64, youngs_modulus: f64, moment_of_inertia: f64) -> Matrix4<f64> {
    let l = length;
    let l2 = l * l;
    let factor = 2.0 * youngs_modulus * moment_of_inertia / (l2 * l);
    factor
        * Matrix4::new(
            6.0,
            3.0 * l,
            -6.0,
            3.0 * l,
            3.0 * l,
            2.0 * l2,
            -3.0 * l,
            l2,
            -6.0,
            -3.0 * l,
            6.0,
            -3.0 * l,
            3.0 * l,
            l2,
            -3.0 * l,
            2.0 * l2,
        )
}

/// Point loads plus the fixed-end forces of the distributed load.
fn equivalent_load_vector(length: f64, loads: &Loads) -> Vector4<f64> {
    let end_force = loads.linear_load * length / 2.0;
    let end_moment = loads.linear_load * length * length / 12.0;
    Vector4::new(
        loads.force_1 + end_force,
        loads.moment_1 + end_moment,
        loads.force_2 + end_force,
        loads.moment_2 - end_moment,
    )
}
