//! Cross-sectional properties for standard beam shapes.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::errors::ArgumentError;

/// Geometric properties of a cross-section.
///
/// The `y` axis is the strong axis and the `z` axis the weak axis. Beam
/// elements bend about the weak axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Cross-sectional area in square metres.
    pub area: f64,
    /// Second moment of area about the strong axis in metres to the fourth power.
    pub moment_of_inertia_y: f64,
    /// Second moment of area about the weak axis in metres to the fourth power.
    pub moment_of_inertia_z: f64,
    /// Elastic section modulus about the strong axis in cubic metres.
    pub elastic_modulus_y: f64,
    /// Elastic section modulus about the weak axis in cubic metres.
    pub elastic_modulus_z: f64,
}

impl SectionProperties {
    /// Properties used when an element is given no section: every value is one.
    pub const UNIT: SectionProperties = SectionProperties {
        area: 1.0,
        moment_of_inertia_y: 1.0,
        moment_of_inertia_z: 1.0,
        elastic_modulus_y: 1.0,
        elastic_modulus_z: 1.0,
    };

    /// Create properties from explicit values.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::NonPositiveDimension`] when any value is not a
    /// strictly positive finite number.
    ///
    /// # Examples
    /// ```
    /// use beamx::SectionProperties;
    ///
    /// let props = SectionProperties::new(0.06, 4.5e-4, 2.0e-4, 3.0e-3, 2.0e-3).unwrap();
    /// assert_eq!(props.weak_moment_of_inertia(), 2.0e-4);
    /// assert!(SectionProperties::new(0.0, 1.0, 1.0, 1.0, 1.0).is_err());
    /// ```
    pub fn new(
        area: f64,
        moment_of_inertia_y: f64,
        moment_of_inertia_z: f64,
        elastic_modulus_y: f64,
        elastic_modulus_z: f64,
    ) -> Result<Self, ArgumentError> {
        positive("area", area)?;
        positive("moment_of_inertia_y", moment_of_inertia_y)?;
        positive("moment_of_inertia_z", moment_of_inertia_z)?;
        positive("elastic_modulus_y", elastic_modulus_y)?;
        positive("elastic_modulus_z", elastic_modulus_z)?;
        Ok(Self {
            area,
            moment_of_inertia_y,
            moment_of_inertia_z,
            elastic_modulus_y,
            elastic_modulus_z,
        })
    }

    /// Second moment of area about the strong axis.
    #[must_use]
    pub fn strong_moment_of_inertia(&self) -> f64 {
        self.moment_of_inertia_y
    }

    /// Second moment of area about the weak axis.
    #[must_use]
    pub fn weak_moment_of_inertia(&self) -> f64 {
        self.moment_of_inertia_z
    }
}

impl Default for SectionProperties {
    fn default() -> Self {
        Self::UNIT
    }
}

/// A standard cross-sectional shape with dimensions in metres.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Section {
    /// Solid rectangle.
    Rectangle {
        /// Depth measured along the strong-axis bending direction.
        height: f64,
        /// Breadth of the section.
        width: f64,
    },
    /// Solid circle.
    Circle {
        /// Outside diameter.
        diameter: f64,
    },
    /// Rectangular tube with a uniform wall.
    HollowRectangle {
        /// Outside depth.
        height: f64,
        /// Outside breadth.
        width: f64,
        /// Wall thickness.
        thickness: f64,
    },
    /// Circular tube.
    HollowCircle {
        /// Outside diameter.
        outer_diameter: f64,
        /// Inside diameter.
        inner_diameter: f64,
    },
    /// Doubly symmetric I-section.
    IBeam {
        /// Overall depth.
        height: f64,
        /// Flange breadth.
        width: f64,
        /// Thickness of each flange.
        flange_thickness: f64,
        /// Thickness of the web.
        web_thickness: f64,
    },
}

impl Section {
    /// Create a solid rectangle.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::NonPositiveDimension`] when either dimension is not positive.
    pub fn rectangle(height: f64, width: f64) -> Result<Self, ArgumentError> {
        let section = Section::Rectangle { height, width };
        section.validate()?;
        Ok(section)
    }

    /// Create a solid circle.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::NonPositiveDimension`] when the diameter is not positive.
    pub fn circle(diameter: f64) -> Result<Self, ArgumentError> {
        let section = Section::Circle { diameter };
        section.validate()?;
        Ok(section)
    }

    /// Create a rectangular tube.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::NonPositiveDimension`] for non-positive dimensions and
    /// [`ArgumentError::CavityTooLarge`] when two walls do not fit inside the outline.
    pub fn hollow_rectangle(height: f64, width: f64, thickness: f64) -> Result<Self, ArgumentError> {
        let section = Section::HollowRectangle {
            height,
            width,
            thickness,
        };
        section.validate()?;
        Ok(section)
    }

    /// Create a circular tube.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::NonPositiveDimension`] for non-positive diameters and
    /// [`ArgumentError::CavityTooLarge`] when the inner diameter is not smaller than the outer.
    pub fn hollow_circle(outer_diameter: f64, inner_diameter: f64) -> Result<Self, ArgumentError> {
        let section = Section::HollowCircle {
            outer_diameter,
            inner_diameter,
        };
        section.validate()?;
        Ok(section)
    }

    /// Create an I-section.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::NonPositiveDimension`] for non-positive dimensions and
    /// [`ArgumentError::CavityTooLarge`] when the flanges meet or the web is wider
    /// than the flanges.
    pub fn i_beam(
        height: f64,
        width: f64,
        flange_thickness: f64,
        web_thickness: f64,
    ) -> Result<Self, ArgumentError> {
        let section = Section::IBeam {
            height,
            width,
            flange_thickness,
            web_thickness,
        };
        section.validate()?;
        Ok(section)
    }

    /// Check that the dimensions describe a real section.
    ///
    /// Deserialised sections bypass the checked constructors, so callers loading
    /// data should run this before using [`Section::properties`].
    ///
    /// # Errors
    ///
    /// See the checked constructors.
    pub fn validate(&self) -> Result<(), ArgumentError> {
        match *self {
            Section::Rectangle { height, width } => {
                positive("height", height)?;
                positive("width", width)
            }
            Section::Circle { diameter } => positive("diameter", diameter),
            Section::HollowRectangle {
                height,
                width,
                thickness,
            } => {
                positive("height", height)?;
                positive("width", width)?;
                positive("thickness", thickness)?;
                smaller("twice the thickness", 2.0 * thickness, "height", height)?;
                smaller("twice the thickness", 2.0 * thickness, "width", width)
            }
            Section::HollowCircle {
                outer_diameter,
                inner_diameter,
            } => {
                positive("outer_diameter", outer_diameter)?;
                positive("inner_diameter", inner_diameter)?;
                smaller(
                    "inner_diameter",
                    inner_diameter,
                    "outer_diameter",
                    outer_diameter,
                )
            }
            Section::IBeam {
                height,
                width,
                flange_thickness,
                web_thickness,
            } => {
                positive("height", height)?;
                positive("width", width)?;
                positive("flange_thickness", flange_thickness)?;
                positive("web_thickness", web_thickness)?;
                smaller(
                    "twice the flange_thickness",
                    2.0 * flange_thickness,
                    "height",
                    height,
                )?;
                smaller("web_thickness", web_thickness, "width", width)
            }
        }
    }

    /// Compute the area, moments of inertia and elastic moduli of the shape.
    ///
    /// # Examples
    /// ```
    /// use beamx::Section;
    ///
    /// let props = Section::rectangle(0.3, 0.2).unwrap().properties();
    /// assert!((props.area - 0.06).abs() < 1e-12);
    /// assert!((props.moment_of_inertia_y - 0.3_f64.powi(3) * 0.2 / 12.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn properties(&self) -> SectionProperties {
        match *self {
            Section::Rectangle { height, width } => rectangle_properties(height, width),
            Section::Circle { diameter } => {
                let inertia = circle_inertia(diameter);
                SectionProperties {
                    area: circle_area(diameter),
                    moment_of_inertia_y: inertia,
                    moment_of_inertia_z: inertia,
                    elastic_modulus_y: inertia / (diameter / 2.0),
                    elastic_modulus_z: inertia / (diameter / 2.0),
                }
            }
            Section::HollowRectangle {
                height,
                width,
                thickness,
            } => {
                let outer = rectangle_properties(height, width);
                let inner = rectangle_properties(height - 2.0 * thickness, width - 2.0 * thickness);
                let moment_of_inertia_y = outer.moment_of_inertia_y - inner.moment_of_inertia_y;
                let moment_of_inertia_z = outer.moment_of_inertia_z - inner.moment_of_inertia_z;
                SectionProperties {
                    area: outer.area - inner.area,
                    moment_of_inertia_y,
                    moment_of_inertia_z,
                    elastic_modulus_y: moment_of_inertia_y / (height / 2.0),
                    elastic_modulus_z: moment_of_inertia_z / (width / 2.0),
                }
            }
            Section::HollowCircle {
                outer_diameter,
                inner_diameter,
            } => {
                let inertia = circle_inertia(outer_diameter) - circle_inertia(inner_diameter);
                SectionProperties {
                    area: circle_area(outer_diameter) - circle_area(inner_diameter),
                    moment_of_inertia_y: inertia,
                    moment_of_inertia_z: inertia,
                    elastic_modulus_y: inertia / (outer_diameter / 2.0),
                    elastic_modulus_z: inertia / (outer_diameter / 2.0),
                }
            }
            Section::IBeam {
                height,
                width,
                flange_thickness,
                web_thickness,
            } => {
                let web_height = height - 2.0 * flange_thickness;
                let moment_of_inertia_y = (width * height.powi(3)
                    - (width - web_thickness) * web_height.powi(3))
                    / 12.0;
                let moment_of_inertia_z = (2.0 * flange_thickness * width.powi(3)
                    + web_height * web_thickness.powi(3))
                    / 12.0;
                SectionProperties {
                    area: 2.0 * flange_thickness * width + web_height * web_thickness,
                    moment_of_inertia_y,
                    moment_of_inertia_z,
                    elastic_modulus_y: moment_of_inertia_y / (height / 2.0),
                    elastic_modulus_z: moment_of_inertia_z / (width / 2.0),
                }
            }
        }
    }

    /// Return the section turned a quarter turn about the beam axis.
    ///
    /// Rectangular shapes swap height and width so the strong and weak axes
    /// exchange. Circles are symmetric and an I-section turned on its side is no
    /// longer an I-section, so both are returned unchanged.
    #[must_use]
    pub fn rotated(&self) -> Self {
        match *self {
            Section::Rectangle { height, width } => Section::Rectangle {
                height: width,
                width: height,
            },
            Section::HollowRectangle {
                height,
                width,
                thickness,
            } => Section::HollowRectangle {
                height: width,
                width: height,
                thickness,
            },
            other => other,
        }
    }
}

impl From<Section> for SectionProperties {
    fn from(value: Section) -> Self {
        value.properties()
    }
}

/// Properties of a solid rectangle.
fn rectangle_properties(height: f64, width: f64) -> SectionProperties {
    let moment_of_inertia_y = height.powi(3) * width / 12.0;
    let moment_of_inertia_z = height * width.powi(3) / 12.0;
    SectionProperties {
        area: height * width,
        moment_of_inertia_y,
        moment_of_inertia_z,
        elastic_modulus_y: moment_of_inertia_y / (height / 2.0),
        elastic_modulus_z: moment_of_inertia_z / (width / 2.0),
    }
}

/// Area of a solid circle.
fn circle_area(diameter: f64) -> f64 {
    PI * (diameter / 2.0).powi(2)
}

/// Second moment of area of a solid circle about a diameter.
fn circle_inertia(diameter: f64) -> f64 {
    PI * diameter.powi(4) / 64.0
}

/// Reject values that are not strictly positive and finite.
fn positive(dimension: &'static str, value: f64) -> Result<(), ArgumentError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ArgumentError::NonPositiveDimension { dimension, value })
    }
}

/// Reject an inner dimension that does not fit strictly inside its outer dimension.
fn smaller(
    inner: &'static str,
    inner_value: f64,
    outer: &'static str,
    outer_value: f64,
) -> Result<(), ArgumentError> {
    if inner_value < outer_value {
        Ok(())
    } else {
        Err(ArgumentError::CavityTooLarge {
            inner,
            inner_value,
            outer,
            outer_value,
        })
    }
}
