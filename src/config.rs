use std::error::Error;
use std::fs;
use std::path::Path;

use beamx::{discretize, BeamElement, BeamError, BoundaryFlags, Loads, Section};
use serde::{Deserialize, Serialize};

/// One span of the modelled beam before discretization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanConfig {
    /// Span length in metres.
    pub length: f64,
    /// Young's modulus in pascals.
    pub youngs_modulus: f64,
    /// Cross-section; unit properties when omitted.
    #[serde(default)]
    pub section: Option<Section>,
    /// Restraints as `[translation_1, rotation_1, translation_2, rotation_2]`.
    pub boundary: BoundaryFlags,
    /// Applied loads. Omitted components are zero.
    pub loads: Loads,
    /// Number of elements the span is split into.
    #[serde(default = "default_elements")]
    pub elements: usize,
}

/// Full model read by the command line tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Spans in order along the beam.
    pub spans: Vec<SpanConfig>,
}

/// A span is analysed as one element unless told otherwise.
fn default_elements() -> usize {
    1
}

impl Default for ModelConfig {
    /// Simply supported 4 m beam under 1 kN/m with unit stiffness, split into 10 elements.
    fn default() -> Self {
        Self {
            spans: vec![SpanConfig {
                length: 4.0,
                youngs_modulus: 1.0,
                section: None,
                boundary: BoundaryFlags::simply_supported(),
                loads: Loads::distributed(1_000.0),
                elements: 10,
            }],
        }
    }
}

impl ModelConfig {
    /// Read a model from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)?;
        let config: ModelConfig = serde_json::from_str(&text)?;
        for span in &config.spans {
            if let Some(section) = &span.section {
                section.validate()?;
            }
        }
        log::debug!("loaded {} spans from {}", config.spans.len(), path.display());
        Ok(config)
    }

    /// Replace the element count of every span.
    pub fn with_elements(mut self, elements: usize) -> Self {
        for span in &mut self.spans {
            span.elements = elements;
        }
        self
    }

    /// Build and discretize every span.
    pub fn build_segments(&self) -> Result<Vec<Vec<BeamElement>>, BeamError> {
        self.spans
            .iter()
            .map(|span| {
                let mut builder = BeamElement::builder(span.length, span.youngs_modulus)
                    .boundary(span.boundary)
                    .loads(span.loads);
                if let Some(section) = span.section {
                    builder = builder.section(section);
                }
                discretize(&builder.build()?, span.elements)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_two_span_model() {
        let json = r#"{
            "spans": [
                {
                    "length": 3.0,
                    "youngs_modulus": 210e9,
                    "section": { "shape": "i_beam", "height": 0.3, "width": 0.15,
                                 "flange_thickness": 0.01, "web_thickness": 0.007 },
                    "boundary": [true, false, true, false],
                    "loads": { "linear_load": 2000.0 },
                    "elements": 6
                },
                {
                    "length": 3.0,
                    "youngs_modulus": 210e9,
                    "boundary": [false, false, true, false],
                    "loads": { "linear_load": 2000.0, "force_2": -500.0 }
                }
            ]
        }"#;
        let config: ModelConfig = serde_json::from_str(json).expect("valid model");
        assert_eq!(config.spans.len(), 2);
        assert_eq!(config.spans[1].elements, 1);
        assert!(config.spans[1].section.is_none());
        assert_eq!(config.spans[1].loads.force_2, -500.0);
        assert_eq!(config.spans[1].loads.moment_1, 0.0);

        let segments = config.build_segments().expect("valid spans");
        assert_eq!(segments[0].len(), 6);
        assert_eq!(segments[1].len(), 1);
    }

    #[test]
    fn loads_are_mandatory() {
        let json = r#"{ "spans": [ { "length": 1.0, "youngs_modulus": 1.0,
                                      "boundary": [true, true, false, false] } ] }"#;
        assert!(serde_json::from_str::<ModelConfig>(json).is_err());
    }

    #[test]
    fn element_override_applies_to_every_span() {
        let config = ModelConfig::default().with_elements(25);
        assert!(config.spans.iter().all(|span| span.elements == 25));
        let segments = config.build_segments().expect("valid spans");
        assert_eq!(segments[0].len(), 25);
    }

    #[test]
    fn zero_elements_are_rejected() {
        let config = ModelConfig::default().with_elements(0);
        assert!(matches!(
            config.build_segments(),
            Err(BeamError::InvalidArgument(_))
        ));
    }
}
