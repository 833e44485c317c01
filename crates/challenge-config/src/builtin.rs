//! The spur-gear practice challenge shipped with the platform.

use std::collections::BTreeMap;

use challenge_types::{Challenge, QuizQuestion, ReferenceGeometry, ScoringPolicy};

pub const SPUR_GEAR_ID: &str = "1";

/// Basic Gear Design: 24 teeth, module 2 mm, 20° pressure angle, 30 × 15 mm
/// hub with a 6 × 6 mm keyway.
pub fn spur_gear() -> Challenge {
    let critical_dimensions: BTreeMap<String, f64> = [
        ("pitchDiameter", 48.0),
        ("outsideDiameter", 52.0),
        ("hubDiameter", 30.0),
        ("hubLength", 15.0),
        ("keywayWidth", 6.0),
        ("keywayDepth", 6.0),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();

    Challenge {
        id: SPUR_GEAR_ID.to_string(),
        title: "Basic Gear Design".to_string(),
        instructions: "Design a spur gear with 24 teeth, module 2mm, and pressure angle of 20°. \
            The gear should have a hub with diameter 30mm and length 15mm. Include keyway with \
            dimensions 6×6mm. Export your design as both native CAD format and STL."
            .to_string(),
        reference: ReferenceGeometry {
            volume: 2845.67,
            surface_area: 1247.89,
            critical_dimensions,
        },
        quiz: vec![
            question(
                "q1",
                "What is the formula to calculate the pitch diameter of a spur gear?",
                &[
                    "Pitch Diameter = Number of teeth × Module",
                    "Pitch Diameter = Module / Number of teeth",
                    "Pitch Diameter = 2 × Module × Number of teeth",
                    "Pitch Diameter = Number of teeth / Module",
                ],
                0,
            ),
            question(
                "q2",
                "Which parameter directly affects the size of gear teeth?",
                &["Pressure angle", "Module", "Number of teeth", "Hub diameter"],
                1,
            ),
            question(
                "q3",
                "What is the purpose of the keyway in this design?",
                &[
                    "To reduce weight",
                    "To transmit torque between shaft and gear",
                    "To improve aesthetics",
                    "To reduce material usage",
                ],
                1,
            ),
        ],
        scoring: ScoringPolicy::default(),
    }
}

fn question(id: &str, prompt: &str, options: &[&str], correct_option: usize) -> QuizQuestion {
    QuizQuestion {
        id: id.to_string(),
        prompt: prompt.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_option,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate_challenge;

    #[test]
    fn spur_gear_is_valid() {
        let challenge = spur_gear();
        validate_challenge(&challenge).unwrap();
        assert_eq!(challenge.quiz.len(), 3);
        assert_eq!(challenge.reference.critical_dimensions["pitchDiameter"], 48.0);
    }
}
