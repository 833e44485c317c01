use std::collections::HashSet;

use challenge_types::{Challenge, ScoringPolicy};

use crate::errors::ConfigError;

/// Check that a challenge can be scored without dividing by zero or
/// indexing out of range.
pub fn validate_challenge(challenge: &Challenge) -> Result<(), ConfigError> {
    let reference = &challenge.reference;
    positive("reference volume", reference.volume)?;
    positive("reference surface area", reference.surface_area)?;
    for (name, value) in &reference.critical_dimensions {
        positive(&format!("critical dimension '{}'", name), *value)?;
    }

    if challenge.quiz.is_empty() {
        return invalid("quiz has no questions".to_string());
    }
    let mut seen = HashSet::new();
    for q in &challenge.quiz {
        if !seen.insert(q.id.as_str()) {
            return invalid(format!("duplicate question id '{}'", q.id));
        }
        if q.correct_option >= q.options.len() {
            return invalid(format!(
                "question '{}' marks option {} correct but has {} options",
                q.id,
                q.correct_option,
                q.options.len()
            ));
        }
    }

    let policy = &challenge.scoring;
    if !policy
        .time_bands
        .windows(2)
        .all(|w| w[0].under_minutes < w[1].under_minutes)
    {
        return invalid("time bands must be in ascending order".to_string());
    }
    for (name, weight) in [
        ("accuracy scale", policy.accuracy_scale),
        ("volume weight", policy.volume_weight),
        ("surface weight", policy.surface_weight),
    ] {
        if !weight.is_finite() || weight < 0.0 {
            return invalid(format!("{} must be a non-negative number", name));
        }
    }
    validate_policy(policy)
}

/// Keep every sub-score within its cap; the caps sum to 100.
fn validate_policy(policy: &ScoringPolicy) -> Result<(), ConfigError> {
    let weight_sum = policy.volume_weight + policy.surface_weight;
    if weight_sum <= 0.0 || weight_sum > 1.0 + 1e-9 {
        return invalid(format!(
            "volume and surface weights must sum to more than 0 and at most 1, got {}",
            weight_sum
        ));
    }

    let caps = [
        ("time", policy.time_max(), ScoringPolicy::TIME_CAP),
        ("quiz", policy.quiz_max, ScoringPolicy::QUIZ_CAP),
        ("accuracy", policy.accuracy_max(), ScoringPolicy::ACCURACY_CAP),
    ];
    for (name, max, cap) in caps {
        if max > cap {
            return invalid(format!(
                "{} score can reach {}, above its cap of {}",
                name, max, cap
            ));
        }
    }
    Ok(())
}

fn positive(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        invalid(format!("{} must be positive, got {}", name, value))
    }
}

fn invalid(reason: String) -> Result<(), ConfigError> {
    Err(ConfigError::Invalid { reason })
}
