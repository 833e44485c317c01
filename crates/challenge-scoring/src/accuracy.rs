use challenge_types::{AccuracyResult, GeometryMetrics, ReferenceGeometry, ScoringPolicy};
use tracing::{debug, instrument};

/// Score a mesh's geometry against the challenge reference.
#[instrument(skip_all, fields(volume = metrics.volume, surface_area = metrics.surface_area))]
pub fn score_accuracy(
    metrics: &GeometryMetrics,
    reference: &ReferenceGeometry,
    policy: &ScoringPolicy,
) -> AccuracyResult {
    let result = AccuracyResult {
        dimensional_accuracy: dimensional_accuracy(metrics, reference),
        geometry_match: geometry_match(
            metrics,
            reference,
            policy.volume_weight,
            policy.surface_weight,
        ),
    };
    debug!(
        dimensional_accuracy = result.dimensional_accuracy,
        geometry_match = result.geometry_match,
        "scored mesh accuracy"
    );
    result
}

/// Mean of the per-quantity relative-error accuracies for volume and area.
///
/// Each is `100 − |computed − reference| / reference × 100`, floored at 0.
pub fn dimensional_accuracy(metrics: &GeometryMetrics, reference: &ReferenceGeometry) -> f64 {
    let volume = relative_error_score(metrics.volume, reference.volume);
    let surface = relative_error_score(metrics.surface_area, reference.surface_area);
    clamp_percent((volume + surface) / 2.0)
}

/// Weighted blend of the volume and area ratio scores.
///
/// Each is `100 − |1 − computed / reference| × 100`, floored at 0.
pub fn geometry_match(
    metrics: &GeometryMetrics,
    reference: &ReferenceGeometry,
    volume_weight: f64,
    surface_weight: f64,
) -> f64 {
    let volume = ratio_score(metrics.volume, reference.volume);
    let surface = ratio_score(metrics.surface_area, reference.surface_area);
    clamp_percent(volume * volume_weight + surface * surface_weight)
}

fn relative_error_score(computed: f64, reference: f64) -> f64 {
    clamp_percent(100.0 - (computed - reference).abs() / reference * 100.0)
}

fn ratio_score(computed: f64, reference: f64) -> f64 {
    clamp_percent(100.0 - (1.0 - computed / reference).abs() * 100.0)
}

/// Clamp to [0, 100]. `f64::max` maps NaN to the other operand, so a NaN
/// input lands on 0.
fn clamp_percent(value: f64) -> f64 {
    value.max(0.0).min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> ReferenceGeometry {
        ReferenceGeometry {
            volume: 1000.0,
            surface_area: 600.0,
            critical_dimensions: Default::default(),
        }
    }

    #[test]
    fn ten_percent_volume_error() {
        let metrics = GeometryMetrics {
            volume: 1100.0,
            surface_area: 600.0,
        };
        let reference = reference();
        assert!((dimensional_accuracy(&metrics, &reference) - 95.0).abs() < 1e-9);
        assert!((geometry_match(&metrics, &reference, 0.7, 0.3) - 93.0).abs() < 1e-9);
    }

    #[test]
    fn double_size_floors_at_zero() {
        let metrics = GeometryMetrics {
            volume: 2000.0,
            surface_area: 1200.0,
        };
        let result = score_accuracy(&metrics, &reference(), &ScoringPolicy::default());
        assert_eq!(result.dimensional_accuracy, 0.0);
        assert_eq!(result.geometry_match, 0.0);
    }

    #[test]
    fn nan_clamps_to_zero() {
        assert_eq!(clamp_percent(f64::NAN), 0.0);
    }
}
