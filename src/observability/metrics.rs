//! Counters for the reconciliation pipeline.
//!
//! Recording is a no-op until a recorder is installed with [`init`].

use std::fmt;

use tracing::info;

/// All metric names used by the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricName {
    // Pipeline metrics
    PipelineFragmentsProcessed,
    PipelineFragmentsMerged,
    PipelineFragmentsAppended,
    PipelineStandaloneFolded,
    PipelineTriangularFolds,

    // Validator metrics
    ValidatorAccepted,
    ValidatorRejected,

    // Normalize metrics
    NormalizeTimezonesResolved,
    NormalizeTimezoneConflicts,
    NormalizeAirportCandidatesDiscarded,

    // Boarding pass metrics
    BoardingPassExpanded,
    BoardingPassRejected,
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl MetricName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::PipelineFragmentsProcessed => "itinerary_pipeline_fragments_processed_total",
            MetricName::PipelineFragmentsMerged => "itinerary_pipeline_fragments_merged_total",
            MetricName::PipelineFragmentsAppended => "itinerary_pipeline_fragments_appended_total",
            MetricName::PipelineStandaloneFolded => "itinerary_pipeline_standalone_folded_total",
            MetricName::PipelineTriangularFolds => "itinerary_pipeline_triangular_folds_total",

            MetricName::ValidatorAccepted => "itinerary_validator_accepted_total",
            MetricName::ValidatorRejected => "itinerary_validator_rejected_total",

            MetricName::NormalizeTimezonesResolved => "itinerary_normalize_timezones_resolved_total",
            MetricName::NormalizeTimezoneConflicts => "itinerary_normalize_timezone_conflicts_total",
            MetricName::NormalizeAirportCandidatesDiscarded => {
                "itinerary_normalize_airport_candidates_discarded_total"
            }

            MetricName::BoardingPassExpanded => "itinerary_boarding_pass_expanded_total",
            MetricName::BoardingPassRejected => "itinerary_boarding_pass_rejected_total",
        }
    }

    pub fn all_metrics() -> impl Iterator<Item = MetricName> {
        use MetricName::*;
        [
            PipelineFragmentsProcessed,
            PipelineFragmentsMerged,
            PipelineFragmentsAppended,
            PipelineStandaloneFolded,
            PipelineTriangularFolds,
            ValidatorAccepted,
            ValidatorRejected,
            NormalizeTimezonesResolved,
            NormalizeTimezoneConflicts,
            NormalizeAirportCandidatesDiscarded,
            BoardingPassExpanded,
            BoardingPassRejected,
        ]
        .into_iter()
    }

    /// Returns (phase, description, unit)
    pub fn metadata(&self) -> (&'static str, &'static str, Option<&'static str>) {
        match self {
            MetricName::PipelineFragmentsProcessed => ("pipeline", "Fragments passed to process()", None),
            MetricName::PipelineFragmentsMerged => ("pipeline", "Fragments merged into an existing entry", None),
            MetricName::PipelineFragmentsAppended => ("pipeline", "Fragments appended as new entries", None),
            MetricName::PipelineStandaloneFolded => ("pipeline", "Standalone elements folded into reservations", None),
            MetricName::PipelineTriangularFolds => ("pipeline", "Redundant A to C legs removed", None),

            MetricName::ValidatorAccepted => ("validator", "Elements accepted by the validator", None),
            MetricName::ValidatorRejected => ("validator", "Elements rejected by the validator", None),

            MetricName::NormalizeTimezonesResolved => ("normalize", "Times qualified with a timezone", None),
            MetricName::NormalizeTimezoneConflicts => ("normalize", "Times left alone due to an offset conflict", None),
            MetricName::NormalizeAirportCandidatesDiscarded => {
                ("normalize", "Airport candidates dropped as implausible", None)
            }

            MetricName::BoardingPassExpanded => ("boarding_pass", "Boarding passes expanded into flight data", None),
            MetricName::BoardingPassRejected => ("boarding_pass", "Malformed boarding passes skipped", None),
        }
    }
}

/// Installs the Prometheus recorder and returns its handle for rendering.
pub fn init() -> Result<metrics_exporter_prometheus::PrometheusHandle, Box<dyn std::error::Error>> {
    let handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| format!("Failed to install Prometheus recorder: {}", e))?;
    describe_metrics();
    info!("Metrics system initialized");
    Ok(handle)
}

/// Registers the description of every metric with the installed recorder.
pub fn describe_metrics() {
    for metric in MetricName::all_metrics() {
        let (phase, description, _) = metric.metadata();
        ::metrics::describe_counter!(metric.as_str(), format!("[{}] {}", phase, description));
    }
}

fn increment(name: MetricName) {
    ::metrics::counter!(name.as_str()).increment(1);
}

// ============================================================================
// Pipeline Metrics
// ============================================================================

pub mod pipeline {
    use super::{increment, MetricName};

    pub fn fragment_processed() {
        increment(MetricName::PipelineFragmentsProcessed);
    }

    pub fn fragment_merged() {
        increment(MetricName::PipelineFragmentsMerged);
    }

    pub fn fragment_appended() {
        increment(MetricName::PipelineFragmentsAppended);
    }

    pub fn standalone_folded() {
        increment(MetricName::PipelineStandaloneFolded);
    }

    pub fn triangular_fold() {
        increment(MetricName::PipelineTriangularFolds);
    }
}

// ============================================================================
// Validator Metrics
// ============================================================================

pub mod validator {
    use super::{increment, MetricName};

    pub fn accepted() {
        increment(MetricName::ValidatorAccepted);
    }

    pub fn rejected() {
        increment(MetricName::ValidatorRejected);
    }
}

// ============================================================================
// Normalize Metrics
// ============================================================================

pub mod normalize {
    use super::{increment, MetricName};

    pub fn timezone_resolved() {
        increment(MetricName::NormalizeTimezonesResolved);
    }

    pub fn timezone_conflict() {
        increment(MetricName::NormalizeTimezoneConflicts);
    }

    pub fn airport_candidate_discarded(count: usize) {
        ::metrics::counter!(MetricName::NormalizeAirportCandidatesDiscarded.as_str())
            .increment(count as u64);
    }
}

// ============================================================================
// Boarding Pass Metrics
// ============================================================================

pub mod boarding_pass {
    use super::{increment, MetricName};

    pub fn expanded() {
        increment(MetricName::BoardingPassExpanded);
    }

    pub fn rejected() {
        increment(MetricName::BoardingPassRejected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_metric_names_are_unique_and_prefixed() {
        let names: HashSet<_> = MetricName::all_metrics().map(|m| m.as_str()).collect();
        assert_eq!(names.len(), MetricName::all_metrics().count());
        assert!(names.iter().all(|n| n.starts_with("itinerary_") && n.ends_with("_total")));
    }

    #[test]
    fn test_every_metric_has_metadata() {
        for metric in MetricName::all_metrics() {
            let (phase, description, _) = metric.metadata();
            assert!(!phase.is_empty());
            assert!(!description.is_empty());
        }
    }

    #[test]
    fn test_describe_metrics_without_recorder_is_noop() {
        describe_metrics();
    }

    #[test]
    fn test_recording_without_recorder_is_noop() {
        pipeline::fragment_processed();
        normalize::airport_candidate_discarded(3);
    }
}
