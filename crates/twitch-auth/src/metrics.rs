//! Request metrics
//!
//! Recorded through the `metrics` facade. Without an installed recorder
//! these calls are no-ops, so the embedding application decides whether and
//! where they are exported.
//!
//! - `twitch_auth_requests_total` (counter): labels `operation`, `outcome`
//! - `twitch_auth_request_duration_seconds` (histogram): label `operation`

/// How a single request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    Success,
    ProviderFailure,
    TransportError,
    DecodeError,
}

impl RequestOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestOutcome::Success => "success",
            RequestOutcome::ProviderFailure => "provider_failure",
            RequestOutcome::TransportError => "transport_error",
            RequestOutcome::DecodeError => "decode_error",
        }
    }
}

/// Record one finished request.
pub fn record_request(operation: &'static str, outcome: RequestOutcome, duration_secs: f64) {
    metrics::counter!(
        "twitch_auth_requests_total",
        "operation" => operation,
        "outcome" => outcome.as_str()
    )
    .increment(1);
    metrics::histogram!("twitch_auth_request_duration_seconds", "operation" => operation)
        .record(duration_secs);
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle, PrometheusRecorder};

    fn isolated_recorder() -> (PrometheusRecorder, PrometheusHandle) {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();
        (recorder, handle)
    }

    #[test]
    fn record_without_recorder_is_a_noop() {
        record_request("validate", RequestOutcome::Success, 0.01);
    }

    #[test]
    fn record_request_labels_operation_and_outcome() {
        let (recorder, handle) = isolated_recorder();
        let _guard = metrics::set_default_local_recorder(&recorder);

        record_request("exchange_code", RequestOutcome::Success, 0.2);
        record_request("revoke", RequestOutcome::ProviderFailure, 0.1);

        let output = handle.render();
        assert!(output.contains("twitch_auth_requests_total"));
        assert!(output.contains("operation=\"exchange_code\""));
        assert!(output.contains("outcome=\"success\""));
        assert!(output.contains("operation=\"revoke\""));
        assert!(output.contains("outcome=\"provider_failure\""));
        assert!(output.contains("twitch_auth_request_duration_seconds"));
    }

    #[test]
    fn outcome_labels_are_distinct() {
        let labels = [
            RequestOutcome::Success,
            RequestOutcome::ProviderFailure,
            RequestOutcome::TransportError,
            RequestOutcome::DecodeError,
        ]
        .map(RequestOutcome::as_str);
        let unique: std::collections::HashSet<_> = labels.iter().collect();
        assert_eq!(unique.len(), labels.len());
    }
}
