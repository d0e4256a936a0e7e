//! Upload flow state and response classification.
//!
//! The flow is strictly `Idle -> Waiting -> (Loaded | Failed) -> Idle`
//! for each user-initiated upload. Only one request can be in flight at
//! a time; the dropzone is disabled while waiting.

use crate::models::{Mission, ServiceError};

/// Settled result of one upload exchange. Exactly one of mission/error
/// reaches the UI state.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    Parsed(Box<Mission>),
    Rejected(ServiceError),
}

/// Synthesize the outcome for a request that never produced a response.
pub fn network_failure(message: &str) -> UploadOutcome {
    UploadOutcome::Rejected(ServiceError::from_detail(message))
}

/// Classify a settled HTTP exchange.
///
/// An empty body degrades to the status text; a non-ok body that is not
/// the structured error shape degrades to its raw text; an ok body that
/// is not a Mission Response surfaces the decode error.
pub fn classify_response(ok: bool, status_text: &str, body: &str) -> UploadOutcome {
    if body.trim().is_empty() {
        return UploadOutcome::Rejected(ServiceError::from_detail(status_text));
    }

    if !ok {
        return match serde_json::from_str::<ServiceError>(body) {
            Ok(error) => UploadOutcome::Rejected(error),
            Err(_) => UploadOutcome::Rejected(ServiceError::from_detail(body)),
        };
    }

    match serde_json::from_str::<Mission>(body) {
        Ok(mission) => UploadOutcome::Parsed(Box::new(mission)),
        Err(error) => UploadOutcome::Rejected(ServiceError::from_detail(error.to_string())),
    }
}

/// In-memory UI state of the upload flow. Created on mount, mutated only
/// by local event handlers, discarded on reload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadFlow {
    pub mission: Option<Mission>,
    pub error: Option<ServiceError>,
    pub waiting: bool,
}

impl UploadFlow {
    /// Enter the waiting state for a fresh upload. Clears any previous
    /// error but keeps the last loaded mission visible.
    pub fn begin(&mut self) {
        self.error = None;
        self.waiting = true;
    }

    /// Leave the waiting state with a settled outcome. A rejection keeps
    /// the previously loaded mission untouched.
    pub fn settle(&mut self, outcome: UploadOutcome) {
        match outcome {
            UploadOutcome::Parsed(mission) => self.mission = Some(*mission),
            UploadOutcome::Rejected(error) => self.error = Some(error),
        }
        self.waiting = false;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MISSION_BODY: &str = r#"{"file_name":"test.mis","data":{}}"#;

    #[test]
    fn test_ok_response_parses_mission() {
        let outcome = classify_response(true, "OK", MISSION_BODY);
        match outcome {
            UploadOutcome::Parsed(mission) => assert_eq!(mission.file_name, "test.mis"),
            UploadOutcome::Rejected(error) => panic!("unexpected rejection: {}", error.detail),
        }
    }

    #[test]
    fn test_ok_response_with_unparsable_body_is_rejected() {
        let outcome = classify_response(true, "OK", r#"{"unexpected": 1}"#);
        assert!(matches!(outcome, UploadOutcome::Rejected(_)));
    }

    #[test]
    fn test_empty_body_uses_status_text() {
        let outcome = classify_response(false, "Bad Gateway", "  ");
        match outcome {
            UploadOutcome::Rejected(error) => assert_eq!(error.detail, "Bad Gateway"),
            UploadOutcome::Parsed(_) => panic!("empty body cannot parse"),
        }
    }

    #[test]
    fn test_non_ok_structured_body() {
        let outcome = classify_response(false, "Bad Request", r#"{"detail":"bad file"}"#);
        match outcome {
            UploadOutcome::Rejected(error) => assert_eq!(error.detail, "bad file"),
            UploadOutcome::Parsed(_) => panic!("non-ok response cannot parse"),
        }
    }

    #[test]
    fn test_non_ok_unstructured_body_degrades_to_raw_text() {
        let outcome = classify_response(false, "Internal Server Error", "<html>boom</html>");
        match outcome {
            UploadOutcome::Rejected(error) => assert_eq!(error.detail, "<html>boom</html>"),
            UploadOutcome::Parsed(_) => panic!("non-ok response cannot parse"),
        }
    }

    #[test]
    fn test_network_failure_synthesizes_detail() {
        let outcome = network_failure("connection refused");
        match outcome {
            UploadOutcome::Rejected(error) => {
                assert_eq!(error.detail, "connection refused");
                assert!(error.issue.is_none());
            }
            UploadOutcome::Parsed(_) => panic!("no response cannot parse"),
        }
    }

    #[test]
    fn test_flow_success_path() {
        let mut flow = UploadFlow::default();
        assert!(!flow.waiting);

        flow.begin();
        assert!(flow.waiting);
        assert!(flow.error.is_none());

        flow.settle(classify_response(true, "OK", MISSION_BODY));
        assert!(!flow.waiting);
        assert!(flow.mission.is_some());
        assert!(flow.error.is_none());
    }

    #[test]
    fn test_flow_failure_keeps_previous_mission() {
        let mut flow = UploadFlow::default();
        flow.begin();
        flow.settle(classify_response(true, "OK", MISSION_BODY));

        flow.begin();
        flow.settle(network_failure("connection reset"));

        assert!(!flow.waiting);
        assert_eq!(flow.error.as_ref().unwrap().detail, "connection reset");
        assert_eq!(flow.mission.as_ref().unwrap().file_name, "test.mis");
    }

    #[test]
    fn test_flow_begin_clears_stale_error() {
        let mut flow = UploadFlow::default();
        flow.begin();
        flow.settle(network_failure("boom"));
        assert!(flow.error.is_some());

        flow.begin();
        assert!(flow.error.is_none());
        assert!(flow.waiting);
    }

    #[test]
    fn test_dismiss_error() {
        let mut flow = UploadFlow::default();
        flow.begin();
        flow.settle(network_failure("boom"));

        flow.dismiss_error();
        assert!(flow.error.is_none());
    }
}
