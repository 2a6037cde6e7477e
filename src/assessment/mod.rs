// Assessment workflow - submit once, then poll until terminal
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use crate::Result;
use crate::client::{AssessmentApi, Report};
use crate::error::ClientError;
use std::io::Write;
use std::time::Duration;
use tracing::{debug, info};

/// Drives one assessment from submission to a terminal status
///
/// The report is replaced wholesale on every poll; nothing is merged.
/// There is no iteration cap: the loop ends on `READY`, `ERROR`, or the
/// first client error.
pub struct Assessor<A> {
    api: A,
    interval: Duration,
}

impl<A: AssessmentApi> Assessor<A> {
    pub fn new(api: A, interval: Duration) -> Self {
        Self { api, interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Start a fresh assessment, bypassing any cached result
    pub async fn submit(&self, host: &str) -> std::result::Result<Report, ClientError> {
        info!(host, "submitting new assessment");
        self.api.analyze(host, true).await
    }

    /// Poll from `initial` until the status is terminal
    ///
    /// Writes a `Status: <status>` line to `out` for every report seen,
    /// including the initial and the terminal one.
    pub async fn poll<W: Write>(&self, host: &str, initial: Report, out: &mut W) -> Result<Report> {
        let mut report = initial;
        let mut polls: u64 = 0;

        loop {
            writeln!(out, "Status: {}", report.status)?;

            if report.status.is_terminal() {
                info!(host, status = %report.status, polls, "assessment finished");
                return Ok(report);
            }

            tokio::time::sleep(self.interval).await;
            polls += 1;
            debug!(host, poll = polls, "polling assessment");
            report = self.api.analyze(host, false).await?;
        }
    }

    /// Submit and poll to completion
    pub async fn assess<W: Write>(&self, host: &str, out: &mut W) -> Result<Report> {
        let initial = self.submit(host).await?;
        self.poll(host, initial, out).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::AssessmentStatus;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Replays canned responses and records the `start_new` flag of each call
    struct ScriptedApi {
        responses: Mutex<VecDeque<std::result::Result<Report, ClientError>>>,
        calls: Mutex<Vec<bool>>,
    }

    impl ScriptedApi {
        fn new(responses: Vec<std::result::Result<Report, ClientError>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<bool> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AssessmentApi for ScriptedApi {
        async fn analyze(
            &self,
            _host: &str,
            start_new: bool,
        ) -> std::result::Result<Report, ClientError> {
            self.calls.lock().unwrap().push(start_new);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("poll loop asked for more responses than scripted")
        }
    }

    fn report(status: &str) -> Report {
        Report {
            host: "example.com".to_string(),
            status: AssessmentStatus::from(status.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_returns_immediately_on_terminal_submit() {
        let api = ScriptedApi::new(vec![Ok(report("READY"))]);
        let assessor = Assessor::new(&api, Duration::ZERO);
        let mut out = Vec::new();

        let result = assessor.assess("example.com", &mut out).await.unwrap();

        assert_eq!(result.status, AssessmentStatus::Ready);
        assert_eq!(api.calls(), vec![true]);
        assert_eq!(String::from_utf8(out).unwrap(), "Status: READY\n");
    }

    #[tokio::test]
    async fn test_keeps_polling_through_opaque_statuses() {
        let api = ScriptedApi::new(vec![
            Ok(report("DNS")),
            Ok(report("IN_PROGRESS")),
            Ok(report("SOMETHING_NEW")),
            Ok(report("")),
            Ok(report("READY")),
        ]);
        let assessor = Assessor::new(&api, Duration::ZERO);
        let mut out = Vec::new();

        let result = assessor.assess("example.com", &mut out).await.unwrap();

        assert_eq!(result.status, AssessmentStatus::Ready);
        // Only the first call asks for a fresh assessment
        assert_eq!(api.calls(), vec![true, false, false, false, false]);
        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed.lines().count(), 5);
        assert!(printed.starts_with("Status: DNS\nStatus: IN_PROGRESS\n"));
        assert!(printed.ends_with("Status: READY\n"));
    }

    #[tokio::test]
    async fn test_error_status_is_terminal() {
        let mut failed = report("ERROR");
        failed.status_message = "Unable to resolve domain name".to_string();
        let api = ScriptedApi::new(vec![Ok(report("DNS")), Ok(failed)]);
        let assessor = Assessor::new(&api, Duration::ZERO);

        let result = assessor.assess("example.com", &mut std::io::sink()).await.unwrap();

        assert_eq!(result.status, AssessmentStatus::Error);
        assert_eq!(result.status_message, "Unable to resolve domain name");
        assert_eq!(api.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_client_error_aborts_loop() {
        let api = ScriptedApi::new(vec![
            Ok(report("IN_PROGRESS")),
            Err(ClientError::Http(529)),
            Ok(report("READY")),
        ]);
        let assessor = Assessor::new(&api, Duration::ZERO);

        let err = assessor
            .assess("example.com", &mut std::io::sink())
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ClientError>(),
            Some(ClientError::Http(529))
        ));
        assert_eq!(api.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_poll_replaces_report_wholesale() {
        let mut first = report("IN_PROGRESS");
        first.endpoints.push(Default::default());
        let api = ScriptedApi::new(vec![Ok(report("READY"))]);
        let assessor = Assessor::new(&api, Duration::from_millis(1));

        let result = assessor
            .poll("example.com", first, &mut std::io::sink())
            .await
            .unwrap();

        assert!(result.endpoints.is_empty());
        assert_eq!(api.calls(), vec![false]);
    }
}
