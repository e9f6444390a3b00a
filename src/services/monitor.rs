//! Run orchestration
//!
//! Sample → evaluate → notify → log, once per invocation.

use super::report::{Outcome, RunReport};
use super::sampler::{PathReading, UsageSampler};
use crate::alerts::{exceeding, AlertEvent, AlertMessage, Notifier};
use crate::config::Config;
use crate::probe::UsageProbe;
use crate::runlog::RunLog;

use chrono::{DateTime, Utc};

const UNKNOWN_HOST: &str = "unknown-host";

/// Runs one disk usage check against a configuration
pub struct Monitor<'a> {
    config: &'a Config,
}

impl<'a> Monitor<'a> {
    /// Create a new monitor for the given configuration
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Hostname used in alerts and the run log
    pub fn hostname<P: UsageProbe>(&self, probe: &P) -> String {
        self.config
            .hostname
            .clone()
            .or_else(|| probe.hostname())
            .unwrap_or_else(|| UNKNOWN_HOST.to_string())
    }

    /// Sample every path and evaluate the limit
    pub fn check<P: UsageProbe>(
        &self,
        probe: &P,
        now: DateTime<Utc>,
    ) -> (Vec<PathReading>, Option<AlertEvent>) {
        let readings = UsageSampler::new(probe).sample_all(&self.config.paths);
        let over = exceeding(
            readings.iter().filter_map(PathReading::sample),
            self.config.limit_percent,
        );
        let alert = AlertEvent::new(now, self.config.limit_percent, over);
        (readings, alert)
    }

    /// Deliver the alert through `notifier`, at most once
    pub fn notify<N: Notifier>(
        &self,
        notifier: &N,
        alert: Option<&AlertEvent>,
        hostname: &str,
    ) -> Outcome {
        let Some(alert) = alert else {
            log::info!(
                "All paths within the {}% limit",
                self.config.limit_percent
            );
            return Outcome::NotNeeded;
        };

        let message = AlertMessage::compose(alert, &self.config.mail, hostname);
        log::info!(
            "{} path(s) above {}%, notifying via {}",
            alert.len(),
            self.config.limit_percent,
            notifier.name()
        );

        match notifier.notify(&message) {
            Ok(()) if self.config.dry_run => Outcome::AlertDryRun,
            Ok(()) => Outcome::AlertSent,
            Err(e) => {
                log::error!("Failed to send alert via {}: {}", notifier.name(), e);
                Outcome::AlertFailed(e.to_string())
            }
        }
    }

    /// Execute one complete run and append its record to `run_log`
    pub fn run<P: UsageProbe, N: Notifier>(
        &self,
        probe: &P,
        notifier: &N,
        run_log: &RunLog,
    ) -> RunReport {
        let checked_at = Utc::now();
        let hostname = self.hostname(probe);

        let (readings, alert) = self.check(probe, checked_at);
        let outcome = self.notify(notifier, alert.as_ref(), &hostname);

        let report = RunReport {
            checked_at,
            hostname,
            limit_percent: self.config.limit_percent,
            readings,
            alert,
            outcome,
        };

        run_log.record(&report.log_line());
        report
    }

    /// Get the monitor configuration
    pub fn config(&self) -> &Config {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DiskUsage;
    use crate::mock::{sample_config, MockProbe, RecordingNotifier};

    fn probe() -> MockProbe {
        MockProbe::new()
            .with_hostname("mock-host")
            .with_usage("/", DiskUsage::new(1000, 500, 500))
            .with_usage("/home", DiskUsage::new(1000, 850, 150))
            .with_usage("/var", DiskUsage::new(1000, 800, 200))
    }

    fn config(paths: &[&str], limit: f64) -> Config {
        let mut config = sample_config();
        config.paths = paths.iter().map(|p| p.to_string()).collect();
        config.limit_percent = limit;
        config
    }

    fn log_lines(log: &RunLog) -> Vec<String> {
        std::fs::read_to_string(log.path())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_no_alert_when_all_within_limit() {
        let dir = tempfile::tempdir().unwrap();
        let run_log = RunLog::new(dir.path().join("run.log"));
        let config = config(&["/", "/var"], 80.0);
        let notifier = RecordingNotifier::new();

        let report = Monitor::new(&config).run(&probe(), &notifier, &run_log);

        assert_eq!(report.outcome, Outcome::NotNeeded);
        assert!(report.alert.is_none());
        assert_eq!(notifier.sent_count(), 0);
        assert_eq!(log_lines(&run_log).len(), 1);
        assert!(log_lines(&run_log)[0].ends_with("outcome=ok"));
    }

    #[test]
    fn test_single_email_lists_exactly_offending_paths() {
        let dir = tempfile::tempdir().unwrap();
        let run_log = RunLog::new(dir.path().join("run.log"));
        let config = config(&["/", "/home", "/var"], 80.0);
        let notifier = RecordingNotifier::new();

        let report = Monitor::new(&config).run(&probe(), &notifier, &run_log);

        assert_eq!(report.outcome, Outcome::AlertSent);
        assert_eq!(notifier.sent_count(), 1);
        let sent = notifier.sent();
        assert!(sent[0].body.contains("Path: /home\n"));
        assert!(!sent[0].body.contains("Path: /var\n"));
        assert!(!sent[0].body.contains("Path: /\n"));
        assert_eq!(sent[0].to, config.mail.recipients);
        assert_eq!(
            report.alert.unwrap().paths().collect::<Vec<_>>(),
            vec!["/home"]
        );
    }

    #[test]
    fn test_unreadable_path_does_not_block_alert() {
        let dir = tempfile::tempdir().unwrap();
        let run_log = RunLog::new(dir.path().join("run.log"));
        let config = config(&["/missing", "/home"], 80.0);
        let notifier = RecordingNotifier::new();

        let report = Monitor::new(&config).run(&probe(), &notifier, &run_log);

        assert_eq!(report.failed_paths().collect::<Vec<_>>(), vec!["/missing"]);
        assert_eq!(notifier.sent_count(), 1);
        let line = &log_lines(&run_log)[0];
        assert!(line.contains("/missing=error(not found)"));
        assert!(line.contains("/home=85.0%!"));
    }

    #[test]
    fn test_notifier_failure_is_logged_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let run_log = RunLog::new(dir.path().join("run.log"));
        let config = config(&["/home"], 80.0);
        let notifier = RecordingNotifier::failing("connection refused");

        let report = Monitor::new(&config).run(&probe(), &notifier, &run_log);

        assert!(matches!(report.outcome, Outcome::AlertFailed(_)));
        assert_eq!(notifier.attempts(), 1);
        assert!(log_lines(&run_log)[0].contains("outcome=alert-failed(SMTP error: connection refused)"));
    }

    #[test]
    fn test_dry_run_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let run_log = RunLog::new(dir.path().join("run.log"));
        let mut config = config(&["/home"], 80.0);
        config.dry_run = true;
        let notifier = RecordingNotifier::new();

        let report = Monitor::new(&config).run(&probe(), &notifier, &run_log);

        assert_eq!(report.outcome, Outcome::AlertDryRun);
    }

    #[test]
    fn test_every_run_appends_one_line() {
        let dir = tempfile::tempdir().unwrap();
        let run_log = RunLog::new(dir.path().join("run.log"));
        let quiet = config(&["/"], 80.0);
        let loud = config(&["/home"], 80.0);
        let notifier = RecordingNotifier::new();

        Monitor::new(&quiet).run(&probe(), &notifier, &run_log);
        Monitor::new(&loud).run(&probe(), &notifier, &run_log);
        Monitor::new(&quiet).run(&probe(), &notifier, &run_log);

        assert_eq!(log_lines(&run_log).len(), 3);
        assert_eq!(notifier.sent_count(), 1);
    }

    #[test]
    fn test_log_failure_does_not_abort_run() {
        let dir = tempfile::tempdir().unwrap();
        let run_log = RunLog::new(dir.path());
        let config = config(&["/home"], 80.0);
        let notifier = RecordingNotifier::new();

        let report = Monitor::new(&config).run(&probe(), &notifier, &run_log);
        assert_eq!(report.outcome, Outcome::AlertSent);
    }

    #[test]
    fn test_hostname_resolution() {
        let mut config = config(&["/"], 80.0);
        assert_eq!(Monitor::new(&config).hostname(&probe()), "mock-host");
        assert_eq!(Monitor::new(&config).hostname(&MockProbe::new()), UNKNOWN_HOST);

        config.hostname = Some("configured".to_string());
        assert_eq!(Monitor::new(&config).hostname(&probe()), "configured");
    }
}
