use std::error::Error;
use std::fmt;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

/// Out-of-band sink for errors nobody else will report.
pub trait DiagnosticLog {
    fn error(&self, error: &dyn Error);
}

pub struct TracingLog;

impl DiagnosticLog for TracingLog {
    fn error(&self, error: &dyn Error) {
        tracing::error!(error = %error, "unhandled error");
    }
}

#[derive(Clone)]
pub struct Diagnostics(Rc<dyn DiagnosticLog>);

impl Diagnostics {
    pub fn new(log: impl DiagnosticLog + 'static) -> Self {
        Self(Rc::new(log))
    }

    pub fn log(&self) -> &dyn DiagnosticLog {
        self.0.as_ref()
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new(TracingLog)
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Diagnostics")
    }
}

/// Installs the global fmt subscriber. Falls back to `info` on a bad filter.
pub fn init_tracing(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|e| {
        eprintln!("Invalid log filter {:?}, using \"info\": {}", filter, e);
        EnvFilter::new("info")
    });

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init()
    {
        eprintln!("Failed to install tracing subscriber: {}", e);
    }
}

#[cfg(test)]
pub mod testing {
    use super::DiagnosticLog;
    use std::cell::RefCell;
    use std::error::Error;

    #[derive(Default)]
    pub struct RecordingLog {
        pub entries: RefCell<Vec<String>>,
    }

    impl RecordingLog {
        pub fn entries(&self) -> Vec<String> {
            self.entries.borrow().clone()
        }
    }

    impl DiagnosticLog for RecordingLog {
        fn error(&self, error: &dyn Error) {
            self.entries.borrow_mut().push(error.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingLog;
    use super::*;
    use crate::team::DeleteTeamError;

    #[test]
    fn test_recording_log_captures_display() {
        let log = RecordingLog::default();
        log.error(&DeleteTeamError::unexpected("socket closed"));
        assert_eq!(log.entries(), vec!["Unexpected error: socket closed"]);
    }

    #[test]
    fn test_init_tracing_twice_does_not_panic() {
        init_tracing("teamdesk=debug");
        init_tracing("not a [valid filter");
    }
}
