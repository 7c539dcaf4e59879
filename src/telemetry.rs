use std::fmt;
use std::rc::Rc;

/// Sink for `(feature, action)` usage events.
pub trait TelemetryRecorder {
    fn record_event(&self, feature: &str, action: &str);
}

/// Writes events to the `telemetry` tracing target.
pub struct TracingTelemetryRecorder;

impl TelemetryRecorder for TracingTelemetryRecorder {
    fn record_event(&self, feature: &str, action: &str) {
        tracing::info!(target: "telemetry", feature, action, "event recorded");
    }
}

pub struct DisabledTelemetryRecorder;

impl TelemetryRecorder for DisabledTelemetryRecorder {
    fn record_event(&self, _feature: &str, _action: &str) {}
}

/// Cloneable recorder handle usable as a component prop.
#[derive(Clone)]
pub struct TelemetryHandle(Rc<dyn TelemetryRecorder>);

impl TelemetryHandle {
    pub fn new(recorder: impl TelemetryRecorder + 'static) -> Self {
        Self(Rc::new(recorder))
    }

    pub fn from_config(enabled: bool) -> Self {
        if enabled {
            Self::new(TracingTelemetryRecorder)
        } else {
            Self::new(DisabledTelemetryRecorder)
        }
    }

    pub fn recorder(&self) -> &dyn TelemetryRecorder {
        self.0.as_ref()
    }
}

impl PartialEq for TelemetryHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for TelemetryHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TelemetryHandle")
    }
}

#[cfg(test)]
pub mod testing {
    use super::TelemetryRecorder;
    use std::cell::RefCell;

    #[derive(Default)]
    pub struct RecordingTelemetry {
        pub events: RefCell<Vec<(String, String)>>,
    }

    impl RecordingTelemetry {
        pub fn events(&self) -> Vec<(String, String)> {
            self.events.borrow().clone()
        }
    }

    impl TelemetryRecorder for RecordingTelemetry {
        fn record_event(&self, feature: &str, action: &str) {
            self.events
                .borrow_mut()
                .push((feature.to_string(), action.to_string()));
        }
    }
}
