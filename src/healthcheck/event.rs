//! Lifecycle events reported to the collector.

/// One ping sent to the collector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthCheckEvent {
    /// The pass has started
    Start,
    /// The pass finished without errors
    Success,
    /// The pass failed
    Fail,
    /// Free-form message attached to the check
    Log(String),
}

impl HealthCheckEvent {
    /// Returns the URL path suffix for this event.
    ///
    /// `Success` pings the bare job URL and therefore has no suffix.
    #[must_use]
    pub const fn action(&self) -> Option<&'static str> {
        match self {
            Self::Start => Some("start"),
            Self::Success => None,
            Self::Fail => Some("fail"),
            Self::Log(_) => Some("log"),
        }
    }

    /// Returns a short name for log lines.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self.action() {
            Some(action) => action,
            None => "success",
        }
    }
}
