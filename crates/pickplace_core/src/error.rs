use std::borrow::Cow;
use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Convenient result alias for pickplace_core.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Log/handling importance. Adapters map this onto tracing levels.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
}

/// Where an error came from.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Domain {
    Goal,
    Motion,
    Transport,
    Other,
}

/// Stable error "kind" for matching/branching.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ErrorKind {
    InvalidArgument,
    InvalidTransition,
    Transport,
    Rejected,
    Timeout,
    Other,
}

/// Optional structured payload attached to an error.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Payload {
    None,

    /// Goal state machine context (compact core ids, see `State::id`/`Transition::id`).
    GoalTransition { from_state: u8, via_transition: u8 },

    /// Goal the error belongs to.
    Goal(u64),
}

/// The one error type that crosses module boundaries in pickplace_core.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("{severity:?}: {message}")]
pub struct CoreError {
    pub domain: Domain,
    pub kind: ErrorKind,
    pub severity: Severity,
    pub message: Cow<'static, str>,
    pub payload: Payload,
}

impl CoreError {
    #[inline]
    pub fn warn() -> CoreErrorBuilder {
        CoreErrorBuilder::new(Severity::Warn)
    }
    #[inline]
    pub fn error() -> CoreErrorBuilder {
        CoreErrorBuilder::new(Severity::Error)
    }

    /// Goal state machine rejected `via_transition` from `from_state`.
    pub fn invalid_goal_transition(from_state: u8, via_transition: u8) -> Self {
        CoreError::warn()
            .domain(Domain::Goal)
            .kind(ErrorKind::InvalidTransition)
            .msg("invalid goal transition")
            .payload(Payload::GoalTransition {
                from_state,
                via_transition,
            })
            .build()
    }

    /// The motion service answered, but reported that the sequence failed.
    pub fn motion_rejected(goal: u64) -> Self {
        CoreError::warn()
            .domain(Domain::Motion)
            .kind(ErrorKind::Rejected)
            .msg("motion service reported failure")
            .payload(Payload::Goal(goal))
            .build()
    }

    /// The motion service could not be reached or returned garbage.
    pub fn motion_transport(detail: impl fmt::Display) -> Self {
        CoreError::error()
            .domain(Domain::Transport)
            .kind(ErrorKind::Transport)
            .msgf(format_args!("motion service call failed: {detail}"))
            .build()
    }

    /// No response from the motion service within `after`.
    pub fn motion_timeout(after: Duration) -> Self {
        CoreError::error()
            .domain(Domain::Transport)
            .kind(ErrorKind::Timeout)
            .msgf(format_args!(
                "motion service did not answer within {}ms",
                after.as_millis()
            ))
            .build()
    }
}

/// Fluent builder (takes self, returns Self).
///
/// Defaults: domain `Other`, kind `Other`, empty message, no payload.
#[derive(Debug, Clone)]
pub struct CoreErrorBuilder {
    domain: Domain,
    kind: ErrorKind,
    severity: Severity,
    message: Cow<'static, str>,
    payload: Payload,
}

impl CoreErrorBuilder {
    #[inline]
    fn new(severity: Severity) -> Self {
        Self {
            domain: Domain::Other,
            kind: ErrorKind::Other,
            severity,
            message: Cow::Borrowed(""),
            payload: Payload::None,
        }
    }

    #[inline]
    pub fn domain(mut self, d: Domain) -> Self {
        self.domain = d;
        self
    }

    #[inline]
    pub fn kind(mut self, k: ErrorKind) -> Self {
        self.kind = k;
        self
    }

    #[inline]
    pub fn msg(mut self, m: impl Into<Cow<'static, str>>) -> Self {
        self.message = m.into();
        self
    }

    #[inline]
    pub fn msgf(mut self, args: fmt::Arguments<'_>) -> Self {
        self.message = Cow::Owned(args.to_string());
        self
    }

    /// Replaces any previous payload.
    #[inline]
    pub fn payload(mut self, p: Payload) -> Self {
        self.payload = p;
        self
    }

    #[inline]
    pub fn build(self) -> CoreError {
        CoreError {
            domain: self.domain,
            kind: self.kind,
            severity: self.severity,
            message: self.message,
            payload: self.payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_other() {
        let e = CoreError::warn().msg("hello").build();
        assert_eq!(e.domain, Domain::Other);
        assert_eq!(e.kind, ErrorKind::Other);
        assert_eq!(e.payload, Payload::None);
        assert_eq!(e.to_string(), "Warn: hello");
    }

    #[test]
    fn timeout_error_mentions_duration() {
        let e = CoreError::motion_timeout(Duration::from_millis(250));
        assert_eq!(e.kind, ErrorKind::Timeout);
        assert_eq!(e.severity, Severity::Error);
        assert!(e.message.contains("250ms"));
    }
}
