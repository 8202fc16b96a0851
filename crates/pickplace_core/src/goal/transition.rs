use super::CallResult;

/// Requests that move the goal slot between states.
///
/// `Complete` carries the downstream call result; `Report` acknowledges that the
/// terminal outcome has been handed to the requester.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Transition {
    Accept,
    Preempt,
    Complete(CallResult),
    Report,
}

impl Transition {
    pub const fn id(self) -> u8 {
        match self {
            Transition::Accept => 1,
            Transition::Preempt => 2,
            Transition::Complete(CallResult::Success) => 3,
            Transition::Complete(CallResult::Failure) => 4,
            Transition::Report => 5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Transition::Accept => "accept",
            Transition::Preempt => "preempt",
            Transition::Complete(CallResult::Success) => "succeed",
            Transition::Complete(CallResult::Failure) => "abort",
            Transition::Report => "report",
        }
    }
}
