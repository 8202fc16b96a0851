/// Goal slot states.
///
/// `Idle` and `Active` are the working states; the other three are terminal and
/// are held only until the outcome has been reported.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum State {
    Idle,
    Active,
    Succeeded,
    Aborted,
    Preempted,
}

/// Internal, compact IDs used for error payloads.
///
/// These are **not** actionlib `GoalStatus` values; the adapter layer maps those.
impl State {
    pub const fn id(self) -> u8 {
        match self {
            State::Idle => 0,
            State::Active => 1,
            State::Succeeded => 2,
            State::Aborted => 3,
            State::Preempted => 4,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, State::Succeeded | State::Aborted | State::Preempted)
    }

    /// Terminal outcome carried by this state, if any.
    pub const fn outcome(self) -> Option<Outcome> {
        match self {
            State::Succeeded => Some(Outcome::Succeeded),
            State::Aborted => Some(Outcome::Aborted),
            State::Preempted => Some(Outcome::Preempted),
            State::Idle | State::Active => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            State::Idle => "Idle",
            State::Active => "Active",
            State::Succeeded => "Succeeded",
            State::Aborted => "Aborted",
            State::Preempted => "Preempted",
        }
    }
}

pub const ALL_STATES: [State; 5] = [
    State::Idle,
    State::Active,
    State::Succeeded,
    State::Aborted,
    State::Preempted,
];

/// The single terminal result reported for a goal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Outcome {
    Succeeded,
    Aborted,
    Preempted,
}

impl Outcome {
    pub const fn state(self) -> State {
        match self {
            Outcome::Succeeded => State::Succeeded,
            Outcome::Aborted => State::Aborted,
            Outcome::Preempted => State::Preempted,
        }
    }

    pub const fn label(self) -> &'static str {
        self.state().label()
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
