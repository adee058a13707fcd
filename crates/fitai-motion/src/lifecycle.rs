//! Session lifecycle state machine.
//!
//! NotStarted → Running ⇄ Paused → Ended, with Ended → Running opening a
//! fresh session. Transitions requested from a state that does not allow
//! them are ignored, so duplicate control signals are harmless.

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No session has run yet.
    #[default]
    NotStarted,
    /// Frames are being processed.
    Running,
    /// Counters are held; frames are ignored.
    Paused,
    /// The last session has been finalized.
    Ended,
}

/// Outcome of a lifecycle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A fresh session began.
    Started,
    /// A paused session resumed with its counters intact.
    Resumed,
    /// A running session was paused.
    Paused,
    /// A running or paused session ended.
    Ended,
    /// The request was not valid from the current state; nothing changed.
    Ignored,
}

impl Transition {
    /// Returns `true` unless the request was ignored.
    #[must_use]
    pub fn changed(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Controls lifecycle transitions for one session object.
#[derive(Debug, Clone, Default)]
pub struct SessionLifecycle {
    state: SessionState,
}

impl SessionLifecycle {
    /// Create a new lifecycle in `NotStarted`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether frames should be processed.
    #[must_use]
    pub fn accepts_frames(&self) -> bool {
        self.state == SessionState::Running
    }

    /// Request a start.
    ///
    /// - NotStarted / Ended: → Running (fresh)
    /// - Paused: → Running (resume)
    /// - Running: ignored
    pub fn start(&mut self) -> Transition {
        match self.state {
            SessionState::NotStarted | SessionState::Ended => {
                self.state = SessionState::Running;
                Transition::Started
            }
            SessionState::Paused => {
                self.state = SessionState::Running;
                Transition::Resumed
            }
            SessionState::Running => Transition::Ignored,
        }
    }

    /// Request a pause. Only valid while Running.
    pub fn pause(&mut self) -> Transition {
        match self.state {
            SessionState::Running => {
                self.state = SessionState::Paused;
                Transition::Paused
            }
            SessionState::NotStarted | SessionState::Paused | SessionState::Ended => {
                Transition::Ignored
            }
        }
    }

    /// Request an end. Valid while Running or Paused.
    pub fn end(&mut self) -> Transition {
        match self.state {
            SessionState::Running | SessionState::Paused => {
                self.state = SessionState::Ended;
                Transition::Ended
            }
            SessionState::NotStarted | SessionState::Ended => Transition::Ignored,
        }
    }
}
