//! Interpretation of transcribed voice commands.

/// A control command recognised in a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceCommand {
    /// Start or resume the session.
    Start,
    /// Pause the session.
    Pause,
    /// End the session.
    End,
    /// Ask for the current rep count.
    RepQuery,
    /// The user is struggling; reply with encouragement.
    Encourage,
}

impl VoiceCommand {
    /// Matches a transcript by keyword, case-insensitively.
    ///
    /// Earlier commands win when several keywords appear, so "stop and end"
    /// is a [`Pause`](Self::Pause).
    #[must_use]
    pub fn parse(transcript: &str) -> Option<Self> {
        let text = transcript.trim().to_lowercase();
        if text.contains("start") {
            Some(Self::Start)
        } else if text.contains("pause") || text.contains("stop") {
            Some(Self::Pause)
        } else if text.contains("end") || text.contains("finish") {
            Some(Self::End)
        } else if text.contains("how many") {
            Some(Self::RepQuery)
        } else if text.contains("i can't") || text.contains("can't do") {
            Some(Self::Encourage)
        } else {
            None
        }
    }
}
