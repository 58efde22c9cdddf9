use crate::model::snapshot::GameSnapshot;

/// What the UI can ask of the engine.
pub enum GameCommand {
    /// Fetch a fresh lyric, discarding the current round and any pending
    /// timers. Sent at startup, by the "Get New Lyric" button, and by the
    /// celebration auto-advance.
    NewLyric,
    /// Evaluate the current guess texts against the round.
    SubmitGuesses { song: String, album: String },
}

/// What the engine reports back: a fresh snapshot after every state change.
/// The UI just renders the latest one it has received.
pub enum GameResponse {
    Snapshot(GameSnapshot),
}
