/// Where the round lifecycle currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Fetch in flight; no guesses accepted.
    Loading,
    /// Round open for guesses, or no round at all after a failed fetch.
    Ready,
    /// Locked or solved; inputs disabled until the next lyric.
    Complete,
}

/// Answers shown to the player once a round locks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealedAnswer {
    pub song: String,
    pub album: String,
}

/// A full copy of the renderable game state, published by the engine after
/// every state change. READ-ONLY outside the engine.
///
/// The song/album answers travel only inside `reveal`, and only once the
/// round is locked, so a snapshot in UI hands never spoils an open round.
#[derive(Debug, Clone)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub streak: u32,
    /// Increments whenever a round is fetched; the UI clears its guess
    /// buffers when it changes.
    pub round_id: u64,
    pub lyric: Option<String>,
    pub song_correct: bool,
    pub album_correct: bool,
    pub wrong_attempts: u8,
    pub reveal: Option<RevealedAnswer>,
    pub win_message: Option<&'static str>,
    pub loss_message: Option<&'static str>,
    /// Bumps on every new loss message so the UI can restart its fade-in
    /// even while the previous taunt is still on screen.
    pub loss_seq: u32,
}

impl GameSnapshot {
    /// What the UI renders before the engine's first publication.
    pub fn initial() -> Self {
        Self {
            phase: GamePhase::Loading,
            streak: 0,
            round_id: 0,
            lyric: None,
            song_correct: false,
            album_correct: false,
            wrong_attempts: 0,
            reveal: None,
            win_message: None,
            loss_message: None,
            loss_seq: 0,
        }
    }

    /// Guess inputs and the submit control react only while a round is
    /// actually open.
    pub fn inputs_enabled(&self) -> bool {
        self.phase == GamePhase::Ready && self.lyric.is_some()
    }
}
