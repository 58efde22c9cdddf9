use crate::model::lyric::LyricQuote;

/// Wrong submissions allowed before a round locks and the answers are
/// revealed.
pub const MAX_WRONG_ATTEMPTS: u8 = 3;

/// One lyric-guessing session, from fetch to completion.
/// Owned and mutated by the engine only; the UI sees a `GameSnapshot`.
#[derive(Debug, Clone)]
pub struct Round {
    pub lyric: String,
    pub song: String,
    pub album: String,
    pub song_correct: bool,
    pub album_correct: bool,
    pub wrong_attempts: u8,
}

impl Round {
    pub fn new(quote: LyricQuote) -> Self {
        Self {
            lyric: quote.quote,
            song: quote.song,
            album: quote.album,
            song_correct: false,
            album_correct: false,
            wrong_attempts: 0,
        }
    }

    /// Three wrong attempts spent; further submissions are ignored.
    pub fn locked(&self) -> bool {
        self.wrong_attempts >= MAX_WRONG_ATTEMPTS
    }

    /// Both fields guessed correctly.
    pub fn solved(&self) -> bool {
        self.song_correct && self.album_correct
    }

    /// Complete iff locked or solved. Derived, never stored.
    pub fn complete(&self) -> bool {
        self.locked() || self.solved()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round() -> Round {
        Round::new(LyricQuote {
            quote: "meet me behind the mall".into(),
            song: "Getaway Car".into(),
            album: "Reputation".into(),
        })
    }

    #[test]
    fn fresh_round_is_open() {
        let r = round();
        assert!(!r.locked());
        assert!(!r.solved());
        assert!(!r.complete());
    }

    #[test]
    fn complete_via_either_path() {
        let mut by_lock = round();
        by_lock.wrong_attempts = MAX_WRONG_ATTEMPTS;
        assert!(by_lock.complete() && !by_lock.solved());

        let mut by_solve = round();
        by_solve.song_correct = true;
        by_solve.album_correct = true;
        assert!(by_solve.complete() && !by_solve.locked());
    }

    #[test]
    fn one_correct_field_is_not_complete() {
        let mut r = round();
        r.song_correct = true;
        assert!(!r.complete());
    }
}
