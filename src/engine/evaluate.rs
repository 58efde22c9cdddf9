use crate::engine::normalize::guess_matches;
use crate::model::round::{Round, MAX_WRONG_ATTEMPTS};

/// What a submission did to the round, so the engine knows which side
/// effects to run (streak writes, feedback, timers).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Round already locked; the submission was ignored.
    Locked,
    /// Round was already solved; nothing changed.
    NoChange,
    /// Both fields are correct for the first time.
    Solved,
    /// A wrong attempt was consumed. `locked` is true when it was the third.
    Miss { locked: bool },
}

/// Evaluate one submission against the round.
///
/// Song and album are scored independently, and correctness is monotonic: a
/// field marked correct stays correct for the rest of the round no matter
/// what later submissions contain. The wrong-attempt counter never passes
/// `MAX_WRONG_ATTEMPTS`. Re-submitting an already-correct field while the
/// other is wrong still costs an attempt.
pub fn apply_submission(
    round: &mut Round,
    song_guess: &str,
    album_guess: &str,
) -> SubmissionOutcome {
    if round.locked() {
        return SubmissionOutcome::Locked;
    }
    if round.solved() {
        return SubmissionOutcome::NoChange;
    }

    if !round.song_correct && guess_matches(song_guess, &round.song) {
        round.song_correct = true;
    }
    if !round.album_correct && guess_matches(album_guess, &round.album) {
        round.album_correct = true;
    }

    if round.solved() {
        // Not solved on entry, solved now: the one transition that scores.
        return SubmissionOutcome::Solved;
    }

    round.wrong_attempts = (round.wrong_attempts + 1).min(MAX_WRONG_ATTEMPTS);
    SubmissionOutcome::Miss {
        locked: round.locked(),
    }
}
