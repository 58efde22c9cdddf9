use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::time::Instant;

use log::{error, info, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::engine::config::EngineConfig;
use crate::engine::evaluate::{apply_submission, SubmissionOutcome};
use crate::engine::lyric_client::LyricSource;
use crate::engine::protocol::{GameCommand, GameResponse};
use crate::engine::sampler::RotationSampler;
use crate::engine::schedule::{TaskPurpose, TaskQueue};
use crate::engine::streak::StreakStore;
use crate::model::feedback::{LOSS_MESSAGES, WIN_MESSAGES};
use crate::model::round::Round;
use crate::model::snapshot::{GamePhase, GameSnapshot, RevealedAnswer};

/* =============================
   Engine
   ============================= */

/// Owns all game state and mutates it on a single thread. The UI never
/// touches `Round` directly; it sends commands and renders the snapshots
/// that come back.
pub struct Engine {
    rx: Receiver<GameCommand>,
    tx: Sender<GameResponse>,
    source: Box<dyn LyricSource>,
    store: Box<dyn StreakStore>,
    config: EngineConfig,
    wake: Box<dyn Fn() + Send>,
    rng: StdRng,
    tasks: TaskQueue,
    streak: u32,
    round: Option<Round>,
    loading: bool,
    round_id: u64,
    taunts: RotationSampler,
    win_message: Option<&'static str>,
    loss_message: Option<&'static str>,
    loss_seq: u32,
}

impl Engine {
    pub fn new(
        rx: Receiver<GameCommand>,
        tx: Sender<GameResponse>,
        source: Box<dyn LyricSource>,
        store: Box<dyn StreakStore>,
        config: EngineConfig,
        wake: Box<dyn Fn() + Send>,
    ) -> Self {
        let streak = store.read();
        info!("restored a streak of {}", streak);

        Self {
            rx,
            tx,
            source,
            store,
            config,
            wake,
            rng: StdRng::from_entropy(),
            tasks: TaskQueue::new(),
            streak,
            round: None,
            loading: false,
            round_id: 0,
            taunts: RotationSampler::new(LOSS_MESSAGES.len()),
            win_message: None,
            loss_message: None,
            loss_seq: 0,
        }
    }

    /// Command loop. Blocks on the channel, waking early whenever a
    /// scheduled task comes due. Returns once the UI side hangs up.
    pub fn run(&mut self) {
        loop {
            let cmd = match self.tasks.next_deadline() {
                Some(deadline) => {
                    let wait = deadline.saturating_duration_since(Instant::now());
                    match self.rx.recv_timeout(wait) {
                        Ok(cmd) => Some(cmd),
                        Err(RecvTimeoutError::Timeout) => None,
                        Err(RecvTimeoutError::Disconnected) => return,
                    }
                }
                None => match self.rx.recv() {
                    Ok(cmd) => Some(cmd),
                    Err(_) => return,
                },
            };

            match cmd {
                Some(cmd) => self.handle_command(cmd),
                None => self.fire_due_tasks(),
            }
        }
    }

    fn handle_command(&mut self, cmd: GameCommand) {
        match cmd {
            GameCommand::NewLyric => self.start_new_round(),
            GameCommand::SubmitGuesses { song, album } => self.submit_guesses(&song, &album),
        }
    }

    fn fire_due_tasks(&mut self) {
        for purpose in self.tasks.take_due(Instant::now()) {
            match purpose {
                TaskPurpose::Celebration => self.start_new_round(),
                TaskPurpose::ClearLossFeedback => {
                    self.loss_message = None;
                    self.publish();
                }
            }
        }
    }

    /* =============================
       State transitions
       ============================= */

    /// Throw away the current round and fetch the next lyric. The fetch
    /// blocks the whole engine thread; that is safe because every pending
    /// task is canceled first, so nothing can come due mid-fetch.
    fn start_new_round(&mut self) {
        self.tasks.cancel_all();
        self.round = None;
        self.win_message = None;
        self.loss_message = None;
        self.loss_seq = 0;
        self.taunts.reset();

        self.loading = true;
        self.publish();

        match self.source.fetch() {
            Ok(quote) => {
                self.round = Some(Round::new(quote));
                self.round_id += 1;
                info!("fetched a new lyric");
            }
            Err(err) => {
                error!("could not fetch a lyric: {:#}", err);
            }
        }

        self.loading = false;
        self.publish();
    }

    fn submit_guesses(&mut self, song: &str, album: &str) {
        if self.loading {
            return;
        }
        let Some(round) = self.round.as_mut() else {
            warn!("guesses submitted with no round loaded, ignoring");
            return;
        };

        match apply_submission(round, song, album) {
            // Nothing moved, so the UI has nothing new to render.
            SubmissionOutcome::Locked | SubmissionOutcome::NoChange => return,

            SubmissionOutcome::Solved => {
                self.streak += 1;
                self.store.write(self.streak);
                self.win_message = WIN_MESSAGES.choose(&mut self.rng).copied();
                self.tasks
                    .schedule(TaskPurpose::Celebration, self.config.celebration_delay);
                info!("round solved, streak is now {}", self.streak);
            }

            SubmissionOutcome::Miss { locked } => {
                self.loss_message = Some(LOSS_MESSAGES[self.taunts.pick(&mut self.rng)]);
                self.loss_seq += 1;
                self.tasks
                    .schedule(TaskPurpose::ClearLossFeedback, self.config.feedback_delay);
                if locked {
                    self.streak = 0;
                    self.store.write(0);
                    info!("round lost, streak reset");
                }
            }
        }

        self.publish();
    }

    /* =============================
       Publication
       ============================= */

    fn publish(&self) {
        let _ = self.tx.send(GameResponse::Snapshot(self.snapshot()));
        (self.wake)();
    }

    fn snapshot(&self) -> GameSnapshot {
        let phase = if self.loading {
            GamePhase::Loading
        } else if self.round.as_ref().map_or(false, Round::complete) {
            GamePhase::Complete
        } else {
            GamePhase::Ready
        };

        let reveal = self
            .round
            .as_ref()
            .filter(|round| round.locked())
            .map(|round| RevealedAnswer {
                song: round.song.clone(),
                album: round.album.clone(),
            });

        GameSnapshot {
            phase,
            streak: self.streak,
            round_id: self.round_id,
            lyric: self.round.as_ref().map(|round| round.lyric.clone()),
            song_correct: self.round.as_ref().map_or(false, |r| r.song_correct),
            album_correct: self.round.as_ref().map_or(false, |r| r.album_correct),
            wrong_attempts: self.round.as_ref().map_or(0, |r| r.wrong_attempts),
            reveal,
            win_message: self.win_message,
            loss_message: self.loss_message,
            loss_seq: self.loss_seq,
        }
    }
}

/* =============================
   Tests
   ============================= */
