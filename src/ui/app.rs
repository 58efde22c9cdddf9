use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use eframe::egui;

use crate::engine::config::EngineConfig;
use crate::engine::engine::Engine;
use crate::engine::lyric_client::HttpLyricSource;
use crate::engine::protocol::{GameCommand, GameResponse};
use crate::engine::streak::FileStreakStore;
use crate::model::snapshot::GameSnapshot;
use crate::ui::confetti::Confetti;
use crate::ui::game_panel::draw_game_panel;
use crate::ui::settings::{self, UiSettings};

/* =========================
   UI State
   ========================= */

pub struct UiState {
    pub song_guess: String,
    pub album_guess: String,
    pub snapshot: GameSnapshot,
    pub settings: UiSettings,
    /// Set whenever a new taunt lands, so the fade-in restarts even while
    /// the previous one is still on screen.
    pub loss_shown_at: Option<Instant>,
}

/* =========================
   App
   ========================= */

pub struct App {
    pub ui: UiState,
    confetti: Confetti,
    cmd_tx: mpsc::Sender<GameCommand>,
    resp_rx: mpsc::Receiver<GameResponse>,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();

        let config = EngineConfig::default();
        let api_url = config.api_url.clone();
        let egui_ctx = cc.egui_ctx.clone();

        thread::spawn(move || {
            let mut engine = Engine::new(
                cmd_rx,
                resp_tx,
                Box::new(HttpLyricSource::new(api_url)),
                Box::new(FileStreakStore::new()),
                config,
                Box::new(move || egui_ctx.request_repaint()),
            );
            engine.run();
        });

        let _ = cmd_tx.send(GameCommand::NewLyric);

        Self {
            ui: UiState {
                song_guess: String::new(),
                album_guess: String::new(),
                snapshot: GameSnapshot::initial(),
                settings: settings::load_settings(),
                loss_shown_at: None,
            },
            confetti: Confetti::default(),
            cmd_tx,
            resp_rx,
        }
    }

    pub(crate) fn send_command(&self, cmd: GameCommand) {
        let _ = self.cmd_tx.send(cmd);
    }

    /// Fold a fresh snapshot into the UI, reacting to the transitions the
    /// renderer cannot see on its own.
    fn absorb_snapshot(&mut self, ctx: &egui::Context, snapshot: GameSnapshot) {
        let round_changed = snapshot.round_id != self.ui.snapshot.round_id;
        let win_landed =
            snapshot.win_message.is_some() && self.ui.snapshot.win_message.is_none();
        let taunt_landed =
            snapshot.loss_seq != self.ui.snapshot.loss_seq && snapshot.loss_message.is_some();

        if round_changed {
            self.ui.song_guess.clear();
            self.ui.album_guess.clear();
        }
        if win_landed {
            self.confetti
                .burst(ctx.screen_rect(), &mut rand::thread_rng());
        }
        if taunt_landed {
            self.ui.loss_shown_at = Some(Instant::now());
        }

        self.ui.snapshot = snapshot;
    }
}

/* =========================
   egui App
   ========================= */

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        ctx.set_pixels_per_point(self.ui.settings.clamped_scale());

        while let Ok(GameResponse::Snapshot(snapshot)) = self.resp_rx.try_recv() {
            self.absorb_snapshot(ctx, snapshot);
        }

        draw_game_panel(ctx, self);
        self.confetti.update(ctx);
    }
}
