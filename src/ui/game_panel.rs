use std::time::Instant;

use eframe::egui;
use egui::{Color32, RichText};

use crate::engine::protocol::GameCommand;
use crate::model::snapshot::GamePhase;
use crate::ui::settings;
use super::app::App;

const FIELD_WIDTH: f32 = 240.0;
const MARK_WIDTH: f32 = 22.0;
const LOSS_FADE_SECS: f32 = 0.25;

const WIN_GREEN: Color32 = Color32::from_rgb(46, 204, 113);
const LOSS_RED: Color32 = Color32::from_rgb(231, 76, 60);

pub fn draw_game_panel(ctx: &egui::Context, app: &mut App) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                draw_header(ui, app);
                ui.add_space(12.0);

                match app.ui.snapshot.phase {
                    GamePhase::Loading => draw_loading(ui),
                    GamePhase::Ready | GamePhase::Complete => draw_round(ui, app),
                }

                ui.add_space(16.0);
                draw_options(ui, app);
                ui.add_space(10.0);
            });
        });
    });
}

/* =========================
   Sections
   ========================= */

fn draw_header(ui: &mut egui::Ui, app: &App) {
    ui.add_space(18.0);
    ui.label(RichText::new("Bar & Car").size(30.0).strong());
    ui.label(RichText::new("🍸 🚗 🍹 🚙 🥂 🚕").size(18.0));
    ui.add_space(4.0);
    ui.label("Guess the song and the album it belongs to.");
    ui.add_space(6.0);
    ui.label(RichText::new(format!("🔥 Streak: {}", app.ui.snapshot.streak)).size(16.0));
}

fn draw_loading(ui: &mut egui::Ui) {
    ui.add_space(40.0);
    ui.spinner();
    ui.add_space(8.0);
    ui.label("Pulling a lyric out of the vault…");
}

fn draw_round(ui: &mut egui::Ui, app: &mut App) {
    let snapshot = app.ui.snapshot.clone();

    match snapshot.lyric.as_deref() {
        Some(lyric) => {
            ui.label(RichText::new(format!("“{}”", lyric)).size(19.0).italics());
        }
        None => {
            ui.label("No lyric right now. The jukebox may be offline; try again.");
        }
    }

    ui.add_space(10.0);

    // One ❌ per wrong attempt spent so far.
    if snapshot.wrong_attempts > 0 {
        ui.label(RichText::new("❌".repeat(snapshot.wrong_attempts as usize)).size(16.0));
    }

    if let Some(reveal) = &snapshot.reveal {
        ui.add_space(4.0);
        ui.label(
            RichText::new(format!("It was “{}” from {}.", reveal.song, reveal.album))
                .size(16.0)
                .strong(),
        );
    }

    ui.add_space(12.0);

    let enabled = snapshot.inputs_enabled();
    let mut submit_now = false;

    guess_row(
        ui,
        "Song",
        &mut app.ui.song_guess,
        snapshot.song_correct,
        enabled,
        &mut submit_now,
    );
    ui.add_space(6.0);
    guess_row(
        ui,
        "Album",
        &mut app.ui.album_guess,
        snapshot.album_correct,
        enabled,
        &mut submit_now,
    );

    ui.add_space(10.0);

    ui.horizontal(|ui| {
        let pad = ((ui.available_width() - 220.0) * 0.5).max(0.0);
        ui.add_space(pad);

        if ui
            .add_enabled(enabled, egui::Button::new("Check Answers"))
            .clicked()
        {
            submit_now = true;
        }
        if ui.button("🔀 Get New Lyric").clicked() {
            app.send_command(GameCommand::NewLyric);
        }
    });

    if submit_now && enabled {
        app.send_command(GameCommand::SubmitGuesses {
            song: app.ui.song_guess.clone(),
            album: app.ui.album_guess.clone(),
        });
    }

    if let Some(message) = snapshot.win_message {
        ui.add_space(10.0);
        ui.label(RichText::new(message).size(22.0).strong().color(WIN_GREEN));
    }

    if let Some(message) = snapshot.loss_message {
        ui.add_space(10.0);
        let alpha = loss_fade_alpha(ui.ctx(), app.ui.loss_shown_at);
        ui.label(
            RichText::new(message)
                .size(18.0)
                .strong()
                .color(LOSS_RED.gamma_multiply(alpha)),
        );
    }
}

fn draw_options(ui: &mut egui::Ui, app: &mut App) {
    ui.collapsing("⚙ Options", |ui| {
        ui.label("UI Scale");
        let slider = ui.add(egui::Slider::new(
            &mut app.ui.settings.ui_scale,
            settings::MIN_UI_SCALE..=settings::MAX_UI_SCALE,
        ));
        if slider.drag_stopped() {
            settings::save_settings(&app.ui.settings);
        }
    });
}

/* =========================
   Widgets
   ========================= */

fn guess_row(
    ui: &mut egui::Ui,
    hint: &str,
    text: &mut String,
    correct: bool,
    enabled: bool,
    submit_now: &mut bool,
) {
    ui.horizontal(|ui| {
        let pad = ((ui.available_width() - FIELD_WIDTH - MARK_WIDTH) * 0.5).max(0.0);
        ui.add_space(pad);

        let field = ui.add_enabled(
            enabled,
            egui::TextEdit::singleline(text)
                .hint_text(hint)
                .desired_width(FIELD_WIDTH),
        );

        // The slot is always reserved so the row does not shift when the
        // mark appears.
        let mark = if correct { "✅" } else { "" };
        ui.add_sized([MARK_WIDTH, 18.0], egui::Label::new(mark));

        if field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            *submit_now = true;
        }
    });
}

/// Ramps the taunt in over a quarter second so a repeated miss visibly
/// re-triggers it.
fn loss_fade_alpha(ctx: &egui::Context, shown_at: Option<Instant>) -> f32 {
    let Some(shown_at) = shown_at else {
        return 1.0;
    };
    let t = shown_at.elapsed().as_secs_f32() / LOSS_FADE_SECS;
    if t < 1.0 {
        ctx.request_repaint();
    }
    t.clamp(0.0, 1.0)
}
