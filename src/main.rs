mod engine;
mod model;
mod ui;

fn main() -> eframe::Result<()> {
    colog::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Bar & Car")
            .with_inner_size([460.0, 680.0])
            .with_min_inner_size([380.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Bar & Car",
        options,
        Box::new(|cc| Ok(Box::new(ui::app::App::new(cc)))),
    )
}
