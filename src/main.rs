mod app;
mod curve;
mod error;
mod image_io;
mod processor;
mod store;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([960.0, 520.0])
            .with_min_inner_size([700.0, 400.0])
            .with_title("Tone Curve"),
        ..Default::default()
    };

    eframe::run_native(
        "Tone Curve",
        options,
        Box::new(|cc| Ok(Box::new(app::ToneCurveApp::new(cc)))),
    )
}
