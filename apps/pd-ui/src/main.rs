#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod report_worker;

use app::PumpdocApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("PumpDoc"),
        ..Default::default()
    };

    eframe::run_native(
        "PumpDoc",
        options,
        Box::new(|cc| Ok(Box::new(PumpdocApp::new(cc)))),
    )
}
