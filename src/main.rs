use eframe::egui;
use warbler_client::app::WarblerApp;

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Warbler")
            .with_inner_size([520.0, 760.0])
            .with_min_inner_size([380.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Warbler",
        options,
        Box::new(|cc| Ok(Box::new(WarblerApp::new(cc)))),
    )
}
