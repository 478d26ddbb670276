use eframe::egui;
use wordswipe::VocabApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("wordswipe=info")),
        )
        .init();

    tracing::info!("WordSwipe starting...");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("WordSwipe")
            .with_inner_size([520.0, 820.0])
            .with_min_inner_size([360.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native("WordSwipe", options, Box::new(|cc| Ok(Box::new(VocabApp::new(cc)))))
}
