//! # Restaurant Staff Trainer - Native Entry Point
//!
//! Loads configuration, initializes logging, enters a Tokio runtime for the
//! async data calls, and hands the window to eframe.

use anyhow::Result;
use eframe::egui::ViewportBuilder;

use trainer::app::App;
use trainer::config::AppConfig;
use trainer::debug;
use trainer::ui::{self, theme::Theme, widgets::notifications::NotificationManager};

const WINDOW_TITLE: &str = "Staff Trainer";

/// eframe wrapper: drains events, then renders one frame
struct TrainerWindow {
    app: App,
    notifications: NotificationManager,
}

impl eframe::App for TrainerWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();
        ui::render(ctx, &mut self.app, &mut self.notifications);
    }
}

fn main() -> Result<()> {
    debug::init();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting staff trainer");

    let config = AppConfig::from_env()?;
    config.validate()?;

    let runtime = tokio::runtime::Runtime::new()?;
    let _guard = runtime.enter();

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([420.0, 820.0])
            .with_min_inner_size([360.0, 600.0])
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Theme::apply(&cc.egui_ctx);
            let app = App::new(&config);
            Ok(Box::new(TrainerWindow {
                app,
                notifications: NotificationManager::new(),
            }))
        }),
    )
    .map_err(|err| anyhow::anyhow!(err.to_string()))
}
