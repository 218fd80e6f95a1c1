//! GitHub Repository Insight Tool
//!
//! A GUI application for looking up a GitHub repository and visualizing its
//! metadata, contributors, and recent commit activity.

use eframe::egui;
use std::sync::{Arc, Mutex};
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;

use repoinsight::app::{App, AppWrapper};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Initialize the Tokio runtime; fetch tasks are spawned from the UI
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1000.0, 760.0])
                .with_min_inner_size([700.0, 500.0])
                .with_title("Repo Insight"),
            ..Default::default()
        };

        if let Err(e) = eframe::run_native(
            "Repo Insight",
            options,
            Box::new(|cc| {
                // Configure default fonts and style
                let fonts = egui::FontDefinitions::default();
                cc.egui_ctx.set_fonts(fonts);

                let app: Arc<Mutex<App>> = Arc::new(Mutex::new(App::default()));
                Ok(Box::new(AppWrapper { app }) as Box<dyn eframe::App>)
            }),
        ) {
            tracing::error!("error running application: {}", e);
        }
    });
}
