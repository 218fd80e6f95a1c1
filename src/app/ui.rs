use egui::Context;
use image::ImageReader;
use std::sync::{Arc, Mutex};

use super::state::NO_CONTRIBUTORS;
use super::App;
use crate::github::{lookup, parse_repo_url, GitHubClient};

/// Draw the main application UI
pub fn draw_ui(app: &mut App, ctx: &Context, app_arc: Arc<Mutex<App>>) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Repo Insight");
        ui.separator();

        ui.label("Enter a GitHub repository URL:");
        ui.horizontal(|ui| {
            ui.text_edit_singleline(&mut app.repo_url);
            if ui.button("Fetch").clicked() && !app.in_flight {
                submit(app, app_arc.clone());
            }
        });

        if app.in_flight {
            ui.label("Fetching... Please wait.");
            ui.spinner();
            // Results land from a background task; keep repainting until the
            // cycle finishes.
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        if let Some(message) = &app.error_message {
            ui.colored_label(egui::Color32::from_rgb(255, 100, 100), message);
        }

        ui.separator();
        egui::ScrollArea::vertical().show(ui, |ui| {
            draw_repo_info(app, ui);
            draw_contributors(app, ui);
            draw_commit_activity(app, ui);
        });
    });

    // Rebuild the chart image when a new series arrived
    if app.chart_dirty {
        if let Some(series) = app.chart_series.clone() {
            match crate::plotting::generate_chart(&series, &app.chart_path) {
                Ok(()) => load_chart_texture(app, ctx),
                Err(e) => tracing::error!("chart rendering failed: {e}"),
            }
        }
        app.chart_dirty = false;
    }
}

fn submit(app: &mut App, app_arc: Arc<Mutex<App>>) {
    app.reset_results();

    let input = app.repo_url.trim().to_string();
    let Some(id) = parse_repo_url(&input) else {
        app.set_error(lookup::INVALID_URL);
        return;
    };

    let client = match GitHubClient::new() {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("failed to build HTTP client: {e}");
            app.set_error(lookup::FETCH_FAILED);
            return;
        }
    };

    app.in_flight = true;
    tokio::spawn(lookup::run_lookup(app_arc, client, id));
}

fn draw_repo_info(app: &App, ui: &mut egui::Ui) {
    let Some(metadata) = &app.metadata else {
        return;
    };

    ui.heading(&metadata.full_name);
    ui.label(metadata.description.as_deref().unwrap_or(""));
    ui.label(format!(
        "Stars: {} | Forks: {} | Watchers: {}",
        metadata.stargazers_count, metadata.forks_count, metadata.watchers_count
    ));
    ui.hyperlink_to("View on GitHub", &metadata.html_url);
    ui.separator();
}

fn draw_contributors(app: &App, ui: &mut egui::Ui) {
    let Some(contributors) = &app.contributors else {
        return;
    };

    if contributors.is_empty() {
        ui.label(NO_CONTRIBUTORS);
        ui.separator();
        return;
    }

    ui.heading("Top Contributors");
    for contributor in contributors.iter().take(10) {
        ui.horizontal(|ui| {
            ui.hyperlink_to(&contributor.login, &contributor.html_url);
            ui.label(format!("({} commits)", contributor.contributions));
        });
    }
    ui.separator();
}

fn draw_commit_activity(app: &App, ui: &mut egui::Ui) {
    if let Some(notice) = &app.activity_notice {
        ui.label(notice);
        return;
    }

    if let Some(texture) = &app.chart_texture {
        ui.heading("Commit Activity");
        ui.image(texture);
    }
}

fn load_chart_texture(app: &mut App, ctx: &Context) {
    if let Ok(image) = ImageReader::open(&app.chart_path).and_then(|reader| {
        reader
            .decode()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }) {
        let size = [image.width() as usize, image.height() as usize];
        let pixels = image.to_rgba8();
        let pixels = pixels.as_flat_samples();
        let texture = ctx.load_texture(
            "chart_texture",
            egui::ColorImage::from_rgba_unmultiplied(size, pixels.as_slice()),
            egui::TextureOptions::LINEAR,
        );
        app.chart_texture = Some(texture);
    } else {
        tracing::error!("failed to load chart image");
    }
}
