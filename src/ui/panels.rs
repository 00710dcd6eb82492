use std::path::Path;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::analysis::compare::Assessment;
use crate::analysis::config::AnalysisConfig;
use crate::data::model::Vowel;
use crate::data::{filter, loader};
use crate::state::{AppState, VowelSource};

// ---------------------------------------------------------------------------
// Left side panel – vowel data and findings
// ---------------------------------------------------------------------------

/// Render the left panel: logo, per-vowel sources, interpretation.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    // ---- Logo (centered) ----
    let logo = egui::include_image!("../../assets/logo.png");
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add(
            egui::Image::new(logo)
                .max_width(ui.available_width() * 0.8)
                .max_height(120.0)
                .rounding(4.0),
        );
    });
    ui.add_space(4.0);

    ui.heading("Vowel data");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for vowel in Vowel::ALL {
                vowel_row(ui, state, vowel);
            }

            ui.separator();
            findings_section(ui, state);
        });
}

fn vowel_row(ui: &mut Ui, state: &mut AppState, vowel: Vowel) {
    ui.horizontal(|ui: &mut Ui| {
        let color = state.palette.color_for(vowel);
        ui.label(RichText::new(format!("/{vowel}/")).color(color).strong());

        if ui.button("Load…").clicked() {
            load_vowel_dialog(state, vowel);
        }

        match state.sources.get(&vowel) {
            Some(source) => {
                let valid = state.dataset.samples(vowel).len();
                ui.label(format!(
                    "{} – {valid}/{} frames",
                    source.file_name, source.total_rows
                ));
            }
            None => {
                ui.label(RichText::new("not loaded").weak());
            }
        }
    });
}

fn findings_section(ui: &mut Ui, state: &AppState) {
    ui.heading("Interpretation");
    match &state.report {
        Some(report) => {
            for finding in &report.findings {
                let text = format!("• {finding}");
                let label = match finding.assessment {
                    Assessment::WithinNormalRange => RichText::new(text).weak(),
                    _ => RichText::new(text).color(Color32::LIGHT_RED),
                };
                ui.label(label);
            }
        }
        None => {
            ui.label(RichText::new("Load all three vowels to see the interpretation.").weak());
        }
    }
}

// ---------------------------------------------------------------------------
// Bottom panel – summary table
// ---------------------------------------------------------------------------

/// Render the seven-row summary table.  No-op without a report.
pub fn report_table(ui: &mut Ui, state: &AppState) {
    let Some(report) = &state.report else {
        return;
    };

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(220.0))
        .columns(Column::auto().at_least(110.0), 3)
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Metric");
            });
            header.col(|ui| {
                ui.strong("Norm");
            });
            header.col(|ui| {
                ui.strong("Participant");
            });
            header.col(|ui| {
                ui.strong("Participant − Norm");
            });
        })
        .body(|mut body| {
            for row in &report.rows {
                body.row(18.0, |mut table_row| {
                    table_row.col(|ui| {
                        ui.label(&row.metric);
                    });
                    table_row.col(|ui| {
                        ui.label(format!("{:.2}", row.normative));
                    });
                    table_row.col(|ui| {
                        ui.label(format!("{:.2}", row.participant));
                    });
                    table_row.col(|ui| {
                        ui.label(format!("{:.2}", row.difference));
                    });
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open folder…").clicked() {
                open_folder_dialog(state);
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Load reference…").clicked() {
                load_reference_dialog(state);
                ui.close_menu();
            }
            if ui.button("Save reference…").clicked() {
                save_reference_dialog(state);
                ui.close_menu();
            }
            ui.separator();
            if ui
                .add_enabled(state.report.is_some(), egui::Button::new("Export report…"))
                .clicked()
            {
                export_report_dialog(state);
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Clear").clicked() {
                state.clear();
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!("{}/3 vowels loaded", state.dataset.loaded_count()));
        if let Some(report) = &state.report {
            ui.separator();
            ui.label(format!("VSA {:.2} Hz²", report.participant_vsa));
        }

        ui.separator();

        if ui
            .selectable_label(state.show_normative, "Normative overlay")
            .clicked()
        {
            state.show_normative = !state.show_normative;
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

/// Pick and load the formant table for one vowel.
pub fn load_vowel_dialog(state: &mut AppState, vowel: Vowel) {
    let file = rfd::FileDialog::new()
        .set_title(&format!("Open formant table for /{vowel}/"))
        .add_filter("Formant tables", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        load_vowel_from_path(state, vowel, &path);
    }
}

/// Load one vowel's table from a known path (shared by the file and
/// folder flows).  A table rejected by the filter leaves previously
/// loaded data for the vowel untouched.
fn load_vowel_from_path(state: &mut AppState, vowel: Vowel, path: &Path) {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("table")
        .to_string();

    match loader::load_table(path) {
        Ok(table) => match filter::clean_samples(&table) {
            Ok(samples) => {
                log::info!(
                    "Loaded {}/{} frames for /{vowel}/ from {}",
                    samples.len(),
                    table.rows.len(),
                    path.display()
                );
                state.set_vowel_samples(
                    vowel,
                    VowelSource {
                        file_name,
                        total_rows: table.rows.len(),
                    },
                    samples,
                );
            }
            Err(e) => {
                log::error!("Rejected table for /{vowel}/: {e}");
                state.status_message = Some(format!("Error in {file_name}: {e}"));
            }
        },
        Err(e) => {
            log::error!("Failed to load file: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}

/// Scan a folder for `i.*`, `a.*`, `u.*` tables and load what is there.
pub fn open_folder_dialog(state: &mut AppState) {
    let Some(dir) = rfd::FileDialog::new()
        .set_title("Open folder with per-vowel tables")
        .pick_folder()
    else {
        return;
    };

    let mut missing = Vec::new();
    for vowel in Vowel::ALL {
        match loader::vowel_file_in(&dir, vowel) {
            Some(path) => load_vowel_from_path(state, vowel, &path),
            None => missing.push(format!("/{vowel}/")),
        }
    }
    if !missing.is_empty() {
        log::warn!("No table for {} in {}", missing.join(", "), dir.display());
        state.status_message = Some(format!("No table found for {}", missing.join(", ")));
    }
}

/// Load a normative reference / thresholds JSON.
pub fn load_reference_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Load normative reference")
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match AnalysisConfig::load_from(&path) {
            Ok(config) => {
                log::info!("Loaded analysis config from {}", path.display());
                state.set_config(config);
            }
            Err(e) => {
                log::error!("Failed to load config: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

/// Save the current reference / thresholds as JSON.
pub fn save_reference_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Save normative reference")
        .add_filter("JSON", &["json"])
        .set_file_name("reference.json")
        .save_file();

    if let Some(path) = file {
        if let Err(e) = state.config.save_to(&path) {
            log::error!("Failed to save config: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}

/// Export the current report as JSON.
pub fn export_report_dialog(state: &mut AppState) {
    let Some(report) = state.report.clone() else {
        return;
    };

    let file = rfd::FileDialog::new()
        .set_title("Export report")
        .add_filter("JSON", &["json"])
        .set_file_name("vowelspace-report.json")
        .save_file();

    if let Some(path) = file {
        match report.export_json(&path) {
            Ok(()) => log::info!("Exported report to {}", path.display()),
            Err(e) => {
                log::error!("Failed to export report: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
