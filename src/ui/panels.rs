use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – per-case statistics
// ---------------------------------------------------------------------------

/// Render the case table: sample count, mean and median per box.
pub fn side_panel(ui: &mut Ui, state: &AppState) {
    ui.heading("Cases");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            egui::Grid::new("case_stats")
                .striped(true)
                .num_columns(4)
                .show(ui, |ui: &mut Ui| {
                    ui.strong("Case");
                    ui.strong("n");
                    ui.strong("Mean");
                    ui.strong("Median");
                    ui.end_row();

                    for summary in &state.summaries {
                        let color = state.colors.color_for(&summary.label);
                        ui.label(RichText::new(&summary.label).color(color));
                        ui.label(summary.stats.count.to_string());
                        ui.label(format!("{:.3}", summary.stats.mean));
                        ui.label(format!("{:.3}", summary.stats.median));
                        ui.end_row();
                    }
                });
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open case directory…").clicked() {
                open_root_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} cases in {}",
            state.cases.len(),
            state.config.root_dir.display()
        ));

        ui.separator();

        // Labels are cloned so the state can be mutated from the combo box.
        let current = state.reference_label().unwrap_or_default().to_string();
        let labels: Vec<String> = state.scanned.labels().iter().map(|l| l.to_string()).collect();
        ui.label("Reference:");
        egui::ComboBox::from_id_salt("reference_case")
            .selected_text(&current)
            .show_ui(ui, |ui: &mut Ui| {
                for label in &labels {
                    if ui.selectable_label(current == *label, label).clicked() && current != *label
                    {
                        state.set_reference(label);
                    }
                }
            });

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Folder dialog
// ---------------------------------------------------------------------------

pub fn open_root_dialog(state: &mut AppState) {
    let folder = rfd::FileDialog::new()
        .set_title("Open case directory")
        .set_directory(&state.config.root_dir)
        .pick_folder();

    if let Some(path) = folder {
        log::info!("Opening case directory {}", path.display());
        state.open_root(path);
    }
}
