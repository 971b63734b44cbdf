use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct WssBoxPlotApp {
    pub state: AppState,
}

impl WssBoxPlotApp {
    /// Apply the configured font size before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        apply_font_size(&cc.egui_ctx, state.config.font_size);
        Self { state }
    }
}

/// Every text style gets `size`; headings are drawn a bit larger.
fn apply_font_size(ctx: &egui::Context, size: f32) {
    let mut style = (*ctx.style()).clone();
    for (text_style, font_id) in style.text_styles.iter_mut() {
        font_id.size = match text_style {
            egui::TextStyle::Heading => size * 1.25,
            _ => size,
        };
    }
    ctx.set_style(style);
}

impl eframe::App for WssBoxPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: case statistics ----
        egui::SidePanel::left("case_panel")
            .default_width(320.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &self.state);
            });

        // ---- Central panel: box plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::box_plot(ui, &self.state);
        });
    }
}
