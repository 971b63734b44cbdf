use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{
    BoxElem, BoxPlot, BoxSpread, GridMark, HLine, Legend, Line, LineStyle, Plot, PlotPoints,
};

use crate::state::AppState;

/// Width of a box in x-axis units; boxes sit one unit apart.
const BOX_WIDTH: f64 = 0.5;

// ---------------------------------------------------------------------------
// Box plot (central panel)
// ---------------------------------------------------------------------------

/// Render one box per case with its mean, plus the reference-mean line.
pub fn box_plot(ui: &mut Ui, state: &AppState) {
    let config = &state.config;

    let labels: Vec<String> = state.summaries.iter().map(|s| s.label.clone()).collect();
    let n_cases = labels.len();
    let y_ticks = config.y_ticks.values();
    let y_step = config.y_ticks.step;

    let mut plot = Plot::new("wss_box_plot")
        .legend(Legend::default())
        .y_axis_label(config.y_label.clone())
        .x_grid_spacer(move |_input| {
            (1..=n_cases)
                .map(|pos| GridMark {
                    value: pos as f64,
                    step_size: 1.0,
                })
                .collect()
        })
        .x_axis_formatter(move |mark, _range| case_label_at(&labels, mark.value))
        .y_grid_spacer(move |_input| {
            y_ticks
                .iter()
                .map(|&value| GridMark {
                    value,
                    step_size: y_step,
                })
                .collect()
        })
        .include_x(0.5)
        .include_x(n_cases as f64 + 0.5)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);

    // Every configured tick stays in view, whatever the data range.
    match config.y_ticks.bounds() {
        Some((low, high)) => plot = plot.include_y(low).include_y(high),
        None => plot = plot.include_y(config.y_ticks.start),
    }

    plot.show(ui, |plot_ui| {
        for (idx, summary) in state.summaries.iter().enumerate() {
            let stats = &summary.stats;
            let x = (idx + 1) as f64;
            let color = state.colors.color_for(&summary.label);

            let elem = BoxElem::new(
                x,
                BoxSpread::new(
                    stats.whisker_low,
                    stats.q1,
                    stats.median,
                    stats.q3,
                    stats.whisker_high,
                ),
            )
            .name(&summary.label)
            .box_width(BOX_WIDTH)
            .whisker_width(BOX_WIDTH / 2.0)
            .fill(color.gamma_multiply(0.25))
            .stroke(Stroke::new(config.median_line_width, color));

            plot_ui.box_plot(BoxPlot::new(vec![elem]).name(&summary.label).color(color));

            let half = BOX_WIDTH / 2.0;
            let mean_points: PlotPoints =
                vec![[x - half, stats.mean], [x + half, stats.mean]].into();
            plot_ui.line(
                Line::new(mean_points)
                    .color(color)
                    .width(config.mean_line_width)
                    .style(LineStyle::dashed_loose()),
            );
        }

        plot_ui.hline(
            HLine::new(state.reference_mean)
                .name("Reference mean")
                .color(Color32::BLUE)
                .width(1.5)
                .style(LineStyle::dashed_dense()),
        );
    });
}

/// Label for an x-axis grid mark: the case sitting at that integer position.
fn case_label_at(labels: &[String], value: f64) -> String {
    let pos = value.round();
    if (value - pos).abs() > 1e-6 || pos < 1.0 {
        return String::new();
    }
    labels.get(pos as usize - 1).cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x_labels_only_on_case_positions() {
        let labels = vec!["caseB".to_string(), "caseA".to_string()];
        assert_eq!(case_label_at(&labels, 1.0), "caseB");
        assert_eq!(case_label_at(&labels, 2.0), "caseA");
        assert_eq!(case_label_at(&labels, 1.5), "");
        assert_eq!(case_label_at(&labels, 0.0), "");
        assert_eq!(case_label_at(&labels, 3.0), "");
        assert_eq!(case_label_at(&labels, -1.0), "");
    }
}
