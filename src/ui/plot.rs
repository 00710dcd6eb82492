use eframe::egui::Ui;
use egui_plot::{Line, LineStyle, Plot, PlotPoint, PlotPoints, Points, Text};

use crate::analysis::vsa::VowelTriangle;
use crate::color;
use crate::data::model::Vowel;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Vowel chart (central panel)
// ---------------------------------------------------------------------------

/// Map (F1, F2) to chart coordinates.  Both axes are drawn inverted (F2
/// grows to the left, F1 grows downward) by negating the values; the axis
/// formatters print the magnitude.  This puts /i/ top-left, /a/ bottom,
/// /u/ top-right like a classic vowel chart.
fn chart_point(f1: f64, f2: f64) -> [f64; 2] {
    [-f2, -f1]
}

/// Render the vowel chart in the central panel.
pub fn vowel_chart(ui: &mut Ui, state: &AppState) {
    let report = match &state.report {
        Some(r) => r,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Load formant tables for /i/, /a/ and /u/ to view the vowel triangle");
            });
            return;
        }
    };

    Plot::new("vowel_chart")
        .legend(egui_plot::Legend::default())
        .x_axis_label("F2 (Hz)")
        .y_axis_label("F1 (Hz)")
        .x_axis_formatter(|mark, _range| format!("{:.0}", -mark.value))
        .y_axis_formatter(|mark, _range| format!("{:.0}", -mark.value))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let participant = report.estimates.triangle();
            plot_ui.line(
                triangle_outline(&participant)
                    .name("Participant")
                    .color(color::PARTICIPANT_OUTLINE)
                    .width(2.0),
            );

            if state.show_normative {
                let normative = state.config.reference.triangle();
                plot_ui.line(
                    triangle_outline(&normative)
                        .name("Normative")
                        .color(color::NORMATIVE_OUTLINE)
                        .width(1.5)
                        .style(LineStyle::Dashed { length: 10.0 }),
                );
            }

            for (vowel, (f1, f2)) in Vowel::ALL.into_iter().zip(participant.vertices()) {
                let [x, y] = chart_point(f1, f2);

                plot_ui.points(
                    Points::new(vec![[x, y]])
                        .color(state.palette.color_for(vowel))
                        .radius(5.0),
                );
                plot_ui.text(
                    Text::new(PlotPoint::new(x + 45.0, y + 25.0), format!("/{vowel}/"))
                        .color(state.palette.color_for(vowel)),
                );
            }
        });
}

fn triangle_outline(triangle: &VowelTriangle) -> Line<'static> {
    let points: PlotPoints = triangle
        .closed_path()
        .iter()
        .map(|&(f1, f2)| chart_point(f1, f2))
        .collect();
    Line::new(points)
}
