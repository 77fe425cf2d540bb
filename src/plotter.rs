use crate::data_loader::Samples;
use crate::error::AppError;
use eframe::egui::{self, Color32};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoints, Points};

/// Opens a native window showing the scatter plot and blocks until the user
/// closes it.
///
/// `y_label` doubles as the legend entry and the window title. Axis tick
/// annotations are suppressed; the grid marks themselves remain.
pub fn show(samples: Samples, x_label: String, y_label: String) -> Result<(), AppError> {
    let title = y_label.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| {
            Ok(Box::new(ScatterApp {
                samples,
                x_label,
                y_label,
            }))
        }),
    )
    .map_err(|e| AppError::Display(e.to_string()))?;

    Ok(())
}

struct ScatterApp {
    samples: Samples,
    x_label: String,
    y_label: String,
}

impl eframe::App for ScatterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(&self.y_label);

            Plot::new("scatter")
                .legend(Legend::default())
                .x_axis_label(self.x_label.clone())
                .y_axis_label(self.y_label.clone())
                .x_axis_formatter(|_mark, _range| String::new())
                .y_axis_formatter(|_mark, _range| String::new())
                .show(ui, |plot_ui| {
                    let points: PlotPoints = self
                        .samples
                        .xs
                        .iter()
                        .zip(self.samples.ys.iter())
                        .map(|(&x, &y)| [x, y])
                        .collect();

                    plot_ui.points(
                        Points::new(points)
                            .name(&self.y_label)
                            .color(Color32::BLUE)
                            .shape(MarkerShape::Cross)
                            .radius(3.0),
                    );
                });
        });
    }
}
