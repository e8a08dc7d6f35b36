use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoint};

/// A runnable egui application for plotting line series.
#[derive(Default)]
pub struct PlotApp {
    series: Vec<Series>,
    x_label: Option<String>,
    y_label: Option<String>,
}

struct Series {
    name: String,
    color: Option<egui::Color32>,
    points: Vec<PlotPoint>,
}

impl PlotApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named series drawn in the theme's default palette.
    #[must_use]
    pub fn add_series(mut self, name: &str, points: &[[f64; 2]]) -> Self {
        self.push_series(name, None, points);
        self
    }

    /// Adds a named series drawn in a fixed RGB color.
    #[must_use]
    pub fn add_colored_series(mut self, name: &str, rgb: [u8; 3], points: &[[f64; 2]]) -> Self {
        let color = egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2]);
        self.push_series(name, Some(color), points);
        self
    }

    /// Labels the plot axes.
    #[must_use]
    pub fn with_axis_labels(mut self, x: &str, y: &str) -> Self {
        self.x_label = Some(x.to_string());
        self.y_label = Some(y.to_string());
        self
    }

    fn push_series(&mut self, name: &str, color: Option<egui::Color32>, points: &[[f64; 2]]) {
        self.series.push(Series {
            name: name.to_string(),
            color,
            points: points.iter().copied().map(Into::into).collect(),
        });
    }

    #[allow(clippy::missing_errors_doc)]
    pub fn run(self, name: &str) -> Result<(), eframe::Error> {
        eframe::run_native(
            name,
            eframe::NativeOptions::default(),
            Box::new(|_cc| Ok(Box::new(self))),
        )
    }
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("plot-id").legend(Legend::default());
            if let Some(label) = &self.x_label {
                plot = plot.x_axis_label(label.clone());
            }
            if let Some(label) = &self.y_label {
                plot = plot.y_axis_label(label.clone());
            }

            plot.show(ui, |plot_ui| {
                for series in &self.series {
                    let mut line = Line::new(series.points.as_slice())
                        .name(&series.name)
                        .width(2.0);
                    if let Some(color) = series.color {
                        line = line.color(color);
                    }

                    plot_ui.line(line);
                }
            });
        });
    }
}
