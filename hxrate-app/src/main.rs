//! Interactive visualizer comparing parallel-flow and counter-flow heat
//! exchanger performance from input temperatures, flow rates, and design
//! specifications.
//!
//! The side panel collects the operating point; the central panel shows the
//! rated metrics and the temperature distribution along the exchanger. The
//! rating is recomputed from scratch on every frame, which is cheap enough
//! that no caching or change detection is needed.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use hxrate_core::{ExchangerSpec, FlowArrangement, FluidStream, Rating, rate};
use uom::si::{
    area::square_meter,
    f64::{Area, HeatTransfer, MassRate, Power, Ratio, SpecificHeatCapacity, TemperatureInterval,
        ThermodynamicTemperature},
    heat_transfer::watt_per_square_meter_kelvin,
    mass_rate::kilogram_per_second,
    power::kilowatt,
    ratio::ratio,
    specific_heat_capacity::kilojoule_per_kilogram_kelvin,
    temperature_interval,
    thermodynamic_temperature::degree_celsius,
};

const HOT_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 20, 60); // crimson
const COLD_COLOR: egui::Color32 = egui::Color32::from_rgb(65, 105, 225); // royal blue

fn main() -> Result<(), eframe::Error> {
    eframe::run_native(
        "Heat Exchanger Performance Visualizer",
        eframe::NativeOptions::default(),
        Box::new(|_cc| Ok(Box::new(VisualizerApp::default()))),
    )
}

/// Raw widget state, converted to an [`ExchangerSpec`] once per frame.
struct VisualizerApp {
    hot_mass_rate: f64,
    hot_specific_heat: f64,
    hot_inlet: f64,
    hot_outlet: f64,
    cold_mass_rate: f64,
    cold_specific_heat: f64,
    cold_inlet: f64,
    cold_outlet: f64,
    overall_heat_transfer: f64,
    area: f64,
    arrangement: FlowArrangement,
}

impl Default for VisualizerApp {
    fn default() -> Self {
        Self {
            hot_mass_rate: 1.5,
            hot_specific_heat: 4.2,
            hot_inlet: 140.0,
            hot_outlet: 90.0,
            cold_mass_rate: 2.0,
            cold_specific_heat: 4.18,
            cold_inlet: 30.0,
            cold_outlet: 70.0,
            overall_heat_transfer: 600.0,
            area: 25.0,
            arrangement: FlowArrangement::Parallel,
        }
    }
}

impl VisualizerApp {
    /// Builds the input record for the current widget values.
    ///
    /// The side panel clamps flow rates and specific heats above zero, so
    /// construction only fails if those bounds are ever loosened.
    fn spec(&self) -> Result<ExchangerSpec, hxrate_core::ConstraintError> {
        let hot = FluidStream::new(
            MassRate::new::<kilogram_per_second>(self.hot_mass_rate),
            SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(self.hot_specific_heat),
            ThermodynamicTemperature::new::<degree_celsius>(self.hot_inlet),
            ThermodynamicTemperature::new::<degree_celsius>(self.hot_outlet),
        )?;
        let cold = FluidStream::new(
            MassRate::new::<kilogram_per_second>(self.cold_mass_rate),
            SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(self.cold_specific_heat),
            ThermodynamicTemperature::new::<degree_celsius>(self.cold_inlet),
            ThermodynamicTemperature::new::<degree_celsius>(self.cold_outlet),
        )?;

        Ok(ExchangerSpec {
            hot,
            cold,
            overall_heat_transfer: HeatTransfer::new::<watt_per_square_meter_kelvin>(
                self.overall_heat_transfer,
            ),
            area: Area::new::<square_meter>(self.area),
            arrangement: self.arrangement,
        })
    }

    fn input_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Input Parameters");
        ui.add_space(8.0);

        ui.strong("Hot Fluid");
        egui::Grid::new("hot_fluid").num_columns(2).show(ui, |ui| {
            fluid_inputs(
                ui,
                &mut self.hot_mass_rate,
                &mut self.hot_specific_heat,
                &mut self.hot_inlet,
                &mut self.hot_outlet,
            );
        });
        ui.add_space(8.0);

        ui.strong("Cold Fluid");
        egui::Grid::new("cold_fluid").num_columns(2).show(ui, |ui| {
            fluid_inputs(
                ui,
                &mut self.cold_mass_rate,
                &mut self.cold_specific_heat,
                &mut self.cold_inlet,
                &mut self.cold_outlet,
            );
        });
        ui.add_space(8.0);

        ui.strong("Heat Exchanger Design");
        egui::Grid::new("design").num_columns(2).show(ui, |ui| {
            ui.label("Overall Heat Transfer Coefficient U (W/m²·K)");
            ui.add(egui::DragValue::new(&mut self.overall_heat_transfer).speed(10.0));
            ui.end_row();

            ui.label("Heat Transfer Area A (m²)");
            ui.add(egui::DragValue::new(&mut self.area).speed(1.0));
            ui.end_row();
        });
        ui.add_space(8.0);

        egui::ComboBox::from_label("Flow Configuration")
            .selected_text(self.arrangement.label())
            .show_ui(ui, |ui| {
                for arrangement in [FlowArrangement::Parallel, FlowArrangement::Counter] {
                    ui.selectable_value(&mut self.arrangement, arrangement, arrangement.label());
                }
            });
    }

    fn results_summary(&self, ui: &mut egui::Ui, rating: &Rating) {
        ui.strong("Results Summary");
        egui::Grid::new("results")
            .num_columns(2)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                ui.label("Heat Duty (Q)");
                ui.label(format_kilowatts(rating.duty.actual));
                ui.end_row();

                ui.label("Effectiveness (ε)");
                ui.label(format_effectiveness(rating.duty.effectiveness));
                ui.end_row();

                ui.label("LMTD");
                ui.label(format_lmtd(rating.lmtd));
                ui.end_row();

                ui.label("Estimated Q (via LMTD)");
                ui.label(format_lmtd_duty(rating.lmtd_heat_duty));
                ui.end_row();
            });

        // Surface the reason whenever a metric shows as undefined.
        if let Err(why) = rating.lmtd {
            ui.small(why.to_string());
        }
        if let Err(why) = rating.duty.effectiveness {
            ui.small(why.to_string());
        }
    }

    fn temperature_chart(&self, ui: &mut egui::Ui, rating: &Rating) {
        ui.strong("Temperature Distribution");
        ui.label(format!("Temperature Profile - {}", self.arrangement.label()));

        Plot::new("temperature_profile")
            .legend(Legend::default())
            .x_axis_label("Normalized Exchanger Length")
            .y_axis_label("Temperature (°C)")
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::from(rating.hot_profile.plot_points()))
                        .name("Hot Fluid")
                        .color(HOT_COLOR)
                        .width(2.0),
                );
                plot_ui.line(
                    Line::new(PlotPoints::from(rating.cold_profile.plot_points()))
                        .name("Cold Fluid")
                        .color(COLD_COLOR)
                        .width(2.0),
                );
            });
    }
}

impl eframe::App for VisualizerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("input_parameters").show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| self.input_panel(ui));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Heat Exchanger Performance Visualizer");
            ui.label(
                "Compare the performance of parallel-flow and counter-flow heat exchangers \
                 based on input temperatures, flow rates, and design specifications.",
            );
            ui.separator();

            match self.spec() {
                Ok(spec) => {
                    let rating = rate(&spec);
                    self.results_summary(ui, &rating);
                    ui.separator();
                    self.temperature_chart(ui, &rating);
                }
                Err(why) => {
                    ui.colored_label(ui.visuals().error_fg_color, why.to_string());
                }
            }
        });
    }
}

fn fluid_inputs(
    ui: &mut egui::Ui,
    mass_rate: &mut f64,
    specific_heat: &mut f64,
    inlet: &mut f64,
    outlet: &mut f64,
) {
    ui.label("Mass Flow Rate (kg/s)");
    ui.add(
        egui::DragValue::new(mass_rate)
            .speed(0.1)
            .range(0.01..=f64::MAX),
    );
    ui.end_row();

    ui.label("Specific Heat Cp (kJ/kg·K)");
    ui.add(
        egui::DragValue::new(specific_heat)
            .speed(0.01)
            .range(0.1..=f64::MAX),
    );
    ui.end_row();

    ui.label("Inlet Temperature (°C)");
    ui.add(egui::DragValue::new(inlet).speed(1.0));
    ui.end_row();

    ui.label("Outlet Temperature (°C)");
    ui.add(egui::DragValue::new(outlet).speed(1.0));
    ui.end_row();
}

fn format_kilowatts(power: Power) -> String {
    format!("{:.2} kW", power.get::<kilowatt>())
}

fn format_effectiveness(effectiveness: Result<Ratio, hxrate_core::ZeroMaxDuty>) -> String {
    match effectiveness {
        Ok(effectiveness) => format!("{:.2}", effectiveness.get::<ratio>()),
        Err(_) => "undefined".to_string(),
    }
}

fn format_lmtd(lmtd: Result<TemperatureInterval, hxrate_core::LmtdError>) -> String {
    match lmtd {
        Ok(lmtd) => format!(
            "{:.2} °C",
            lmtd.get::<temperature_interval::degree_celsius>()
        ),
        Err(_) => "undefined".to_string(),
    }
}

fn format_lmtd_duty(duty: Result<Power, hxrate_core::LmtdError>) -> String {
    match duty {
        Ok(duty) => format_kilowatts(duty),
        Err(_) => "undefined".to_string(),
    }
}
