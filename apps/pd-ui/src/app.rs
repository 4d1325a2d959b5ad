use crate::report_worker::{ReportWorker, WorkerMessage};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};
use pd_app::{
    evaluate, DashboardState, GeneratedReport, Material, MotorClass, PumpSeries, PumpSpec,
};

pub struct PumpdocApp {
    // Input form state
    api_key: String,
    series: PumpSeries,
    flow_m3h: f64,
    head_m: f64,
    npsha_m: f64,
    npshr_m: f64,
    motor_class: MotorClass,
    material: Material,
    op_hours: u32,

    // Report state for the current session
    report_worker: Option<ReportWorker>,
    report_phase: Option<&'static str>,
    last_report: Option<GeneratedReport>,
    report_error: Option<String>,
    status_message: Option<String>,
}

impl PumpdocApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let defaults = PumpSpec::default();
        Self {
            api_key: String::new(),
            series: defaults.series,
            flow_m3h: defaults.flow_m3h,
            head_m: defaults.head_m,
            npsha_m: defaults.npsha_m,
            npshr_m: defaults.npshr_m,
            motor_class: defaults.motor_class,
            material: defaults.material,
            op_hours: defaults.op_hours,
            report_worker: None,
            report_phase: None,
            last_report: None,
            report_error: None,
            status_message: None,
        }
    }

    /// Snapshot the form into a validated spec.
    ///
    /// The widgets clamp every input to its valid range, so this only
    /// fails if the form state is corrupted; the error is shown inline.
    fn current_spec(&self) -> Result<PumpSpec, String> {
        PumpSpec::new(
            self.flow_m3h,
            self.head_m,
            self.npsha_m,
            self.npshr_m,
            self.motor_class,
            self.material,
            self.series,
            self.op_hours,
        )
        .map_err(|e| e.to_string())
    }

    fn poll_worker(&mut self) {
        // Drain first so the receiver borrow ends before fields change
        let messages: Vec<WorkerMessage> = match &self.report_worker {
            Some(worker) => worker.message_rx.try_iter().collect(),
            None => return,
        };
        let mut finished = false;
        for message in messages {
            match message {
                WorkerMessage::Phase { label } => {
                    self.report_phase = Some(label);
                }
                WorkerMessage::Complete { report } => {
                    self.last_report = Some(report);
                    self.report_error = None;
                    finished = true;
                }
                WorkerMessage::Error { message } => {
                    self.report_error = Some(message);
                    finished = true;
                }
            }
        }
        if finished {
            self.report_worker = None;
            self.report_phase = None;
        }
    }

    fn start_report(&mut self, state: &DashboardState) {
        self.report_error = None;
        self.status_message = None;
        self.report_worker = Some(ReportWorker::start(
            self.api_key.clone(),
            state.spec.clone(),
            state.sizing.clone(),
        ));
        self.report_phase = Some("Starting");
    }

    fn save_report(&mut self) {
        let Some(report) = &self.last_report else {
            return;
        };
        let picked = rfd::FileDialog::new()
            .set_file_name("pump_compliance_report.txt")
            .save_file();
        if let Some(path) = picked {
            match std::fs::write(&path, &report.text) {
                Ok(()) => {
                    self.status_message = Some(format!("Saved to {}", path.display()));
                }
                Err(e) => {
                    self.report_error = Some(format!("Failed to save report: {e}"));
                }
            }
        }
    }

    fn show_input_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Specifications");
        ui.separator();

        ui.label("API credential");
        ui.add(egui::TextEdit::singleline(&mut self.api_key).password(true));
        ui.separator();

        egui::ComboBox::from_label("Pump series")
            .selected_text(self.series.label())
            .show_ui(ui, |ui| {
                for series in PumpSeries::ALL {
                    ui.selectable_value(&mut self.series, series, series.label());
                }
            });

        ui.add_space(8.0);
        ui.label("Hydraulic duty");
        ui.horizontal(|ui| {
            ui.label("Q (m3/h)");
            ui.add(egui::DragValue::new(&mut self.flow_m3h).range(0.0..=100_000.0).speed(1.0));
        });
        ui.horizontal(|ui| {
            ui.label("H (m)");
            ui.add(egui::DragValue::new(&mut self.head_m).range(0.0..=10_000.0).speed(1.0));
        });

        ui.add_space(8.0);
        ui.label("Suction conditions");
        ui.horizontal(|ui| {
            ui.label("NPSHa (m)");
            ui.add(egui::DragValue::new(&mut self.npsha_m).range(0.0..=1000.0).speed(0.1));
        });
        ui.horizontal(|ui| {
            ui.label("NPSHr (m)");
            ui.add(egui::DragValue::new(&mut self.npshr_m).range(0.0..=1000.0).speed(0.1));
        });

        ui.add_space(8.0);
        egui::ComboBox::from_label("Motor class")
            .selected_text(self.motor_class.label())
            .show_ui(ui, |ui| {
                for class in MotorClass::ALL {
                    ui.selectable_value(&mut self.motor_class, class, class.label());
                }
            });
        egui::ComboBox::from_label("Material")
            .selected_text(self.material.label())
            .show_ui(ui, |ui| {
                for material in Material::ALL {
                    ui.selectable_value(&mut self.material, material, material.label());
                }
            });

        ui.add_space(8.0);
        ui.add(egui::Slider::new(&mut self.op_hours, 1000..=8760).text("h/year"));
    }

    fn show_metrics(&self, ui: &mut egui::Ui, state: &DashboardState) {
        let sizing = &state.sizing;
        ui.columns(4, |cols| {
            cols[0].label("Shaft power");
            cols[0].heading(format!("{:.2} kW", sizing.shaft_power_kw));

            cols[1].label("Suggested motor");
            cols[1].heading(format!("{:.1} kW", sizing.suggested_motor_kw));

            cols[2].label("NPSH margin");
            cols[2].heading(format!("{:.2} m", sizing.npsh_margin_m));
            if sizing.cavitation_risk {
                cols[2].colored_label(egui::Color32::RED, "⚠ Cavitation risk");
            } else {
                cols[2].colored_label(egui::Color32::DARK_GREEN, "✓ NPSH safe");
            }

            cols[3].label("Annual CO2");
            cols[3].heading(format!("{:.2} t", sizing.annual_co2_tons));
            if sizing.annual_savings_vs_ie2_usd > 0.0 {
                cols[3].label(format!(
                    "${:.0}/year saved vs IE2",
                    sizing.annual_savings_vs_ie2_usd
                ));
            }
        });
    }

    fn show_curve(&self, ui: &mut egui::Ui, state: &DashboardState) {
        let line_points: PlotPoints = state
            .curve
            .samples()
            .map(|(flow, head)| [flow, head])
            .collect();
        let (op_flow, op_head) = state.curve.operating_point;

        Plot::new("pump_curve")
            .legend(Legend::default())
            .height(280.0)
            .x_axis_label("Flow (m3/h)")
            .y_axis_label("Head (m)")
            .show(ui, |plot_ui| {
                plot_ui.line(Line::new(line_points).name(state.curve.label.clone()));
                plot_ui.points(
                    Points::new(vec![[op_flow, op_head]])
                        .radius(5.0)
                        .name("Duty point"),
                );
            });
    }

    fn show_report_section(&mut self, ui: &mut egui::Ui, state: &DashboardState) {
        ui.horizontal(|ui| {
            let busy = self.report_worker.is_some();
            let generate = ui.add_enabled(
                !busy,
                egui::Button::new("Generate compliance report"),
            );
            if generate.clicked() {
                self.start_report(state);
            }
            if busy {
                ui.spinner();
                if let Some(phase) = self.report_phase {
                    ui.label(format!("{phase}..."));
                }
            }
            if self.last_report.is_some() && ui.button("Save report").clicked() {
                self.save_report();
            }
        });

        if let Some(error) = &self.report_error {
            ui.colored_label(egui::Color32::RED, error);
        }
        if let Some(message) = &self.status_message {
            ui.label(message.clone());
        }

        if let Some(report) = &self.last_report {
            ui.separator();
            ui.label(format!("Generated by {}", report.model_id));
            egui::ScrollArea::vertical()
                .max_height(240.0)
                .show(ui, |ui| {
                    ui.label(report.text.clone());
                });
        }
    }
}

impl eframe::App for PumpdocApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_worker();
        if self.report_worker.is_some() {
            // Keep polling the worker channel while a request is in flight
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        egui::SidePanel::left("inputs")
            .default_width(260.0)
            .show(ctx, |ui| {
                self.show_input_panel(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("PumpDoc - Engineering Analysis");
            ui.separator();

            match self.current_spec() {
                Ok(spec) => {
                    // Closed-form evaluation, cheap enough to redo per frame
                    let state = evaluate(&spec);
                    self.show_metrics(ui, &state);
                    ui.separator();
                    self.show_curve(ui, &state);
                    ui.separator();
                    self.show_report_section(ui, &state);
                }
                Err(message) => {
                    ui.colored_label(egui::Color32::RED, message);
                }
            }
        });
    }
}
