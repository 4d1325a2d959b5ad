use clap::{Args, Parser, Subcommand};
use pd_app::{
    evaluate, report_service, AppResult, Material, MotorClass, PumpSeries, PumpSpec,
    ReportRequest,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pd-cli")]
#[command(about = "PumpDoc CLI - Pump sizing and compliance reporting tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Duty point and selection inputs shared by every subcommand.
#[derive(Args)]
struct SpecArgs {
    /// Flow rate (m3/h)
    #[arg(long, default_value_t = 50.0)]
    flow: f64,
    /// Head (m)
    #[arg(long, default_value_t = 100.0)]
    head: f64,
    /// Available NPSH (m)
    #[arg(long, default_value_t = 5.0)]
    npsha: f64,
    /// Required NPSH (m)
    #[arg(long, default_value_t = 3.5)]
    npshr: f64,
    /// Motor efficiency class (IE2-IE5)
    #[arg(long, default_value = "IE2")]
    motor_class: MotorClass,
    /// Wetted-part material (aisi-316, aisi-304, cast-iron)
    #[arg(long, default_value = "aisi-316")]
    material: Material,
    /// Pump series (end-suction, inline, multistage, split-case)
    #[arg(long, default_value = "end-suction")]
    series: PumpSeries,
    /// Annual operating hours (1000-8760)
    #[arg(long, default_value_t = 4000)]
    op_hours: u32,
}

impl SpecArgs {
    fn to_spec(&self) -> AppResult<PumpSpec> {
        Ok(PumpSpec::new(
            self.flow,
            self.head,
            self.npsha,
            self.npshr,
            self.motor_class,
            self.material,
            self.series,
            self.op_hours,
        )?)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compute sizing metrics for a duty point
    Size {
        #[command(flatten)]
        spec: SpecArgs,
        /// Emit the full dashboard state as JSON
        #[arg(long)]
        json: bool,
    },
    /// Export the characteristic curve as CSV
    Curve {
        #[command(flatten)]
        spec: SpecArgs,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Generate the compliance report via the remote service
    Report {
        #[command(flatten)]
        spec: SpecArgs,
        /// API credential for the text-generation service
        #[arg(long)]
        api_key: Option<String>,
        /// Print the prompt instead of calling the remote service
        #[arg(long)]
        prompt_only: bool,
        /// Write the report text to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Size { spec, json } => cmd_size(&spec, json),
        Commands::Curve { spec, output } => cmd_curve(&spec, output.as_deref()),
        Commands::Report {
            spec,
            api_key,
            prompt_only,
            output,
        } => cmd_report(&spec, api_key.as_deref(), prompt_only, output.as_deref()),
    }
}

fn cmd_size(args: &SpecArgs, json: bool) -> AppResult<()> {
    let spec = args.to_spec()?;
    let state = evaluate(&spec);

    if json {
        println!("{}", serde_json::to_string_pretty(&state).expect("state is serializable"));
        return Ok(());
    }

    let s = &state.sizing;
    println!(
        "Duty point: {:.1} m3/h @ {:.1} m ({} series, {})",
        spec.flow_m3h, spec.head_m, spec.series, spec.material
    );
    println!("  Hydraulic power:  {:.2} kW", s.hydraulic_power_kw);
    println!("  Shaft power:      {:.2} kW", s.shaft_power_kw);
    println!("  Suggested motor:  {:.1} kW ({})", s.suggested_motor_kw, spec.motor_class);
    println!("  NPSH margin:      {:.2} m ({})", s.npsh_margin_m, s.npsh_label());
    println!("  Annual energy:    {:.0} kWh over {} h", s.annual_energy_kwh, spec.op_hours);
    println!("  Annual CO2:       {:.2} t", s.annual_co2_tons);
    if s.annual_savings_vs_ie2_usd > 0.0 {
        println!(
            "  Savings vs IE2:   ${:.0}/year",
            s.annual_savings_vs_ie2_usd
        );
    }
    Ok(())
}

fn cmd_curve(args: &SpecArgs, output: Option<&Path>) -> AppResult<()> {
    let spec = args.to_spec()?;
    let state = evaluate(&spec);

    // Build CSV
    let mut csv = String::from("flow_m3h,head_m\n");
    for (flow, head) in state.curve.samples() {
        csv.push_str(&format!("{},{}\n", flow, head));
    }

    // Write to file or stdout
    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!(
            "✓ Exported {} curve points to {}",
            state.curve.flows_m3h.len(),
            path.display()
        );
    } else {
        print!("{}", csv);
    }

    Ok(())
}

fn cmd_report(
    args: &SpecArgs,
    api_key: Option<&str>,
    prompt_only: bool,
    output: Option<&Path>,
) -> AppResult<()> {
    let spec = args.to_spec()?;
    let state = evaluate(&spec);
    let request = ReportRequest {
        credential: api_key.unwrap_or(""),
        spec: &state.spec,
        sizing: &state.sizing,
    };

    if prompt_only {
        print!("{}", pd_app::build_report_prompt(&state.spec, &state.sizing));
        return Ok(());
    }

    let report = report_service::generate_report(
        &request,
        Some(&mut |phase| {
            eprintln!("  {}...", phase.label());
        }),
    )?;

    println!("✓ Report generated by {}", report.model_id);
    if let Some(path) = output {
        std::fs::write(path, &report.text)?;
        println!("✓ Saved to {}", path.display());
    } else {
        println!("\n{}", report.text);
    }

    Ok(())
}
