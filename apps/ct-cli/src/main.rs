use clap::{Parser, Subcommand};
use ct_model::TransformerFactory;
use ct_project::{DEFAULT_PRESET_NAME, default_preset};
use ct_sim::SimulationResult;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ct-cli")]
#[command(about = "CT saturation simulator - transient fault study tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List presets stored in a preset file
    Presets {
        /// Path to the preset file (.json, .yaml or .yml)
        preset_path: PathBuf,
    },
    /// List supported CT type identifiers
    Types,
    /// Run a saturation study from a preset
    Run {
        /// Path to the preset file
        preset_path: PathBuf,
        /// Preset name (built-in default when absent)
        #[arg(long, default_value = DEFAULT_PRESET_NAME)]
        preset: String,
        /// CT type identifier
        #[arg(long, default_value = "TPX")]
        ct_type: String,
        /// Time step override in seconds (auto when omitted)
        #[arg(long)]
        dt: Option<f64>,
        /// Export the waveforms to a CSV file
        #[arg(long)]
        export_csv: Option<PathBuf>,
    },
    /// Store a preset built from the default plus flag overrides
    SavePreset {
        /// Path to the preset file
        preset_path: PathBuf,
        /// Preset name to store under
        name: String,
        /// Turns ratio primary/secondary
        #[arg(long)]
        ct_ratio: Option<f64>,
        /// Secondary winding resistance in ohms
        #[arg(long)]
        r_ct: Option<f64>,
        /// Burden resistance in ohms
        #[arg(long)]
        r_b: Option<f64>,
        /// Nominal secondary current in amperes
        #[arg(long)]
        i_sn: Option<f64>,
        #[arg(long)]
        k_h: Option<f64>,
        #[arg(long)]
        k_ssc: Option<f64>,
        #[arg(long)]
        k_td: Option<f64>,
        /// Direct saturation voltage override in volts
        #[arg(long)]
        v_sat: Option<f64>,
        /// Magnetization curve exponent
        #[arg(long)]
        curve_s: Option<f64>,
        /// Magnetization curve gain
        #[arg(long)]
        curve_a: Option<f64>,
        /// System frequency in hertz
        #[arg(long)]
        frequency: Option<f64>,
        /// Number of fundamental cycles to simulate
        #[arg(long)]
        n_cycles: Option<u32>,
        /// Primary fault current amplitude in amperes
        #[arg(long)]
        ip_fault: Option<f64>,
        /// Primary DC time constant in seconds
        #[arg(long)]
        t_const: Option<f64>,
        /// Fixed time step in seconds (auto when omitted)
        #[arg(long)]
        dt: Option<f64>,
    },
}

type CliResult<T> = Result<T, CliError>;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Project(#[from] ct_project::ProjectError),

    #[error(transparent)]
    Sim(#[from] ct_sim::SimError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Presets { preset_path } => cmd_presets(&preset_path),
        Commands::Types => cmd_types(),
        Commands::Run {
            preset_path,
            preset,
            ct_type,
            dt,
            export_csv,
        } => cmd_run(&preset_path, &preset, &ct_type, dt, export_csv.as_deref()),
        Commands::SavePreset {
            preset_path,
            name,
            ct_ratio,
            r_ct,
            r_b,
            i_sn,
            k_h,
            k_ssc,
            k_td,
            v_sat,
            curve_s,
            curve_a,
            frequency,
            n_cycles,
            ip_fault,
            t_const,
            dt,
        } => {
            let mut preset = default_preset();
            let ct = &mut preset.ct_params;
            apply(&mut ct.ct_ratio, ct_ratio);
            apply(&mut ct.r_ct, r_ct);
            apply(&mut ct.r_b, r_b);
            apply(&mut ct.i_sn, i_sn);
            apply(&mut ct.k_h, k_h);
            apply(&mut ct.k_ssc, k_ssc);
            apply(&mut ct.k_td, k_td);
            if v_sat.is_some() {
                ct.v_sat = v_sat;
            }
            apply(&mut ct.s, curve_s);
            apply(&mut ct.a, curve_a);

            let sim = &mut preset.sim_params;
            apply(&mut sim.frequency_hz, frequency);
            if let Some(n) = n_cycles {
                sim.n_cycles = n;
            }
            apply(&mut sim.ip_fault, ip_fault);
            apply(&mut sim.t_const_primary, t_const);
            if dt.is_some() {
                sim.dt = dt;
            }

            cmd_save_preset(&preset_path, &name, &preset)
        }
    }
}

fn apply(target: &mut f64, value: Option<f64>) {
    if let Some(v) = value {
        *target = v;
    }
}

fn cmd_presets(preset_path: &Path) -> CliResult<()> {
    let names = ct_project::list_presets(preset_path)?;
    println!("Presets in {}:", preset_path.display());
    for name in names {
        println!("  {}", name);
    }
    Ok(())
}

fn cmd_types() -> CliResult<()> {
    println!("Supported CT types:");
    for name in TransformerFactory::SUPPORTED_TYPES {
        println!("  {}", name);
    }
    Ok(())
}

fn cmd_run(
    preset_path: &Path,
    preset_name: &str,
    ct_type: &str,
    dt: Option<f64>,
    export_csv: Option<&Path>,
) -> CliResult<()> {
    let mut preset = ct_project::load_preset(preset_name, preset_path)?;
    if dt.is_some() {
        preset.sim_params.dt = dt;
    }

    println!(
        "Running saturation study: preset '{}', CT type {}",
        preset_name, ct_type
    );
    let result = ct_sim::run_simulation(&preset.ct_params, &preset.sim_params, ct_type)?;
    println!(
        "✓ Simulation completed ({} samples, dt = {:.3e} s)",
        result.waveforms.len(),
        result.settings.resolved_dt()
    );

    println!("\nResults:");
    println!("  v_sat       = {:.6} V", result.v_sat);
    println!("  v_req_perm  = {:.6} V", result.v_req_perm);
    println!("  v_req_trans = {:.6} V", result.v_req_trans);
    if result.t_sat.is_infinite() {
        println!("  t_sat       = inf");
    } else {
        println!("  t_sat       = {:.6} s", result.t_sat);
    }
    println!(
        "  Saturates (perm):  {}",
        if result.saturated_perm { "YES" } else { "NO" }
    );
    println!(
        "  Saturates (trans): {}",
        if result.saturated_trans { "YES" } else { "NO" }
    );

    if let Some(path) = export_csv {
        export_waveforms_csv(&result, path)?;
    }

    Ok(())
}

fn export_waveforms_csv(result: &SimulationResult, path: &Path) -> CliResult<()> {
    let wf = &result.waveforms;

    let mut csv = String::from("t,i_ideal,i_real,i_excitation,flux,v_req_instant\n");
    for k in 0..wf.len() {
        csv.push_str(&format!(
            "{},{},{},{},{},{}\n",
            wf.t[k], wf.i_ideal[k], wf.i_real[k], wf.i_excitation[k], wf.flux[k], wf.v_req_instant[k]
        ));
    }

    std::fs::write(path, csv)?;
    println!("✓ Exported {} samples to {}", wf.len(), path.display());
    Ok(())
}

fn cmd_save_preset(preset_path: &Path, name: &str, preset: &ct_project::Preset) -> CliResult<()> {
    ct_project::save_preset(name, preset, preset_path)?;
    println!("✓ Saved preset '{}' to {}", name, preset_path.display());
    Ok(())
}
