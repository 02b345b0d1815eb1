use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use pendulum_sim::angle::wrap_angle;
use pendulum_sim::io::csv;
use pendulum_sim::scenario::ScenarioConfig;
use pendulum_sim::sim::Method;
use pendulum_sim::system::{Member, PendulumSystem};

#[derive(Parser, Debug)]
#[command(about = "Simulate single and double pendulums")]
struct Args {
    /// YAML scenario file; defaults to the classic 120 degree double pendulum.
    scenario: Option<PathBuf>,
    /// Override the scenario's integration method.
    #[arg(short, long, value_enum)]
    method: Option<Method>,
    /// Write all member positions to this CSV file.
    #[arg(long)]
    csv: Option<String>,
    /// Write member 0's phase space (wrapped theta, omega) to this CSV file.
    #[arg(long)]
    phase_csv: Option<String>,
}

fn load_scenario(args: &Args) -> Result<ScenarioConfig> {
    let mut scenario = match &args.scenario {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            ScenarioConfig::from_yaml(&text)
                .with_context(|| format!("failed to parse {}", path.display()))?
        }
        None => ScenarioConfig::classic_double(),
    };

    if let Some(method) = args.method {
        scenario.method = method;
    }
    Ok(scenario)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let scenario = load_scenario(&args)?;
    let system = scenario.build().context("simulation failed")?;

    print_report(&scenario, &system);

    if let Some(path) = &args.csv {
        csv::write_positions_file(path, &system)
            .with_context(|| format!("failed to write {path}"))?;
        println!("  Exported: {path}");
        println!();
    }

    if let (Some(path), Some(member)) = (&args.phase_csv, system.members().first()) {
        let times = system.time_grid();
        csv::write_phase_space_file(path, times.as_slice(), &member.phase_space())
            .with_context(|| format!("failed to write {path}"))?;
        println!("  Exported: {path}");
        println!();
    }

    Ok(())
}

fn print_report(scenario: &ScenarioConfig, system: &PendulumSystem) {
    let config = &scenario.config;

    println!();
    println!("====================================================================");
    println!("  PENDULUM SIMULATION — {} member(s)", system.len());
    println!("====================================================================");
    println!();
    println!("  Configuration");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Duration:      {:>8.2} s     Samples:      {:>8}",
        config.duration, config.samples
    );
    println!(
        "  Timestep:      {:>8.5} s     Gravity:      {:>8.5} m/s^2",
        config.dt(),
        config.gravity
    );
    println!("  Method:        {:>8}", scenario.method.name());
    println!();

    println!("  Members");
    println!("  ──────────────────────────────────────────────────────────────────");
    for (i, member) in system.members().iter().enumerate() {
        match member {
            Member::Single(p) => {
                let amplitude = p
                    .trajectory()
                    .iter()
                    .map(|s| wrap_angle(s[0]).abs())
                    .fold(0.0_f64, f64::max);
                println!(
                    "  [{i}] single  l={:.2} m  m={:.2} kg  theta0={:>7.2} deg  max|theta|={:>7.2} deg",
                    p.length(),
                    p.mass(),
                    p.theta0().to_degrees(),
                    amplitude.to_degrees()
                );
            }
            Member::Double(p) => {
                let max_speed = p
                    .trajectory()
                    .iter()
                    .map(|s| s[3].abs())
                    .fold(0.0_f64, f64::max);
                println!(
                    "  [{i}] double  l={:.2} m  max|omega2|={:>8.3} rad/s{}",
                    p.length(),
                    max_speed,
                    if max_speed.is_finite() { "" } else { "  (singular)" }
                );
            }
        }
    }
    println!();

    // -----------------------------------------------------------------------
    // Position table (sampled)
    // -----------------------------------------------------------------------
    let Some(first) = system.positions().first() else {
        return;
    };
    let times = system.time_grid();
    let outer = if system.has_double() { (1, 3) } else { (0, 1) };

    println!("  Outer bob of member 0");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  {:>8}  {:>10}  {:>10}", "t (s)", "x (m)", "y (m)");
    println!("  {}", "─".repeat(32));

    let sample_interval = (first.nrows() / 20).max(1);
    for row in (0..first.nrows()).filter(|r| r % sample_interval == 0 || *r == first.nrows() - 1) {
        println!(
            "  {:>8.3}  {:>10.4}  {:>10.4}",
            times[row],
            first[(row, outer.0)],
            first[(row, outer.1)]
        );
    }
    println!();
    println!("====================================================================");
    println!();
}
