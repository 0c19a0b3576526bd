use anyhow::Result;
use clap::{Parser, Subcommand};
use landclaim_core::scenario::ScenarioParams;
use landclaim_core::{init_logging, AppConfig};
use landclaim_lib::app;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a scenario and print per-player territory statistics
    Run {
        #[arg(short, long)]
        scenario: PathBuf,

        /// Also print the ownership map
        #[arg(long)]
        dump: bool,
    },
    /// Write a seeded scenario as a replay log
    Generate {
        #[arg(long, default_value_t = 42)]
        seed: u64,

        #[arg(long, default_value_t = 32)]
        buildings: usize,

        #[arg(long, default_value_t = 0.15)]
        removal_chance: f64,

        #[arg(short, long, default_value = "events.json")]
        out: PathBuf,
    },
    /// Replay a scenario and check ownership against a full recompute
    Verify {
        #[arg(short, long)]
        scenario: PathBuf,
    },
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let config = AppConfig::load(&args.config)?;
    init_logging(&config.logging.level);

    match args.command {
        Command::Run { scenario, dump } => {
            let world = app::run(config, &scenario)?;
            println!(
                "World {}x{} after {} changes",
                world.extent().width,
                world.extent().height,
                world.version()
            );
            println!(
                "{:>6} {:>9} {:>7} {:>7} {:>9}",
                "player", "territory", "border", "regions", "buildings"
            );
            for s in app::player_stats(&world) {
                println!(
                    "{:>6} {:>9} {:>7} {:>7} {:>9}",
                    s.player.to_string(),
                    s.territory,
                    s.border,
                    s.regions,
                    s.buildings
                );
            }
            if dump {
                println!();
                print!("{}", app::render_ascii(&world));
            }
        }
        Command::Generate {
            seed,
            buildings,
            removal_chance,
            out,
        } => {
            let params = ScenarioParams {
                seed,
                military_buildings: buildings,
                removal_chance,
            };
            let log = app::generate(&config, &params, &out)?;
            println!("Wrote {} events to {}", log.events.len(), out.display());
        }
        Command::Verify { scenario } => {
            let outcome = app::verify(config, &scenario)?;
            if !outcome.is_consistent() {
                println!(
                    "MISMATCH: {} points differ from a full recompute after {} events",
                    outcome.mismatches.len(),
                    outcome.events
                );
                for pt in outcome.mismatches.iter().take(20) {
                    println!("  {pt}");
                }
                return Ok(ExitCode::FAILURE);
            }
            println!("OK: {} events replayed, ownership consistent", outcome.events);
        }
    }

    Ok(ExitCode::SUCCESS)
}
