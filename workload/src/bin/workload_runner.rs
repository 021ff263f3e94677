//! Workload runner.
//!
//! Runs a command mix against the in-memory scene and prints a summary.
//!
//! Usage:
//!   cargo run -p strew-workload --bin workload-runner -- [OPTIONS]
//!
//! Options:
//!   --count <N>     Number of command invocations (default: 1000)
//!   --seed <N>      Generator seed (default: 42)
//!   --preset <NAME> Preset mix: default, primitives, hierarchy
//!   --mix <FILE>    JSON mix file overriding the preset
//!   --json          Print the report as JSON instead of text
//!   --output <FILE> Also write the JSON report to a file
//!   --help          Print this help

use std::fs;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use strew_engine::{Command, Runner};
use strew_ops::builtins;
use strew_workload::{from_json, preset, RunReport};

#[derive(Debug)]
struct RunConfig {
    count: usize,
    seed: u64,
    preset: String,
    mix_path: Option<PathBuf>,
    json: bool,
    output: Option<PathBuf>,
    help: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            count: 1000,
            seed: 42,
            preset: "default".to_string(),
            mix_path: None,
            json: false,
            output: None,
            help: false,
        }
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{}", message);
            print_usage();
            process::exit(2);
        }
    };

    if config.help {
        print_usage();
        return;
    }

    let commands = match load_commands(&config) {
        Ok(commands) => commands,
        Err(message) => {
            eprintln!("{}", message);
            process::exit(1);
        }
    };

    let mix_label = match &config.mix_path {
        Some(path) => path.display().to_string(),
        None => config.preset.clone(),
    };

    let started = Instant::now();
    let context = match Runner::new().seed(config.seed).run(&commands, config.count) {
        Ok(context) => context,
        Err(error) => {
            eprintln!("run failed: {}", error);
            process::exit(1);
        }
    };
    let report = RunReport::collect(&context, config.seed, config.count, started.elapsed());

    let json = match report.to_json() {
        Ok(json) => json,
        Err(error) => {
            eprintln!("failed to render report: {}", error);
            process::exit(1);
        }
    };

    if config.json {
        println!("{}", json);
    } else {
        println!("strew workload");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("  mix:         {}", mix_label);
        println!("  iterations:  {}", report.iterations);
        println!("  seed:        {}", report.seed);
        println!("  nodes:       {}", report.nodes);
        println!("  connections: {}", report.connections);
        println!("  groups:      {}", report.groups);
        println!("  elapsed:     {} ms", report.elapsed_ms);
    }

    if let Some(path) = &config.output {
        if let Err(error) = fs::write(path, &json) {
            eprintln!("failed to write {}: {}", path.display(), error);
            process::exit(1);
        }
    }
}

fn load_commands(config: &RunConfig) -> Result<Vec<Command>, String> {
    match &config.mix_path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|error| format!("failed to read {}: {}", path.display(), error))?;
            let registry = builtins();
            from_json(&text, &registry).map_err(|error| error.to_string())
        }
        None => preset(&config.preset).map_err(|error| error.to_string()),
    }
}

fn parse_args(args: &[String]) -> Result<RunConfig, String> {
    let mut config = RunConfig::default();
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--count" => config.count = parse_value(iter.next(), "--count")?,
            "--seed" => config.seed = parse_value(iter.next(), "--seed")?,
            "--preset" => {
                config.preset = iter
                    .next()
                    .ok_or("--preset expects a name")?
                    .to_string();
            }
            "--mix" => {
                config.mix_path = Some(PathBuf::from(
                    iter.next().ok_or("--mix expects a file path")?,
                ));
            }
            "--json" => config.json = true,
            "--output" => {
                config.output = Some(PathBuf::from(
                    iter.next().ok_or("--output expects a file path")?,
                ));
            }
            "--help" | "-h" => config.help = true,
            other => return Err(format!("unknown option: {}", other)),
        }
    }

    Ok(config)
}

fn parse_value<T: std::str::FromStr>(value: Option<&String>, flag: &str) -> Result<T, String> {
    let text = value.ok_or_else(|| format!("{} expects a value", flag))?;
    text.parse()
        .map_err(|_| format!("{} expects a number, got '{}'", flag, text))
}

fn print_usage() {
    println!("Usage: workload-runner [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --count <N>     Number of command invocations (default: 1000)");
    println!("  --seed <N>      Generator seed (default: 42)");
    println!("  --preset <NAME> Preset mix: default, primitives, hierarchy");
    println!("  --mix <FILE>    JSON mix file overriding the preset");
    println!("  --json          Print the report as JSON instead of text");
    println!("  --output <FILE> Also write the JSON report to a file");
    println!("  --help          Print this help");
}
