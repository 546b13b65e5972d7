// Wed Aug 05 2026 - Alex

use anyhow::Context;
use archive_plugin_loader::config::LoaderConfig;
use archive_plugin_loader::loader::PluginLoader;
use archive_plugin_loader::utils::{self, LoggingUtils};
use clap::Parser;
use colored::Colorize;
use indicatif::ProgressBar;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Concurrent service plugin loader for archive directories", long_about = None)]
struct Args {
    #[arg(short, long)]
    directory: PathBuf,

    #[arg(short, long, required = true)]
    service: Vec<String>,

    #[arg(short, long)]
    extension: Vec<String>,

    #[arg(short, long)]
    workers: Option<usize>,

    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long)]
    no_progress: bool,
}

#[derive(Serialize)]
struct LoadReport {
    directory: String,
    services: Vec<ServiceReport>,
    plugins: Vec<PluginReport>,
}

#[derive(Serialize)]
struct ServiceReport {
    service: String,
    discovered: usize,
}

#[derive(Serialize)]
struct PluginReport {
    symbol: String,
    archive: String,
}

fn main() {
    let args = Args::parse();
    LoggingUtils::init(LoggingUtils::level_from_verbosity(args.verbose));

    if let Err(e) = run(args) {
        eprintln!("{} {:#}", "[!]".red(), e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let start_time = Instant::now();

    let mut config = match &args.config {
        Some(path) => LoaderConfig::from_file(path).map_err(|e| anyhow::anyhow!(e))?,
        None => LoaderConfig::default(),
    };
    config.plugin_dir = args.directory.clone();
    if !args.extension.is_empty() {
        config.set_extensions(&args.extension);
    }
    if let Some(workers) = args.workers {
        config.max_workers = workers;
    }
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    println!(
        "{} Scanning {} for {} service(s)",
        "[*]".blue(),
        args.directory.display(),
        args.service.len()
    );

    let mut loader = PluginLoader::with_config(config);
    let mut services = Vec::new();

    for service in &args.service {
        let spinner = if args.no_progress {
            None
        } else {
            let pb = ProgressBar::new_spinner();
            pb.set_message(format!("Loading {}...", service));
            pb.enable_steady_tick(Duration::from_millis(80));
            Some(pb)
        };

        let added = loader.load(service)?;
        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }

        println!(
            "{} {} implementation(s) of {}",
            "[+]".green(),
            added,
            service
        );
        services.push(ServiceReport {
            service: service.clone(),
            discovered: added,
        });
    }

    if loader.plugin_count() == 0 {
        println!("{} No plugins discovered", "[!]".yellow());
    } else {
        println!();
        for plugin in loader.cursor() {
            println!(
                "    {} {}",
                plugin.symbol().bold(),
                format!("({})", plugin.archive()).dimmed()
            );
        }
        println!();
    }

    if let Some(output) = &args.output {
        let report = LoadReport {
            directory: args.directory.display().to_string(),
            services,
            plugins: loader
                .cursor()
                .map(|plugin| PluginReport {
                    symbol: plugin.symbol().to_string(),
                    archive: plugin.archive().to_string(),
                })
                .collect(),
        };
        let json = serde_json::to_string_pretty(&report)?;
        fs::write(output, json)
            .with_context(|| format!("Cannot write report to {}", output.display()))?;
        println!("{} Report written to {}", "[+]".green(), output.display());
    }

    println!(
        "{} Done in {}",
        "[*]".blue(),
        utils::format_duration(start_time.elapsed())
    );
    Ok(())
}
