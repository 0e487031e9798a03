/// Command-line entry point for the weather archive service.
///
/// Loads the configured archive directory into an immutable snapshot, then
/// renders the requested report on stdout. There is no mutation path into a
/// live snapshot; picking up new files means running again.

use std::env;
use std::process;

use weatherman_service::archive::WeatherArchive;
use weatherman_service::chart;
use weatherman_service::logging::{self, Component, LogLevel};
use weatherman_service::model::MonthKey;
use weatherman_service::report::ReportGenerator;
use weatherman_service::sources;

fn print_usage(program: &str) {
    eprintln!("Usage: {} <command> [args]", program);
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  report <year>         yearly extremes and monthly averages");
    eprintln!("  highlights <year>     hottest, coldest and most humid days");
    eprintln!("  chart <year> <month>  daily temperature bars for one month");
    eprintln!("  json <year>           structured year report on stdout");
    eprintln!("  stats                 load counters and available years");
    eprintln!();
    eprintln!("Environment (also read from .env):");
    eprintln!("  WEATHERFILES_CONFIG   configuration file path (default {})", sources::DEFAULT_CONFIG_PATH);
    eprintln!("  WEATHERFILES_DIR      overrides the configured archive directory");
    eprintln!("  WEATHERFILES_LOG      debug | info | warn | error (default warn)");
    eprintln!("  WEATHERFILES_LOG_FILE append log entries to this file");
}

fn require_year(args: &[String], index: usize, program: &str) -> i32 {
    let raw = match args.get(index) {
        Some(raw) => raw,
        None => {
            eprintln!("Please provide a year!");
            print_usage(program);
            process::exit(2);
        }
    };
    match raw.trim().parse() {
        Ok(year) => year,
        Err(_) => {
            eprintln!("Year must be a number, got '{}'", raw);
            process::exit(2);
        }
    }
}

fn require_month(args: &[String], index: usize) -> u8 {
    let raw = match args.get(index) {
        Some(raw) => raw,
        None => {
            eprintln!("Please provide a month!");
            process::exit(2);
        }
    };
    match raw.trim().parse::<u8>() {
        Ok(month) if (1..=12).contains(&month) => month,
        _ => {
            eprintln!("Month must be a number between 1 and 12, got '{}'", raw);
            process::exit(2);
        }
    }
}

fn main() {
    dotenv::dotenv().ok();

    // Warning by default keeps stdout clean for piped report output.
    let log_level = env::var("WEATHERFILES_LOG")
        .ok()
        .and_then(|v| logging::parse_level(&v))
        .unwrap_or(LogLevel::Warning);
    let log_file = env::var("WEATHERFILES_LOG_FILE").ok();
    logging::init_logger(log_level, log_file.as_deref(), true);

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage(&args[0]);
        process::exit(2);
    }

    let config_path = env::var("WEATHERFILES_CONFIG")
        .unwrap_or_else(|_| sources::DEFAULT_CONFIG_PATH.to_string());
    let config = match sources::load_or_default(&config_path) {
        Ok(config) => config,
        Err(e) => {
            logging::error(Component::System, None, &format!("Configuration error: {}", e));
            process::exit(1);
        }
    };

    let archive = match WeatherArchive::load(&config) {
        Ok(archive) => archive,
        Err(e) => {
            logging::error(Component::System, None, &format!("Archive load failed: {}", e));
            process::exit(1);
        }
    };
    let stats = archive.stats();
    logging::log_load_summary(&stats);
    logging::debug(
        Component::System,
        None,
        &format!("Years available: {:?}", archive.years()),
    );

    let generator = ReportGenerator::new(&archive);

    match args[1].as_str() {
        "report" => {
            let year = require_year(&args, 2, &args[0]);
            print!("{}", generator.yearly_report(year));
            print!("{}", generator.monthly_report(year));
        }
        "highlights" => {
            let year = require_year(&args, 2, &args[0]);
            print!("{}", generator.highlights_report(year));
        }
        "chart" => {
            let year = require_year(&args, 2, &args[0]);
            let month = require_month(&args, 3);
            let key = MonthKey { year, month };
            let series = chart::daily_series(archive.readings(), key);
            print!("{}", chart::temperature_bars(&series, key));
        }
        "json" => {
            let year = require_year(&args, 2, &args[0]);
            match generator.year_report_json(year) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    logging::error(
                        Component::Report,
                        None,
                        &format!("Could not serialize year report: {}", e),
                    );
                    process::exit(1);
                }
            }
        }
        "stats" => {
            println!("Files read:   {}", stats.files_read);
            println!("Rows parsed:  {}", stats.rows_parsed);
            println!("Rows skipped: {}", stats.rows_skipped);
            let years: Vec<String> = archive.years().iter().map(|y| y.to_string()).collect();
            println!("Years:        {}", years.join(", "));
        }
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage(&args[0]);
            process::exit(2);
        }
    }
}
