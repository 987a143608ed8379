use std::path::PathBuf;
use std::process::exit;

use crate::api::cli::Cli;
use crate::config::config::Config;
use crate::error::ExtractionError;
use crate::logging::YtDlpLog;
use crate::source::ytdlp::YtDlpSource;
use crate::types::Browser;

mod api;
mod config;
mod error;
mod interrupt;
mod logging;
mod partition;
mod pipeline;
mod progress;
mod source;
mod types;
mod writer;

fn main() {
    let cli = Cli {};
    let program = cli.run();

    let config = match Config::new_from_file(program.config) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("ERROR: invalid configuration: {:#}", err);
            exit(1);
        }
    };

    let Some(browser) = program.browser.or_else(|| config.browser()) else {
        eprintln!("ERROR: You must set a browser with --browser or in the config file.");
        eprintln!(
            "Supported browsers are: {}",
            [Browser::Firefox.id(), Browser::Chrome.id()].join(", ")
        );
        exit(1);
    };

    let profile_path = match &program.profile {
        Some(profile) => Some(profile.clone()),
        None => match config.profile_path(browser) {
            Ok(path) => path,
            Err(err) => {
                eprintln!("ERROR: invalid configuration: {:#}", err);
                exit(1);
            }
        },
    };

    let public_output = program
        .public_output
        .map(PathBuf::from)
        .unwrap_or_else(|| config.public_output());
    let private_output = program
        .private_output
        .map(PathBuf::from)
        .unwrap_or_else(|| config.private_output());

    if let Err(err) = interrupt::install_handler() {
        eprintln!("WARNING: {}", err);
    }

    println!(
        "Starting the process to fetch videos using {} cookies...",
        browser
    );
    match &profile_path {
        Some(path) => println!("Using specified profile path: {}", path),
        None => println!("Using default browser profile."),
    }

    let mut source = YtDlpSource::new(browser, profile_path, YtDlpLog::new());

    match pipeline::run(
        &mut source,
        &public_output,
        &private_output,
        !program.no_progress,
    ) {
        Ok(()) => {}
        Err(err) => {
            if let Some(extraction) = err.downcast_ref::<ExtractionError>() {
                report_extraction_failure(extraction);
            } else {
                eprintln!("\nAn unexpected error occurred: {:#}", err);
            }
            exit(1);
        }
    }
}

fn report_extraction_failure(err: &ExtractionError) {
    let browser = err.browser;

    eprintln!(
        "\nCRITICAL ERROR: Could not fetch the YouTube playlist using {} cookies.",
        browser
    );
    eprintln!("   yt-dlp error: {}", err.detail);
    eprintln!("\n--- Common Solutions ---");
    eprintln!("1. Ensure your browser ({}) is completely closed.", browser);
    eprintln!(
        "2. Make sure you are logged into YouTube in the correct {} profile.",
        browser
    );
    eprintln!(
        "3. If you use a non-default profile, pass it with --profile or set it in the config file."
    );
}
