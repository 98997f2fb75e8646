use std::env;
use std::io::Read;

use anyhow::{anyhow, Context};
use serde::Deserialize;

use latch_popup::{
    place, BadBrowser, BoxSize, ClickDescription, LatchOrientation, Settings,
};

/// Placement request read from a file or stdin
#[derive(Debug, Deserialize)]
struct PlacementRequest {
    click: ClickDescription,
    #[serde(default)]
    orientation: Option<LatchOrientation>,
    popup_size: BoxSize,
    viewport_size: BoxSize,
    #[serde(default)]
    bad_browser: Option<BadBrowser>,
}

fn print_usage() {
    eprintln!("latch-popup - Latch-anchored popup placement");
    eprintln!();
    eprintln!("Usage: latch-popup <command>");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  place [--file <path>] [--orientation <h|v>] [--browser <name>]");
    eprintln!("                    Read a JSON placement request (stdin if no --file)");
    eprintln!("                    and print the popup and latch styles as JSON");
    eprintln!("  defaults          Print the default settings as YAML");
    eprintln!("  config-path       Print the settings file location");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  echo '{{\"click\":{{\"kind\":\"point\",\"left_px\":120,\"top_px\":80}},");
    eprintln!("        \"popup_size\":{{\"width_px\":200,\"height_px\":100}},");
    eprintln!("        \"viewport_size\":{{\"width_px\":800,\"height_px\":600}}}}' | latch-popup place");
}

fn get_arg_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn read_request(args: &[String]) -> anyhow::Result<PlacementRequest> {
    let contents = match get_arg_value(args, "--file") {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read request file {}", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read request from stdin")?;
            buf
        }
    };

    serde_json::from_str(&contents).context("Invalid placement request")
}

fn run_place(args: &[String]) -> anyhow::Result<()> {
    let settings = Settings::load();
    let request = read_request(args)?;

    let orientation = match get_arg_value(args, "--orientation") {
        Some(value) => LatchOrientation::from_string(&value)
            .ok_or_else(|| anyhow!("Unknown orientation: {}", value))?,
        None => request.orientation.unwrap_or(settings.latch_orientation),
    };

    let bad_browser = match get_arg_value(args, "--browser") {
        Some(value) => BadBrowser::from_string(&value)
            .ok_or_else(|| anyhow!("Unknown browser: {}", value))?,
        None => request.bad_browser.unwrap_or(settings.bad_browser),
    };

    log::info!(
        "Placing popup: orientation={:?} browser={:?}",
        orientation,
        bad_browser
    );

    let placement = place(
        &settings,
        &request.click,
        orientation,
        bad_browser,
        request.popup_size,
        request.viewport_size,
    )?;

    println!("{}", serde_json::to_string_pretty(&placement)?);
    Ok(())
}

fn run(args: &[String]) -> anyhow::Result<()> {
    let command = args[1].as_str();

    match command {
        "place" | "p" => run_place(args),
        "defaults" => {
            let yaml = Settings::default().to_yaml().map_err(|e| anyhow!(e))?;
            print!("{}", yaml);
            Ok(())
        }
        "config-path" => {
            let path = Settings::file_path()
                .ok_or_else(|| anyhow!("Could not determine config directory"))?;
            println!("{}", path.display());
            Ok(())
        }
        "help" | "-h" | "--help" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            std::process::exit(1);
        }
    }
}

fn main() {
    latch_popup::init_logger();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
