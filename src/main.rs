//! Discolor - A Rust GUI editor for Discord colored text
//!
//! Select text, click a color, copy the result as an `ansi` code block and
//! paste it into Discord.

mod app;

use std::env;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use discolor::Config;
use eframe::egui;
use tracing::{error, info, warn};

use app::DiscolorApp;

/// Command line options
#[derive(Debug, Default)]
struct AppArgs {
    /// Configuration file path
    config_path: Option<PathBuf>,
    /// Enable debug logging
    debug: bool,
    /// Window width
    width: Option<f32>,
    /// Window height
    height: Option<f32>,
}

impl AppArgs {
    /// Parse command line arguments
    fn parse() -> anyhow::Result<Self> {
        let args: Vec<String> = env::args().collect();
        let mut app_args = AppArgs::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--config" | "-c" => {
                    let path = args.get(i + 1).context("Missing config file path")?;
                    app_args.config_path = Some(PathBuf::from(path));
                    i += 1;
                }
                "--debug" | "-d" => {
                    app_args.debug = true;
                }
                "--width" | "-w" => {
                    app_args.width = args.get(i + 1).and_then(|v| v.parse().ok());
                    i += 1;
                }
                "--height" | "-h" => {
                    app_args.height = args.get(i + 1).and_then(|v| v.parse().ok());
                    i += 1;
                }
                "--help" | "-?" => {
                    print_help();
                    process::exit(0);
                }
                "--version" | "-v" => {
                    println!("Discolor v{}", discolor::VERSION);
                    process::exit(0);
                }
                arg if arg.starts_with('-') => {
                    anyhow::bail!("Unknown option: {}", arg);
                }
                other => {
                    warn!("Ignoring positional argument: {}", other);
                }
            }
            i += 1;
        }

        Ok(app_args)
    }
}

/// Print help information
fn print_help() {
    println!("Discolor - Discord colored text generator");
    println!();
    println!("USAGE:");
    println!("    discolor [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <PATH>    Path to configuration file");
    println!("    -d, --debug            Enable debug logging");
    println!("    -w, --width <WIDTH>    Initial window width");
    println!("    -h, --height <HEIGHT>  Initial window height");
    println!("    -?, --help             Print this help message");
    println!("    -v, --version          Print version information");
    println!();
    println!("CONFIGURATION:");
    println!("    Discolor looks for configuration files in the following order:");
    println!("    1. Path specified with --config");
    println!("    2. $DISCOLOR_CONFIG");
    println!("    3. $XDG_CONFIG_HOME/discolor/config.toml");
    println!("    4. ~/.config/discolor/config.toml");
    println!("    5. ~/.discolor/config.toml");
    println!("    6. ./discolor.toml");
    println!("    7. Built-in defaults");
    println!();
    println!("ENVIRONMENT:");
    println!("    DISCOLOR_CONFIG    Path to configuration file");
    println!("    DISCOLOR_DEBUG     Enable debug logging (1 or true)");
    println!("    RUST_LOG           Set logging level (error, warn, info, debug, trace)");
}

fn main() -> anyhow::Result<()> {
    let args = AppArgs::parse().unwrap_or_else(|e| {
        eprintln!("Failed to parse arguments: {}", e);
        print_help();
        process::exit(1);
    });

    init_logging(&args);
    info!("Starting Discolor v{}", discolor::VERSION);

    let config_path = args
        .config_path
        .clone()
        .or_else(|| env::var("DISCOLOR_CONFIG").ok().map(PathBuf::from));
    let (config, session) =
        discolor::init(config_path.as_deref()).context("Failed to start editor session")?;
    let native_options = create_native_options(&args, &config);

    let app = DiscolorApp::new(config, session);
    eframe::run_native(
        "Discolor",
        native_options,
        Box::new(move |cc| {
            app.colors().apply_to(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| {
        error!("Application failed: {}", e);
        anyhow::anyhow!("Application failed: {}", e)
    })?;

    info!("Discolor shutdown complete");
    Ok(())
}

/// Install the tracing subscriber
fn init_logging(args: &AppArgs) {
    let debug_env = env::var("DISCOLOR_DEBUG")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    let log_level = if args.debug || debug_env { "debug" } else { "info" };

    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .with_target(false)
        .compact()
        .init();
}

/// Create native options for the application window
fn create_native_options(args: &AppArgs, config: &Config) -> eframe::NativeOptions {
    let width = args.width.unwrap_or(config.ui.window_width);
    let height = args.height.unwrap_or(config.ui.window_height);

    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Discolor")
            .with_app_id("discolor")
            .with_inner_size([width, height])
            .with_min_inner_size([400.0, 300.0]),
        renderer: eframe::Renderer::Glow,
        ..Default::default()
    }
}
