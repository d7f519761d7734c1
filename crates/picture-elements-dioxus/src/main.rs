use dioxus::prelude::*;
use picture_elements_config::Config;
use picture_elements_dioxus::ui::App;
use std::env;
use std::path::PathBuf;
use std::process;

/// Where the editor keeps its saved card and host
#[derive(Debug, Clone)]
struct StateDir(PathBuf);

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    log::info!("picture-elements-editor starting up");

    let args: Vec<String> = env::args().collect();
    let state_dir = match args.len() {
        2 => {
            let state_dir = PathBuf::from(&args[1]);
            log::info!(
                "Using state directory from CLI argument: {}",
                state_dir.display()
            );
            state_dir
        }
        1 => match Config::load_or_create() {
            Ok(config) => {
                log::info!(
                    "Using state directory from {}: {}",
                    Config::config_path().display(),
                    config.state_dir.display()
                );
                config.state_dir
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} [state-dir]", program_name(&args));
                process::exit(1);
            }
        },
        _ => {
            eprintln!("Usage: {} [state-dir]", program_name(&args));
            process::exit(1);
        }
    };

    if state_dir.exists() && !state_dir.is_dir() {
        eprintln!(
            "Error: State path '{}' is not a directory",
            state_dir.display()
        );
        process::exit(1);
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .with_context(StateDir(state_dir))
        .launch(app_root);
}

fn program_name(args: &[String]) -> &str {
    args.first()
        .map(String::as_str)
        .unwrap_or("picture-elements-editor")
}

fn app_root() -> Element {
    let StateDir(state_dir) = use_context::<StateDir>();

    rsx! {
        App { state_dir }
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("Picture Elements Card Editor")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
