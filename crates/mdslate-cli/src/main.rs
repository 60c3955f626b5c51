use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

use mdslate_core::json::{parse_overrides, parse_root, to_json, to_json_pretty};
use mdslate_core::{TypeOverrides, default_types, mdast_to_slate, resolve};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

fn main() {
    let mut input: Option<String> = None;
    let mut config_path: Option<String> = None;
    let mut pretty = false;
    let mut print_config = false;
    let mut log_level = String::from("warn");

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "--pretty" => pretty = true,
            "--print-config" => print_config = true,
            "--config" => match args.next() {
                Some(path) => config_path = Some(path),
                None => {
                    eprintln!("--config expects a file path");
                    print_usage();
                    process::exit(2);
                }
            },
            "--log-level" => match args.next() {
                Some(level) => log_level = level,
                None => {
                    eprintln!("--log-level expects: error | warn | info | debug | trace");
                    print_usage();
                    process::exit(2);
                }
            },
            _ => {
                if input.is_none() {
                    input = Some(arg);
                } else {
                    eprintln!("unexpected argument: {}", arg);
                    print_usage();
                    process::exit(2);
                }
            }
        }
    }

    init_logging(&log_level);

    let overrides = match config_path {
        Some(path) => {
            let text = read_file(&path);
            parse_overrides(&text).unwrap_or_else(|err| {
                error!(path = %path, "rejected type configuration");
                eprintln!("{}: {}", path, err);
                process::exit(1);
            })
        }
        None => TypeOverrides::default(),
    };

    if print_config {
        let resolved = resolve(&overrides, default_types());
        let rendered = if pretty {
            serde_json::to_string_pretty(&resolved)
        } else {
            serde_json::to_string(&resolved)
        };
        match rendered {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("failed to serialize configuration: {}", err);
                process::exit(1);
            }
        }
        return;
    }

    let source = match input {
        Some(path) => read_file(&path),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .unwrap_or_else(|err| {
                    eprintln!("failed to read stdin: {}", err);
                    process::exit(1);
                });
            buffer
        }
    };

    let root = parse_root(&source).unwrap_or_else(|err| {
        eprintln!("{}", err);
        process::exit(1);
    });
    debug!(top_level = root.children.len(), "parsed mdast tree");

    let nodes = mdast_to_slate(&root, Some(&overrides));
    let output = if pretty {
        to_json_pretty(&nodes)
    } else {
        to_json(&nodes)
    };

    match output {
        Ok(json) => println!("{}", json),
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "Usage: mdslate-cli [--config FILE] [--pretty] [--print-config] [--log-level LEVEL] [input]"
    );
}

// Logs go to stderr; stdout carries only the JSON result.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_file(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|err| {
        eprintln!("failed to read {}: {}", path, err);
        process::exit(1);
    })
}
