//! Offline front end for the build analyzer
//!
//! Usage:
//!   cargo run --bin doctor_cli -- analyze size=5 weight=450 battery=4S style=racing prop_size=5 blades=3 pitch=4.3
//!   cargo run --bin doctor_cli -- check dump.txt
//!   cargo run --bin doctor_cli -- check -        (read the dump from stdin)
//!
//! Set PRESETS_PATH to use a preset table other than the embedded one.

use anyhow::{bail, Context, Result};
use config_doctor::advisor::load_or_embedded;
use config_doctor::{analyze_build, check_cli_dump, parse_build_inputs, FormFields, ServerConfig};
use std::io::Read;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("analyze") => analyze(&args[1..]),
        Some("check") => check(args.get(1).map(String::as_str)),
        _ => {
            eprintln!("usage: doctor_cli analyze key=value ... | doctor_cli check <file|->");
            std::process::exit(2);
        }
    }
}

fn analyze(pairs: &[String]) -> Result<()> {
    let mut fields = FormFields::new();
    for pair in pairs {
        let Some((key, value)) = pair.split_once('=') else {
            bail!("expected key=value, got '{}'", pair);
        };
        fields.insert(key.to_string(), value.to_string());
    }

    let inputs = parse_build_inputs(&fields)?;

    let config = ServerConfig::from_env();
    let presets = load_or_embedded(config.presets_path.as_deref());
    let report = analyze_build(&inputs, presets.as_ref());

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn check(source: Option<&str>) -> Result<()> {
    let text = match source {
        Some("-") | None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read CLI dump from stdin")?;
            buf
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read CLI dump: {}", path))?,
    };

    let verdict = check_cli_dump(&text);
    println!("{}", verdict.message);
    Ok(())
}
