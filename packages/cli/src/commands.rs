//! Command implementations.

use anyhow::{bail, Context};
use brandkit_compiler_css::compile_brand_css;
use brandkit_document::{apply_json_edit, EditScope, Section};
use clap::Args;
use colored::Colorize;
use serde_json::Value;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Brand config JSON file
    pub file: PathBuf,
}

#[derive(Args, Debug)]
pub struct CssArgs {
    /// Brand config JSON file
    pub file: PathBuf,

    /// Write CSS here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Brand config JSON file to edit
    pub file: PathBuf,

    /// Module scope: all, colors, typography, layout, or identity
    #[arg(long, default_value = "all")]
    pub module: String,

    /// File holding the JSON text to apply
    #[arg(long)]
    pub json: PathBuf,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

fn read_config(path: &Path) -> anyhow::Result<Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let config: Value =
        serde_json::from_str(&text).with_context(|| format!("invalid JSON in {}", path.display()))?;
    if !config.is_object() {
        bail!("{}: document root must be a JSON object", path.display());
    }
    Ok(config)
}

pub fn validate(args: ValidateArgs) -> anyhow::Result<()> {
    let config = read_config(&args.file)?;
    let dangling = dangling_references(&config);

    if dangling.is_empty() {
        println!("{} {} is a valid brand document", "✓".green(), args.file.display());
        return Ok(());
    }

    for warning in &dangling {
        println!("{} {warning}", "warning:".yellow().bold());
    }
    println!(
        "{} {} dangling palette reference(s); the UI renders these as raw strings",
        "✗".red(),
        dangling.len()
    );
    Ok(())
}

/// Semantic roles and gradient stops should point at existing palette
/// keys. Dangling references are tolerated at runtime but are a
/// data-quality bug worth reporting.
fn dangling_references(config: &Value) -> Vec<String> {
    let mut warnings = Vec::new();

    let palette_has = |token: &str| {
        config
            .pointer("/colors/primitives/palette")
            .and_then(|p| p.get(token))
            .is_some()
    };

    if let Some(modes) = config.pointer("/colors/modes").and_then(Value::as_object) {
        for (mode, entry) in modes {
            let Some(semantic) = entry.get("semantic").and_then(Value::as_object) else {
                continue;
            };
            for (role, token) in semantic {
                if let Some(token) = token.as_str() {
                    if !palette_has(token) {
                        warnings.push(format!(
                            "colors.modes.{mode}.semantic.{role} points at missing palette key \"{token}\""
                        ));
                    }
                }
            }
        }
    }

    if let Some(gradients) = config
        .pointer("/colors/primitives/gradients")
        .and_then(Value::as_object)
    {
        for (name, gradient) in gradients {
            for stop in gradient_stop_tokens(gradient) {
                if !palette_has(&stop) {
                    warnings.push(format!(
                        "gradient \"{name}\" has a stop pointing at missing palette key \"{stop}\""
                    ));
                }
            }
        }
    }

    warnings
}

/// Stop color tokens, accepting both sequence and legacy map shapes.
fn gradient_stop_tokens(gradient: &Value) -> Vec<String> {
    let stops = gradient.get("stops");
    let raw: Vec<&Value> = match stops {
        Some(Value::Array(items)) => items.iter().collect(),
        Some(Value::Object(map)) => map.values().collect(),
        _ => Vec::new(),
    };
    raw.into_iter()
        .filter_map(|stop| stop.get("color").and_then(Value::as_str))
        .map(str::to_string)
        .collect()
}

pub fn css(args: CssArgs) -> anyhow::Result<()> {
    let config = read_config(&args.file)?;
    let css = compile_brand_css(&config);

    match &args.output {
        Some(path) => {
            std::fs::write(path, css).with_context(|| format!("cannot write {}", path.display()))?;
            println!("{} wrote {}", "✓".green(), path.display());
        }
        None => print!("{css}"),
    }
    Ok(())
}

pub fn edit(args: EditArgs) -> anyhow::Result<()> {
    let config = read_config(&args.file)?;
    let text = std::fs::read_to_string(&args.json)
        .with_context(|| format!("cannot read {}", args.json.display()))?;

    let scope = match args.module.as_str() {
        "all" => EditScope::All,
        module => EditScope::Module(module.parse::<Section>()?),
    };

    let edit = apply_json_edit(&config, scope, &text)?;

    for key in &edit.ignored_keys {
        println!(
            "{} \"{key}\" is outside the {} module and was ignored",
            "warning:".yellow().bold(),
            args.module
        );
    }

    let pretty = serde_json::to_string_pretty(&edit.next)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, pretty)
                .with_context(|| format!("cannot write {}", path.display()))?;
            println!("{} wrote {}", "✓".green(), path.display());
        }
        None => println!("{pretty}"),
    }
    Ok(())
}
