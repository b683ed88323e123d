use crate::app::cli::Cli;
use crate::app::models::{IndentKind, RuntimeConfig};
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;

#[derive(Deserialize, Debug)]
struct PresetsFile {
    #[serde(flatten)]
    presets: HashMap<String, PresetConfig>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "kebab-case")]
struct PresetConfig {
    indent_type: Option<String>,
    indent_width: Option<usize>,
    max_newlines: Option<usize>,
    exclude: Option<Vec<String>>,
}

fn load_presets_file() -> Result<HashMap<String, PresetConfig>> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    let config_path = home.join(".config").join("tidytree").join("presets.toml");

    if !config_path.exists() {
        return Ok(HashMap::new());
    }

    let content = fs::read_to_string(&config_path)
        .context(format!("Failed to read config at {:?}", config_path))?;

    let parsed: PresetsFile = toml::from_str(&content).context("Failed to parse presets.toml")?;

    Ok(parsed.presets)
}

/// Accepts `tabs`/`spaces` loosely: case-insensitive, and either an
/// abbreviation (`t`, `sp`) or anything extending `tab`/`space`.
pub fn parse_indent_kind(value: &str) -> Result<IndentKind> {
    let v = value.to_ascii_lowercase();
    if !v.is_empty() && ("tabs".starts_with(&v) || v.starts_with("tab")) {
        Ok(IndentKind::Tabs)
    } else if !v.is_empty() && ("spaces".starts_with(&v) || v.starts_with("space")) {
        Ok(IndentKind::Spaces)
    } else {
        bail!(
            "Unknown indent type `{}'; valid options are `tabs' or `spaces'",
            value
        )
    }
}

fn merge_vecs(preset_vec: Option<Vec<String>>, cli_vec: Option<Vec<String>>) -> Vec<String> {
    let mut combined = preset_vec.unwrap_or_default();
    if let Some(mut cli_items) = cli_vec {
        combined.append(&mut cli_items);
    }
    // Deduplicate while keeping order
    let mut seen = std::collections::HashSet::new();
    combined.retain(|item| seen.insert(item.clone()));
    combined
}

/// Merges an optional preset under the CLI args and validates the result.
/// Any failure here is fatal and happens before file I/O starts.
pub fn resolve_config(cli: Cli) -> Result<RuntimeConfig> {
    let preset = match cli.preset.as_deref() {
        Some(key) => load_presets_file()?
            .remove(key)
            .with_context(|| format!("No preset named `{}' in presets.toml", key))?,
        None => PresetConfig::default(),
    };
    merge_config(cli, preset)
}

/// CLI values win over preset values; defaults fill whatever is left.
fn merge_config(cli: Cli, preset: PresetConfig) -> Result<RuntimeConfig> {
    let indent_type = cli
        .indent_type
        .or(preset.indent_type)
        .unwrap_or_else(|| "tabs".to_string());
    let indent_kind = parse_indent_kind(&indent_type)?;

    let indent_width = cli.indent_width.or(preset.indent_width).unwrap_or(4);
    if indent_width == 0 {
        bail!("Indent width must be a positive integer");
    }

    Ok(RuntimeConfig {
        indent_kind,
        indent_width,
        max_blank_lines: cli.max_newlines.or(preset.max_newlines).unwrap_or(2),
        exclude: merge_vecs(preset.exclude, cli.exclude),
        verbose: cli.verbose,
    })
}
