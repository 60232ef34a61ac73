use std::fs;
use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use gla_check::{CheckConfig, CheckReport, FormCheck};
use gla_diff::{apply_operations, build_update_body, AssetGroupUpdateBody};
use gla_text::{character_counter, counter_for, CounterKind};
use gla_types::{AssetField, AssetGroup, AssetOperation, FormValues, OperationKind};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::cli::*;
use crate::config::CliConfig;

/// Resolved output settings: flags first, then the config file.
struct Output {
    format: OutputFormat,
    pretty: bool,
}

impl Output {
    fn json<T: Serialize>(&self, value: &T) -> anyhow::Result<String> {
        let text = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(text)
    }
}

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::load(cli.config.as_deref())?;
    let output = Output {
        format: cli.format.unwrap_or(config.format),
        pretty: config.pretty,
    };

    let text = match cli.command {
        Command::Diff(args) => cmd_diff(&args, &output)?,
        Command::Apply(args) => cmd_apply(&args, &output)?,
        Command::Count(args) => cmd_count(&args, &config, &output)?,
        Command::Check(args) => {
            let (text, report) = cmd_check(&args, &config, &output)?;
            println!("{text}");
            if !report.is_ok() {
                anyhow::bail!("{} violation(s) found", report.violations.len());
            }
            return Ok(());
        }
    };
    println!("{text}");
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn cmd_diff(args: &DiffArgs, output: &Output) -> anyhow::Result<String> {
    let group: AssetGroup = read_json(&args.group)?;
    let values: FormValues = read_json(&args.values)?;
    let body = build_update_body(&group, &values);

    match output.format {
        OutputFormat::Json => output.json(&body),
        OutputFormat::Text => Ok(render_body(&body)),
    }
}

fn render_body(body: &AssetGroupUpdateBody) -> String {
    let mut lines = vec![
        format!("Final URL: {}", body.final_url.bold()),
        format!("Display path: /{}/{}", body.path1, body.path2),
    ];
    if body.assets.is_empty() {
        lines.push("No asset changes.".to_string());
    } else {
        lines.extend(body.assets.iter().map(render_operation));
        let created = body
            .assets
            .iter()
            .filter(|op| op.kind() == OperationKind::Create)
            .count();
        lines.push(format!(
            "{} to create, {} to delete",
            created,
            body.assets.len() - created
        ));
    }
    lines.join("\n")
}

fn render_operation(op: &AssetOperation) -> String {
    match (op.kind(), op.id(), op.content()) {
        (OperationKind::Delete, Some(id), _) => {
            format!("  {} {} {}", "-".red().bold(), op.field_type(), id.to_string().dimmed())
        }
        (_, _, content) => format!(
            "  {} {} {:?}",
            "+".green().bold(),
            op.field_type(),
            content.unwrap_or_default()
        ),
    }
}

fn cmd_apply(args: &ApplyArgs, output: &Output) -> anyhow::Result<String> {
    let group: AssetGroup = read_json(&args.group)?;
    let operations: Vec<AssetOperation> = read_json(&args.ops)?;
    let applied = apply_operations(&group, &operations)?;

    match output.format {
        OutputFormat::Json => output.json(&applied),
        OutputFormat::Text => {
            if applied.asset_count() == 0 {
                return Ok("Asset group is empty.".to_string());
            }
            let mut lines = Vec::new();
            for field in AssetField::ALL {
                for entity in applied.entities(field) {
                    lines.push(format!(
                        "{:<26} {:>6}  {}",
                        field.to_string(),
                        entity.id.to_string(),
                        entity.content
                    ));
                }
            }
            lines.push(format!("{} asset(s)", applied.asset_count()));
            Ok(lines.join("\n"))
        }
    }
}

#[derive(Serialize)]
struct CountEntry<'a> {
    text: &'a str,
    count: usize,
}

fn cmd_count(args: &CountArgs, config: &CliConfig, output: &Output) -> anyhow::Result<String> {
    let count = match args.kind.as_deref() {
        Some(kind) => counter_for(kind)?,
        None => character_counter(config.counter_kind),
    };
    let entries: Vec<CountEntry> = args
        .texts
        .iter()
        .map(|text| CountEntry {
            text,
            count: count(text),
        })
        .collect();

    match output.format {
        OutputFormat::Json => output.json(&entries),
        OutputFormat::Text => Ok(entries
            .iter()
            .map(|e| format!("{:>4}  {}", e.count.to_string().bold(), e.text))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn cmd_check(
    args: &CheckArgs,
    config: &CliConfig,
    output: &Output,
) -> anyhow::Result<(String, CheckReport)> {
    let values: FormValues = read_json(&args.values)?;
    let counter_kind = match args.kind.as_deref() {
        Some(kind) => kind.parse::<CounterKind>()?,
        None => config.counter_kind,
    };
    let check_config = CheckConfig {
        counter_kind,
        enforce_minimums: !args.draft,
    };
    let report = FormCheck::with_default_stages(check_config).run(&values);

    let text = match output.format {
        OutputFormat::Json => output.json(&report)?,
        OutputFormat::Text if report.is_ok() => format!("{} All checks passed.", "✓".green().bold()),
        OutputFormat::Text => report
            .violations
            .iter()
            .map(|v| format!("{} {}", "✗".red().bold(), v))
            .collect::<Vec<_>>()
            .join("\n"),
    };
    Ok((text, report))
}
