use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use rootpatch::catalog::Catalog;
use rootpatch::cli::{Cli, Command, HardwareSource};
use rootpatch::detect::{HardwareFactSheet, ProbeReport};
use rootpatch::os::OsVersion;
use rootpatch::resolve::{self, FeatureFlags, ResolveInput};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Detect { source } => cmd_detect(&source, cli.json)?,
        Command::Resolve { source, os } => {
            let flags = rootpatch::config::load(cli.config.as_ref()).feature_flags();
            cmd_resolve(&source, os, flags, cli.json)?
        }
        Command::Catalog { os } => cmd_catalog(os, cli.json),
        Command::Models => cmd_models(cli.json),
        Command::Completions { shell } => rootpatch::cli::print_completions(shell),
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    let directive = match verbose {
        0 => None,
        1 => Some("rootpatch=info"),
        _ => Some("rootpatch=debug"),
    };
    if let Some(directive) = directive
        && let Ok(parsed) = directive.parse()
    {
        env_filter = env_filter.add_directive(parsed);
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_fact_sheet(source: &HardwareSource) -> Result<HardwareFactSheet> {
    if let Some(path) = &source.probe {
        let report = ProbeReport::load(path)?;
        if !report.has_hardware() {
            tracing::warn!("probe report {} lists no hardware", path.display());
        }
        return Ok(HardwareFactSheet::from_probe(&report));
    }
    let model = source
        .model
        .as_deref()
        .context("either --probe or --model is required")?;
    Ok(HardwareFactSheet::from_model(model)?)
}

fn cmd_detect(source: &HardwareSource, json: bool) -> Result<()> {
    let sheet = load_fact_sheet(source)?;
    let predicates = rootpatch::classify::classify(&sheet);

    if json {
        rootpatch::output::print_detect_json(&sheet, &predicates);
        return Ok(());
    }

    rootpatch::output::print_fact_sheet(&sheet);
    rootpatch::output::print_predicates(&predicates);
    Ok(())
}

fn cmd_resolve(
    source: &HardwareSource,
    os: OsVersion,
    flags: FeatureFlags,
    json: bool,
) -> Result<()> {
    let sheet = load_fact_sheet(source)?;
    let input = ResolveInput::new(&sheet, os, flags);
    let resolved = resolve::resolve(&input, Catalog::builtin());

    if json {
        rootpatch::output::print_resolve_json(&sheet, &resolved);
        return Ok(());
    }

    rootpatch::output::print_fact_sheet(&sheet);
    rootpatch::output::print_resolved(&resolved);

    if resolved.has_patches() && !resolved.patching_possible() {
        println!(
            "  Fix the checks above, then run {} again.",
            "rootpatch resolve".cyan()
        );
    }
    Ok(())
}

fn cmd_catalog(os: OsVersion, json: bool) {
    let catalog = Catalog::builtin();
    if json {
        rootpatch::output::print_catalog_json(catalog, os);
    } else {
        rootpatch::output::print_catalog(catalog, os);
    }
}

fn cmd_models(json: bool) {
    let models = rootpatch::models::all();
    if json {
        rootpatch::output::print_models_json(models);
    } else {
        rootpatch::output::print_models(models);
    }
}
