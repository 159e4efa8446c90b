use crate::catalog::Catalog;
use crate::classify::PredicateSet;
use crate::detect::HardwareFactSheet;
use crate::models::StockModel;
use crate::os::{OsVersion, darwin};
use crate::resolve::ResolvedPatchSet;
use colored::Colorize;

const LABEL_W: usize = 18;

fn print_box(title: &str, rows: &[(&str, String)]) {
    let inner_w = rows
        .iter()
        .map(|(l, v)| l.len().max(LABEL_W) + 2 + v.chars().count())
        .max()
        .unwrap_or(40)
        .max(title.len() + 2);

    let fill = inner_w.saturating_sub(1 + title.len());
    println!("╭─ {} {}╮", title.bold(), "─".repeat(fill));

    for (label, value) in rows {
        let padded = format!("{:<w$}", label, w = LABEL_W);
        let pad = inner_w.saturating_sub(LABEL_W + 2 + value.chars().count());
        println!("│ {}  {}{} │", padded.dimmed(), value, " ".repeat(pad));
    }

    println!("╰{}╯", "─".repeat(inner_w + 2));
}

fn section(title: &str) {
    let divider_w: usize = 64;
    let fill = divider_w.saturating_sub(2 + title.len());
    println!("── {} {}", title.bold(), "─".repeat(fill));
}

fn os_label(os: OsVersion) -> String {
    match os.release_name() {
        Some(name) => format!("Darwin {} ({})", os, name),
        None => format!("Darwin {}", os),
    }
}

fn json_envelope(body: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "generated_at": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "result": body,
    })
}

fn print_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("failed to encode JSON: {}", e),
    }
}

pub fn print_fact_sheet(sheet: &HardwareFactSheet) {
    let gpus = if sheet.gpus.is_empty() {
        "None".to_string()
    } else {
        sheet
            .gpus
            .iter()
            .map(|g| {
                let kind = if g.integrated { "iGPU" } else { "dGPU" };
                format!("{} {} ({})", g.vendor, g.arch, kind)
            })
            .collect::<Vec<_>>()
            .join(", ")
    };

    let storage = if sheet.storage.is_empty() {
        "None".to_string()
    } else {
        sheet
            .storage
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut rows: Vec<(&str, String)> = vec![
        ("Model", sheet.model_identifier.clone()),
        ("GPUs", gpus),
        (
            "Wireless",
            sheet
                .wireless
                .map(|w| w.to_string())
                .unwrap_or_else(|| "None".to_string()),
        ),
        (
            "Bluetooth",
            sheet
                .bluetooth
                .map(|b| b.to_string())
                .unwrap_or_else(|| "None".to_string()),
        ),
        ("Audio", sheet.audio.to_string()),
        (
            "CPU",
            sheet.cpu.brand.as_deref().unwrap_or("Unknown").to_string(),
        ),
        (
            "AVX2",
            if sheet.cpu.has_avx2() { "yes" } else { "no" }.to_string(),
        ),
        ("Storage", storage),
    ];

    if let Some(boot) = &sheet.boot {
        let on_off = |b: bool| if b { "enabled" } else { "disabled" }.to_string();
        rows.push(("SIP", on_off(boot.sip_enabled)));
        rows.push(("SecureBootModel", on_off(boot.secure_boot_model)));
        rows.push(("FileVault", on_off(boot.filevault_enabled)));
        if !boot.boot_args.is_empty() {
            rows.push(("Boot Args", boot.boot_args.join(" ")));
        }
    }

    if !sheet.probed {
        rows.push(("Probe", "incomplete".to_string()));
    }

    print_box("Hardware", &rows);
}

pub fn print_predicates(predicates: &PredicateSet) {
    let enabled: Vec<_> = predicates.enabled().collect();
    section(&format!("Capabilities ({})", enabled.len()));

    if enabled.is_empty() {
        println!("  {}", "No legacy hardware detected.".green());
        return;
    }

    for predicate in enabled {
        println!("  {} {}", "●".cyan(), predicate.name());
    }
}

pub fn print_detect_json(sheet: &HardwareFactSheet, predicates: &PredicateSet) {
    print_json(&json_envelope(serde_json::json!({
        "hardware": sheet,
        "predicates": predicates,
    })));
}

pub fn print_resolved(resolved: &ResolvedPatchSet) {
    let title = format!("Patches for {}", os_label(resolved.os));
    section(&title);

    if !resolved.has_patches() {
        println!("  {}", "No root patches needed.".green());
    } else {
        for patch in &resolved.patches {
            if patch.is_visible() {
                println!("  {} {}", "+".green().bold(), patch.display_name);
            } else {
                println!("  {} {}", "+".dimmed(), patch.name.dimmed());
            }
            println!(
                "       {}",
                format!(
                    "{}  ·  {} file operation(s)  ·  {}",
                    patch.category,
                    patch.file_operations.len(),
                    patch.window()
                )
                .dimmed()
            );
        }
    }

    for name in &resolved.missing_entries {
        println!("  {} catalog has no entry '{}'", "!".red().bold(), name);
    }

    let notes: Vec<&str> = resolved
        .settings
        .iter()
        .into_iter()
        .filter(|(_, value)| *value)
        .map(|(key, _)| key)
        .collect();
    if !notes.is_empty() {
        println!();
        for key in notes {
            println!("  {}", key.dimmed());
        }
    }

    println!("{}", "─".repeat(64));

    if resolved.patching_possible() {
        println!("  {}", "Patching possible".green().bold());
    } else {
        println!("  {}", "Patching blocked".red().bold());
        for check in &resolved.validation.failures {
            println!("    {} {}", "✗".red(), check);
        }
    }
}

pub fn print_resolve_json(sheet: &HardwareFactSheet, resolved: &ResolvedPatchSet) {
    print_json(&json_envelope(serde_json::json!({
        "model": sheet.model_identifier,
        "os": resolved.os,
        "patches": resolved.patches,
        "display_names": resolved.display_names(),
        "missing_entries": resolved.missing_entries,
        "report": resolved.report(),
    })));
}

pub fn print_catalog(catalog: &Catalog, os: OsVersion) {
    section(&format!("Catalog on {}", os_label(os)));

    for entry in catalog.iter() {
        let mark = if entry.supports(os) {
            "✓".green().bold()
        } else {
            "·".dimmed()
        };
        let name = if entry.is_visible() {
            entry.name.normal()
        } else {
            entry.name.dimmed()
        };
        println!(
            "  {} {:<40} {}",
            mark,
            name,
            format!("{}  {}", entry.category, entry.window()).dimmed()
        );
    }

    let eligible = catalog.eligible(os).count();
    println!("{}", "─".repeat(64));
    println!("  {} of {} entries eligible", eligible, catalog.len());
}

pub fn print_catalog_json(catalog: &Catalog, os: OsVersion) {
    let entries: Vec<_> = catalog
        .iter()
        .map(|e| {
            serde_json::json!({
                "name": e.name,
                "display_name": e.display_name,
                "category": e.category,
                "minimum_os": e.minimum_os,
                "maximum_os": e.maximum_os,
                "eligible": e.supports(os),
                "file_operations": e.file_operations,
            })
        })
        .collect();
    print_json(&json_envelope(serde_json::json!({
        "os": os,
        "entries": entries,
    })));
}

pub fn print_models(models: &[StockModel]) {
    section(&format!("Models ({})", models.len()));
    for model in models {
        let max_os = if model.max_os >= darwin::MAX_OS {
            "any".to_string()
        } else {
            OsVersion::new(model.max_os, 0)
                .release_name()
                .map(str::to_string)
                .unwrap_or_else(|| model.max_os.to_string())
        };
        println!(
            "  {:<18} {}",
            model.identifier,
            format!("{}  stock up to {}", model.cpu, max_os).dimmed()
        );
    }
}

pub fn print_models_json(models: &[StockModel]) {
    let list: Vec<_> = models
        .iter()
        .map(|m| {
            serde_json::json!({
                "identifier": m.identifier,
                "board_id": m.board_id,
                "cpu": m.cpu,
                "max_os": m.max_os,
                "gpus": m.gpus,
            })
        })
        .collect();
    print_json(&json_envelope(serde_json::json!({ "models": list })));
}
