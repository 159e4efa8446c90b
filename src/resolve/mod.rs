pub mod accumulate;
pub mod overrides;
pub mod rules;
pub mod validate;

use crate::catalog::{Catalog, PatchCatalogEntry};
use crate::classify::{self, PredicateSet};
use crate::detect::gpu::Gpu;
use crate::detect::pci::StorageInterface;
use crate::detect::{BootState, HardwareFactSheet};
use crate::os::{OsVersion, darwin};
use accumulate::PatchAccumulator;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use validate::Validation;

/// Persisted user choices that change resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureFlags {
    /// Keep the TeraScale 2 acceleration kext on hosts where it is known stable.
    pub allow_terascale2_acceleration: bool,
    /// Darwin majors on which TeraScale 2 acceleration is considered stable.
    pub legacy_acceleration_os: Vec<u32>,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            allow_terascale2_acceleration: true,
            legacy_acceleration_os: vec![
                darwin::BIG_SUR,
                darwin::MONTEREY,
                darwin::VENTURA,
                darwin::SONOMA,
            ],
        }
    }
}

/// Host facts the resolver consults beyond the predicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HostContext {
    pub model_identifier: String,
    pub gpus: Vec<Gpu>,
    pub cpu_flags: BTreeSet<String>,
    pub storage: BTreeSet<StorageInterface>,
    pub probed: bool,
    pub boot: Option<BootState>,
}

impl HostContext {
    pub fn from_fact_sheet(sheet: &HardwareFactSheet) -> Self {
        Self {
            model_identifier: sheet.model_identifier.clone(),
            gpus: sheet.gpus.clone(),
            cpu_flags: sheet.cpu.flags.clone(),
            storage: sheet.storage.clone(),
            probed: sheet.probed,
            boot: sheet.boot.clone(),
        }
    }

    pub fn has_cpu_flag(&self, flag: &str) -> bool {
        self.cpu_flags
            .contains(&crate::detect::cpu::normalize_flag(flag))
    }
}

/// Everything one resolution depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveInput {
    pub predicates: PredicateSet,
    pub host: HostContext,
    pub os: OsVersion,
    pub flags: FeatureFlags,
}

impl ResolveInput {
    pub fn new(sheet: &HardwareFactSheet, os: OsVersion, flags: FeatureFlags) -> Self {
        Self {
            predicates: classify::classify(sheet),
            host: HostContext::from_fact_sheet(sheet),
            os,
            flags,
        }
    }
}

/// Adjustments the resolver made, reported as `Settings: *`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub terascale2_acceleration_stripped: bool,
    pub kepler_legacy_gva_stripped: bool,
    pub catalina_gva_superseded: bool,
    pub colorsync_workaround_skipped: bool,
}

impl Settings {
    pub fn iter(&self) -> [(&'static str, bool); 4] {
        [
            (
                "Settings: TeraScale 2 Acceleration Stripped",
                self.terascale2_acceleration_stripped,
            ),
            (
                "Settings: Kepler Legacy GVA Stripped",
                self.kepler_legacy_gva_stripped,
            ),
            (
                "Settings: Catalina GVA Superseded",
                self.catalina_gva_superseded,
            ),
            (
                "Settings: ColorSync Workaround Skipped",
                self.colorsync_workaround_skipped,
            ),
        ]
    }
}

/// Final patch set for one host. Entries are in accumulation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPatchSet {
    pub os: OsVersion,
    pub patches: Vec<PatchCatalogEntry>,
    pub validation: Validation,
    pub settings: Settings,
    /// Names the requirement table asked for that the catalog lacks.
    pub missing_entries: Vec<String>,
}

impl ResolvedPatchSet {
    /// Whether any real patch is pending. Sidecar keys don't count.
    pub fn has_patches(&self) -> bool {
        !self.patches.is_empty()
    }

    pub fn patching_possible(&self) -> bool {
        self.validation.patching_possible()
    }

    pub fn get(&self, name: &str) -> Option<&PatchCatalogEntry> {
        self.patches.iter().find(|p| p.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> Vec<&str> {
        self.patches.iter().map(|p| p.name.as_str()).collect()
    }

    /// User-facing names of the selected patches. Support payloads are skipped.
    pub fn display_names(&self) -> Vec<&str> {
        self.patches
            .iter()
            .filter(|p| p.is_visible())
            .map(|p| p.display_name.as_str())
            .collect()
    }

    /// Flat `key -> bool` view: every patch name, every validation check, every setting.
    pub fn report(&self) -> BTreeMap<String, bool> {
        let mut report: BTreeMap<String, bool> =
            self.patches.iter().map(|p| (p.name.clone(), true)).collect();
        for (key, value) in self.validation.iter() {
            report.insert(key.to_string(), value);
        }
        for (key, value) in self.settings.iter() {
            report.insert(key.to_string(), value);
        }
        report
    }
}

/// Resolve the patch set for `input` against `catalog`.
///
/// Order: accumulate by predicate priority, strip conflicting content, drop
/// entries outside the host's OS window, then validate.
pub fn resolve(input: &ResolveInput, catalog: &Catalog) -> ResolvedPatchSet {
    let mut acc = PatchAccumulator::new();
    let mut missing: Vec<String> = Vec::new();
    let mut skipped: Vec<&'static str> = Vec::new();

    for predicate in input.predicates.enabled() {
        for row in rules::requirements_for(predicate) {
            if !row.condition.holds(input) {
                tracing::debug!("{}: not requiring '{}' ({:?})", predicate, row.entry, row.condition);
                skipped.push(row.entry);
                continue;
            }
            match catalog.get(row.entry) {
                Some(entry) => acc.insert(entry.clone()),
                None => {
                    tracing::error!(
                        "catalog has no entry '{}' required by {}",
                        row.entry,
                        predicate
                    );
                    if !missing.iter().any(|m| m == row.entry) {
                        missing.push(row.entry.to_string());
                    }
                }
            }
        }
    }

    let kepler_gva = overrides::strip_kepler_legacy_gva(&mut acc, input);
    let ts2_stripped = overrides::strip_terascale2_acceleration(&mut acc, input);
    let superseded_gva = overrides::prefer_monterey_gva(&mut acc);
    overrides::filter_by_os(&mut acc, input.os);

    // Settings only report changes to entries that survive the OS filter.
    let eligible = |entry: &Option<PatchCatalogEntry>| {
        entry.as_ref().is_some_and(|e| e.supports(input.os))
    };
    let settings = Settings {
        terascale2_acceleration_stripped: ts2_stripped && acc.contains(overrides::TERASCALE2),
        kepler_legacy_gva_stripped: eligible(&kepler_gva),
        catalina_gva_superseded: eligible(&superseded_gva)
            && acc.contains(overrides::MONTEREY_GVA),
        colorsync_workaround_skipped: skipped.contains(&"Revert Non-Metal ColorSync Workaround"),
    };

    let patches = acc.into_entries();
    if patches.is_empty() {
        tracing::info!("No patch sets found for {}", input.host.model_identifier);
    } else {
        tracing::info!("The following patches will be applied:");
        for patch in patches.iter().filter(|p| p.is_visible()) {
            tracing::info!("- {}", patch.display_name);
        }
    }

    let validation = validate::validate(input, &patches);

    ResolvedPatchSet {
        os: input.os,
        patches,
        validation,
        settings,
        missing_entries: missing,
    }
}
