//! Post-accumulation steps. Each runs once, in the order `resolve` calls them,
//! and reports whether it changed anything.

use super::ResolveInput;
use super::accumulate::PatchAccumulator;
use crate::catalog::{EXTENSIONS, PatchCatalogEntry};
use crate::classify::Predicate;
use crate::detect::gpu::GpuArch;
use crate::os::OsVersion;

pub const CATALINA_GVA: &str = "Catalina GVA";
pub const MONTEREY_GVA: &str = "Monterey GVA";
pub const TERASCALE2: &str = "AMD TeraScale 2";
pub const TERASCALE2_ACCEL_KEXT: &str = "AMDRadeonX3000.kext";

/// Kepler with a Haswell iGPU: the Catalina GVA stack breaks Quick Sync on the iGPU.
/// Returns the removed entry.
pub fn strip_kepler_legacy_gva(
    acc: &mut PatchAccumulator,
    input: &ResolveInput,
) -> Option<PatchCatalogEntry> {
    if !input.predicates.get(Predicate::NvidiaKepler) {
        return None;
    }
    if !input.host.gpus.iter().any(|g| g.arch == GpuArch::Haswell) {
        return None;
    }
    let removed = acc.remove(CATALINA_GVA);
    if removed.is_some() {
        tracing::debug!("Haswell iGPU present, dropping {} from Kepler set", CATALINA_GVA);
    }
    removed
}

/// Drop the TeraScale 2 acceleration kext unless the user opted in and the host is known stable.
/// The rest of the TeraScale 2 payload stays.
pub fn strip_terascale2_acceleration(acc: &mut PatchAccumulator, input: &ResolveInput) -> bool {
    let flags = &input.flags;
    let stable_host = flags.legacy_acceleration_os.contains(&input.os.major);
    if flags.allow_terascale2_acceleration && stable_host {
        return false;
    }

    let Some(entry) = acc.get_mut(TERASCALE2) else {
        return false;
    };
    let removed = entry
        .file_operations
        .remove_install(EXTENSIONS, TERASCALE2_ACCEL_KEXT);
    if removed {
        tracing::debug!(
            "stripping {} (acceleration allowed: {}, stable host: {})",
            TERASCALE2_ACCEL_KEXT,
            flags.allow_terascale2_acceleration,
            stable_host
        );
    }
    removed
}

/// Monterey GVA supersedes Catalina GVA when both were required. Returns the removed entry.
pub fn prefer_monterey_gva(acc: &mut PatchAccumulator) -> Option<PatchCatalogEntry> {
    if !acc.contains(MONTEREY_GVA) {
        return None;
    }
    let removed = acc.remove(CATALINA_GVA);
    if removed.is_some() {
        tracing::debug!("{} supersedes {}", MONTEREY_GVA, CATALINA_GVA);
    }
    removed
}

/// Drop every entry whose OS window excludes `host`.
pub fn filter_by_os(acc: &mut PatchAccumulator, host: OsVersion) {
    acc.retain(|entry| {
        let keep = entry.supports(host);
        if !keep {
            tracing::debug!(
                "{} not eligible on {} (window {})",
                entry.name,
                host,
                entry.window()
            );
        }
        keep
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, PatchCategory};
    use crate::detect::gpu::Gpu;
    use crate::os::OsWindow;
    use crate::resolve::{FeatureFlags, HostContext};

    fn ts2_input(allow: bool, os_major: u32) -> ResolveInput {
        ResolveInput {
            predicates: [Predicate::AmdTeraScale2].into_iter().collect(),
            host: HostContext::default(),
            os: OsVersion::new(os_major, 0),
            flags: FeatureFlags {
                allow_terascale2_acceleration: allow,
                ..FeatureFlags::default()
            },
        }
    }

    fn ts2_acc() -> PatchAccumulator {
        let mut acc = PatchAccumulator::new();
        for name in ["AMD TeraScale Common", TERASCALE2] {
            acc.insert(Catalog::builtin().get(name).unwrap().clone());
        }
        acc
    }

    #[test]
    fn test_terascale2_kept_when_allowed_and_stable() {
        let mut acc = ts2_acc();
        assert!(!strip_terascale2_acceleration(&mut acc, &ts2_input(true, 22)));
        let entry = acc.get_mut(TERASCALE2).unwrap();
        assert!(entry.file_operations.installs(EXTENSIONS, TERASCALE2_ACCEL_KEXT));
    }

    #[test]
    fn test_terascale2_stripped_when_disallowed() {
        let mut acc = ts2_acc();
        let before = acc.get_mut(TERASCALE2).unwrap().file_operations.len();

        assert!(strip_terascale2_acceleration(&mut acc, &ts2_input(false, 22)));
        let entry = acc.get_mut(TERASCALE2).unwrap();
        assert!(!entry.file_operations.installs(EXTENSIONS, TERASCALE2_ACCEL_KEXT));
        assert_eq!(entry.file_operations.len(), before - 1);
        assert!(entry.file_operations.installs(EXTENSIONS, "AMD6000Controller.kext"));
    }

    #[test]
    fn test_terascale2_stripped_on_unlisted_os() {
        let mut acc = ts2_acc();
        assert!(strip_terascale2_acceleration(&mut acc, &ts2_input(true, 24)));
    }

    #[test]
    fn test_kepler_gva_needs_haswell() {
        let mut input = ts2_input(true, 22);
        input.predicates = [Predicate::NvidiaKepler].into_iter().collect();
        input.host.gpus = vec![Gpu::from_arch(GpuArch::Kepler, false)];

        let mut acc = PatchAccumulator::new();
        acc.insert(Catalog::builtin().get(CATALINA_GVA).unwrap().clone());
        assert!(strip_kepler_legacy_gva(&mut acc, &input).is_none());
        assert!(acc.contains(CATALINA_GVA));

        input.host.gpus.insert(0, Gpu::from_arch(GpuArch::Haswell, true));
        let removed = strip_kepler_legacy_gva(&mut acc, &input).unwrap();
        assert_eq!(removed.name, CATALINA_GVA);
        assert!(!acc.contains(CATALINA_GVA));
    }

    #[test]
    fn test_prefer_monterey_gva() {
        let mut acc = PatchAccumulator::new();
        acc.insert(Catalog::builtin().get(CATALINA_GVA).unwrap().clone());
        assert!(prefer_monterey_gva(&mut acc).is_none());
        acc.insert(Catalog::builtin().get(MONTEREY_GVA).unwrap().clone());
        assert!(prefer_monterey_gva(&mut acc).is_some());
        assert_eq!(acc.names().collect::<Vec<_>>(), vec![MONTEREY_GVA]);
    }

    #[test]
    fn test_filter_by_os_bounds() {
        let window = OsWindow::new(OsVersion::new(17, 0), OsVersion::new(18, 99));
        let mut acc = PatchAccumulator::new();
        acc.insert(
            PatchCatalogEntry::new("Old", PatchCategory::Graphics, window)
                .install(EXTENSIONS, &[("A.kext", "10.13.6")]),
        );
        acc.insert(
            PatchCatalogEntry::new("New", PatchCategory::Graphics, OsWindow::from_major(19))
                .install(EXTENSIONS, &[("B.kext", "10.15.7")]),
        );

        filter_by_os(&mut acc, OsVersion::new(19, 0));
        assert_eq!(acc.names().collect::<Vec<_>>(), vec!["New"]);
    }
}
