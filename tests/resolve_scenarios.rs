use rootpatch::catalog::{Catalog, PatchCatalogEntry};
use rootpatch::classify::{self, Predicate};
use rootpatch::detect::HardwareFactSheet;
use rootpatch::detect::gpu::{Gpu, GpuArch, VENDOR_INTEL, VENDOR_NVIDIA};
use rootpatch::detect::pci::StorageInterface;
use rootpatch::detect::wireless::WirelessChipset;
use rootpatch::os::{OsVersion, OsWindow};
use rootpatch::resolve::{self, FeatureFlags, HostContext, ResolveInput, ResolvedPatchSet};

const VENTURA: OsVersion = OsVersion::new(22, 4);

fn resolve_model(model: &str, os: OsVersion) -> ResolvedPatchSet {
    let sheet = HardwareFactSheet::from_model(model).unwrap();
    let input = ResolveInput::new(&sheet, os, FeatureFlags::default());
    resolve::resolve(&input, Catalog::builtin())
}

fn predicate_input(predicates: &[Predicate], os: OsVersion) -> ResolveInput {
    ResolveInput {
        predicates: predicates.iter().copied().collect(),
        host: HostContext {
            model_identifier: "MacPro5,1".to_string(),
            storage: [StorageInterface::Sata].into_iter().collect(),
            probed: true,
            ..Default::default()
        },
        os,
        flags: FeatureFlags::default(),
    }
}

/// Builtin catalog with every window opened down to `major.0`.
fn catalog_from(major: u32) -> Catalog {
    let entries = Catalog::builtin()
        .iter()
        .cloned()
        .map(|mut e: PatchCatalogEntry| {
            e.minimum_os = OsVersion::new(major, 0);
            e
        })
        .collect();
    Catalog::from_entries(entries)
}

#[test]
fn test_resolution_is_deterministic() {
    for model in ["iMac12,2", "MacBookPro11,3", "MacPro5,1", "iMac7,1"] {
        for os in [OsVersion::new(21, 0), VENTURA, OsVersion::new(23, 1)] {
            let first = resolve_model(model, os);
            let second = resolve_model(model, os);
            assert_eq!(first, second, "{} on {}", model, os);
            assert_eq!(first.report(), second.report());
        }
    }
}

#[test]
fn test_every_resolved_entry_fits_host_window() {
    for model in rootpatch::models::all() {
        for os in [
            OsVersion::new(20, 6),
            OsVersion::new(21, 6),
            VENTURA,
            OsVersion::new(23, 0),
            OsVersion::new(24, 2),
        ] {
            let resolved = resolve_model(model.identifier, os);
            for patch in &resolved.patches {
                assert!(
                    patch.minimum_os <= os && os <= patch.maximum_os,
                    "{} on {} outside {}",
                    patch.name,
                    os,
                    patch.window()
                );
            }
        }
    }
}

#[test]
fn test_wireless_predicates_mutually_exclusive() {
    let chipsets = [
        WirelessChipset::AppleBcmWlanBusInterfacePcie,
        WirelessChipset::AirportBrcmNic,
        WirelessChipset::AirPortBrcm4360,
        WirelessChipset::AirPortBrcm4331,
        WirelessChipset::AirPortBrcm43224,
        WirelessChipset::AirPortAtheros40,
        WirelessChipset::Unknown,
    ];
    for chipset in chipsets {
        let sheet = HardwareFactSheet {
            wireless: Some(chipset),
            ..Default::default()
        };
        let set = classify::classify(&sheet);
        assert!(
            !(set.get(Predicate::LegacyWireless) && set.get(Predicate::ModernWireless)),
            "{} classified as both",
            chipset
        );
    }
}

#[test]
fn test_shared_entry_merged_once() {
    let input = predicate_input(
        &[
            Predicate::IntelSandyBridge,
            Predicate::NvidiaTesla,
            Predicate::AmdTeraScale1,
        ],
        VENTURA,
    );
    let resolved = resolve::resolve(&input, Catalog::builtin());

    let copies = resolved
        .patches
        .iter()
        .filter(|p| p.name == "Non-Metal Common")
        .count();
    assert_eq!(copies, 1);

    let catalog_ops = Catalog::builtin()
        .get("Non-Metal Common")
        .unwrap()
        .file_operations
        .len();
    assert_eq!(
        resolved.get("Non-Metal Common").unwrap().file_operations.len(),
        catalog_ops
    );
}

#[test]
fn test_monterey_gva_takes_precedence() {
    let input = predicate_input(&[Predicate::IntelIvyBridge, Predicate::IntelHaswell], VENTURA);
    let resolved = resolve::resolve(&input, Catalog::builtin());
    assert!(resolved.contains("Monterey GVA"));
    assert!(!resolved.contains("Catalina GVA"));
    assert!(resolved.settings.catalina_gva_superseded);
}

#[test]
fn test_kepler_with_haswell_on_catalina() {
    let sheet = HardwareFactSheet {
        model_identifier: "iMac14,2".to_string(),
        gpus: vec![
            Gpu::from_arch(GpuArch::Haswell, true),
            Gpu::from_arch(GpuArch::Kepler, false),
        ],
        storage: [StorageInterface::Sata].into_iter().collect(),
        probed: true,
        ..Default::default()
    };
    let catalog = catalog_from(19);
    let input = ResolveInput::new(&sheet, OsVersion::new(19, 6), FeatureFlags::default());
    let resolved = resolve::resolve(&input, &catalog);

    assert!(resolved.contains("Nvidia Kepler"));
    assert!(resolved.contains("Metal 3802 Common"));
    assert!(resolved.contains("Big Sur OpenCL"));
    assert!(!resolved.contains("Catalina GVA"));
    assert!(resolved.settings.kepler_legacy_gva_stripped);
}

#[test]
fn test_kepler_with_haswell_on_ventura() {
    let resolved = resolve_model("iMac14,2", VENTURA);
    assert!(resolved.contains("Nvidia Kepler"));
    assert!(resolved.contains("Intel Haswell"));
    assert!(resolved.contains("Monterey GVA"));
    assert!(!resolved.contains("Catalina GVA"));
    assert!(resolved.settings.kepler_legacy_gva_stripped);
    // Sonoma-only entries are filtered on Ventura
    assert!(!resolved.contains("Metal 3802 Common Extended"));
    assert!(!resolved.contains("Modern Wireless"));
}

#[test]
fn test_kepler_alone_keeps_catalina_gva() {
    let input = predicate_input(&[Predicate::NvidiaKepler], VENTURA);
    let resolved = resolve::resolve(&input, Catalog::builtin());
    assert!(resolved.contains("Catalina GVA"));
    assert!(!resolved.settings.kepler_legacy_gva_stripped);
}

#[test]
fn test_unknown_gpu_contributes_nothing() {
    let sheet = HardwareFactSheet {
        model_identifier: "MacPro5,1".to_string(),
        gpus: vec![Gpu::from_pci(VENDOR_NVIDIA, 0x0001, false)],
        wireless: Some(WirelessChipset::AirPortBrcm4331),
        storage: [StorageInterface::Sata].into_iter().collect(),
        probed: true,
        ..Default::default()
    };
    assert_eq!(sheet.gpus[0].arch, GpuArch::Unknown);

    let predicates = classify::classify(&sheet);
    assert!(
        predicates
            .enabled()
            .all(|p| p.category() != "Graphics"),
        "unknown GPU enabled a graphics predicate"
    );

    let input = ResolveInput::new(&sheet, VENTURA, FeatureFlags::default());
    let resolved = resolve::resolve(&input, Catalog::builtin());
    assert!(resolved.contains("Legacy Wireless"));
    assert!(resolved.patching_possible());
    assert_eq!(resolved.report()["Validation: Patching Possible"], true);
}

#[test]
fn test_entry_outside_window_never_resolved() {
    let entries = Catalog::builtin()
        .iter()
        .cloned()
        .map(|mut e| {
            if e.name == "Intel Sandy Bridge" {
                let window = OsWindow::majors(17, 18);
                e.minimum_os = window.minimum;
                e.maximum_os = window.maximum;
            } else {
                e.minimum_os = OsVersion::new(17, 0);
            }
            e
        })
        .collect();
    let catalog = Catalog::from_entries(entries);

    let input = predicate_input(&[Predicate::IntelSandyBridge], OsVersion::new(19, 0));
    assert!(input.predicates.get(Predicate::IntelSandyBridge));
    let resolved = resolve::resolve(&input, &catalog);
    assert!(!resolved.contains("Intel Sandy Bridge"));
    assert!(resolved.contains("Non-Metal Common"));

    let input = predicate_input(&[Predicate::IntelSandyBridge], OsVersion::new(18, 99));
    assert!(resolve::resolve(&input, &catalog).contains("Intel Sandy Bridge"));
}

#[test]
fn test_polaris_with_skylake() {
    let input = predicate_input(
        &[Predicate::AmdLegacyPolaris, Predicate::IntelSkylake],
        VENTURA,
    );
    let resolved = resolve::resolve(&input, Catalog::builtin());
    assert!(!resolved.contains("Monterey GVA"));
    assert!(resolved.contains("Revert GVA Downgrade"));
    assert!(resolved.contains("AMD Legacy Polaris"));
    assert!(resolved.contains("Intel Skylake"));
}

#[test]
fn test_polaris_without_skylake_gets_monterey_gva() {
    let input = predicate_input(&[Predicate::AmdLegacyPolaris], VENTURA);
    let resolved = resolve::resolve(&input, Catalog::builtin());
    assert!(resolved.contains("Monterey GVA"));
    assert!(resolved.contains("AMD OpenCL"));
}

#[test]
fn test_terascale2_acceleration_follows_flags() {
    let sheet = HardwareFactSheet::from_model("MacPro5,1").unwrap();
    let kext = "AMDRadeonX3000.kext";
    let extensions = rootpatch::catalog::EXTENSIONS;

    let input = ResolveInput::new(&sheet, VENTURA, FeatureFlags::default());
    let resolved = resolve::resolve(&input, Catalog::builtin());
    let entry = resolved.get("AMD TeraScale 2").unwrap();
    assert!(entry.file_operations.installs(extensions, kext));
    assert!(!resolved.settings.terascale2_acceleration_stripped);

    let flags = FeatureFlags {
        allow_terascale2_acceleration: false,
        ..FeatureFlags::default()
    };
    let input = ResolveInput::new(&sheet, VENTURA, flags);
    let resolved = resolve::resolve(&input, Catalog::builtin());
    let entry = resolved.get("AMD TeraScale 2").unwrap();
    assert!(!entry.file_operations.installs(extensions, kext));
    assert!(entry.file_operations.installs(extensions, "AMD6000Controller.kext"));
    assert!(resolved.settings.terascale2_acceleration_stripped);
    assert_eq!(
        resolved.report()["Settings: TeraScale 2 Acceleration Stripped"],
        true
    );

    // The catalog itself is never mutated
    let pristine = Catalog::builtin().get("AMD TeraScale 2").unwrap();
    assert!(pristine.file_operations.installs(extensions, kext));
}

#[test]
fn test_probed_intel_igpu_defaults_integrated() {
    let gpu = Gpu::from_pci(VENDOR_INTEL, 0x0412, true);
    assert_eq!(gpu.arch, GpuArch::Haswell);
    assert_eq!(
        Predicate::for_gpu(gpu.arch, true),
        Some(Predicate::IntelHaswell)
    );
}

#[test]
fn test_settings_ignore_strips_filtered_by_os() {
    // Catalina GVA opens at Ventura, so there is nothing to strip on Monterey.
    let resolved = resolve_model("iMac14,2", OsVersion::new(21, 6));
    assert!(resolved.contains("Nvidia Kepler"));
    assert!(!resolved.contains("Catalina GVA"));
    assert!(!resolved.settings.kepler_legacy_gva_stripped);
    assert_eq!(
        resolved.report()["Settings: Kepler Legacy GVA Stripped"],
        false
    );

    // TeraScale 2 needs Big Sur; on Catalina the kext strip touched nothing.
    let resolved = resolve_model("iMac12,2", OsVersion::new(19, 6));
    assert!(!resolved.contains("AMD TeraScale 2"));
    assert!(!resolved.settings.terascale2_acceleration_stripped);

    // Same hardware on Sequoia: not in the stable list, so the kext is stripped.
    let resolved = resolve_model("iMac12,2", OsVersion::new(24, 0));
    assert!(resolved.contains("AMD TeraScale 2"));
    assert!(resolved.settings.terascale2_acceleration_stripped);
}

#[test]
fn test_gcn_2017_imac_on_sonoma() {
    let sheet = HardwareFactSheet::from_model("iMac18,3").unwrap();
    let predicates = classify::classify(&sheet);
    assert!(predicates.get(Predicate::AmdLegacyGcn2017));
    assert!(!predicates.get(Predicate::AmdLegacyPolaris));

    let resolved = resolve_model("iMac18,3", OsVersion::new(23, 2));
    assert!(resolved.contains("AMD Legacy GCN v2"));
    assert!(
        resolved
            .display_names()
            .contains(&"Graphics: AMD Legacy GCN (2017)")
    );
    assert!(!resolved.contains("AMD Legacy Polaris"));
    assert!(!resolved.contains("Monterey GVA"));

    // Natively supported through Ventura
    let resolved = resolve_model("iMac18,3", VENTURA);
    assert!(!resolved.contains("AMD Legacy GCN v2"));
}

#[test]
fn test_vega_with_gcn_gets_extended_payload() {
    let input = predicate_input(
        &[Predicate::AmdLegacyGcn, Predicate::AmdLegacyVega],
        VENTURA,
    );
    let resolved = resolve::resolve(&input, Catalog::builtin());
    assert!(resolved.contains("AMD Legacy GCN"));
    assert!(resolved.contains("AMD Legacy Vega"));
    assert!(resolved.contains("AMD Legacy Vega Extended"));
    assert!(!resolved.contains("Revert GVA Downgrade"));
}

#[test]
fn test_vega_alone_reverts_gva_downgrade() {
    let input = predicate_input(&[Predicate::AmdLegacyVega], VENTURA);
    let resolved = resolve::resolve(&input, Catalog::builtin());
    assert!(resolved.contains("AMD Legacy Vega"));
    assert!(resolved.contains("Revert GVA Downgrade"));
    assert!(!resolved.contains("AMD Legacy Vega Extended"));
    assert!(resolved.contains("Monterey GVA"));
}
