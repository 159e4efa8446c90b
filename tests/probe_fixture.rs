use rootpatch::catalog::Catalog;
use rootpatch::classify::{self, Predicate};
use rootpatch::detect::gpu::GpuArch;
use rootpatch::detect::pci::StorageInterface;
use rootpatch::detect::{HardwareFactSheet, ProbeReport};
use rootpatch::error::Error;
use rootpatch::os::OsVersion;
use rootpatch::resolve::validate::ValidationCheck;
use rootpatch::resolve::{self, FeatureFlags, ResolveInput};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A 2011 iMac with a Sandy Bridge iGPU and a TeraScale 2 dGPU, probed on a
/// host with SIP still on.
fn write_imac12_2_probe(dir: &Path) -> std::path::PathBuf {
    let probe = r#"{
        "model": "iMac12,2",
        "gpus": [
            {"vendor_id": 32902, "device_id": 290, "integrated": true},
            {"vendor_id": 4098, "device_id": 26433}
        ],
        "wireless": {"vendor_id": 5772, "device_id": 48},
        "storage": [
            {"vendor_id": 32902, "device_id": 7170, "class_code": 67073},
            {"vendor_id": 4098, "device_id": 17408, "class_code": 786432}
        ],
        "cpu_brand": "Intel(R) Core(TM) i7-2600S CPU @ 2.80GHz",
        "cpu_flags": ["sse3", "SSSE3", "SSE4.1", "SSE4.2", "AVX1.0"],
        "bluetooth": "BRCM2046 Hub",
        "audio": "native",
        "boot": {
            "sip_enabled": true,
            "secure_boot_model": false,
            "filevault_enabled": false,
            "boot_args": ["-v", "keepsyms=1"]
        }
    }"#;
    let path = dir.join("probe.json");
    fs::write(&path, probe).unwrap();
    path
}

#[test]
fn test_probe_to_resolved_set() {
    let tmp = TempDir::new().unwrap();
    let path = write_imac12_2_probe(tmp.path());

    let report = ProbeReport::load(&path).unwrap();
    assert!(report.has_hardware());
    let sheet = HardwareFactSheet::from_probe(&report);

    assert_eq!(sheet.model_identifier, "iMac12,2");
    assert_eq!(sheet.gpus[0].arch, GpuArch::SandyBridge);
    assert!(sheet.gpus[0].integrated);
    assert_eq!(sheet.gpus[1].arch, GpuArch::TeraScale2);
    assert!(!sheet.gpus[1].integrated);
    assert!(sheet.has_cpu_flag("SSE3"));
    assert!(!sheet.cpu.has_avx2());
    assert_eq!(
        sheet.storage.iter().copied().collect::<Vec<_>>(),
        vec![StorageInterface::Sata]
    );

    let predicates = classify::classify(&sheet);
    assert!(predicates.get(Predicate::IntelSandyBridge));
    assert!(predicates.get(Predicate::AmdTeraScale2));
    assert!(!predicates.get(Predicate::LegacyRealtek));

    let input = ResolveInput::new(&sheet, OsVersion::new(22, 6), FeatureFlags::default());
    let resolved = resolve::resolve(&input, Catalog::builtin());

    assert!(resolved.contains("Intel Sandy Bridge"));
    assert!(resolved.contains("AMD TeraScale 2"));
    assert!(resolved.contains("Non-Metal Common"));
    // iMac12,2 is a ColorSync exception, and the entry is Sonoma-only anyway
    assert!(!resolved.contains("Revert Non-Metal ColorSync Workaround"));
    assert!(resolved.settings.colorsync_workaround_skipped);

    assert!(!resolved.patching_possible());
    assert_eq!(resolved.validation.failures, vec![ValidationCheck::SipEnabled]);

    let report = resolved.report();
    assert_eq!(report["Validation: Patching Possible"], false);
    assert_eq!(report["Validation: SIP is enabled"], true);
    assert_eq!(report["Intel Sandy Bridge"], true);
}

#[test]
fn test_probe_matches_stock_model() {
    let tmp = TempDir::new().unwrap();
    let path = write_imac12_2_probe(tmp.path());
    let probed = HardwareFactSheet::from_probe(&ProbeReport::load(&path).unwrap());
    let stock = HardwareFactSheet::from_model("iMac12,2").unwrap();

    let probed_set = classify::classify(&probed);
    let stock_set = classify::classify(&stock);
    for p in [
        Predicate::IntelSandyBridge,
        Predicate::AmdTeraScale2,
        Predicate::LegacyWireless,
    ] {
        assert_eq!(probed_set.get(p), stock_set.get(p), "{}", p);
    }
    assert_eq!(probed.chassis, stock.chassis);
}

#[test]
fn test_empty_probe_blocks_patching() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("empty.json");
    fs::write(&path, r#"{"model": "iMac12,2"}"#).unwrap();

    let report = ProbeReport::load(&path).unwrap();
    assert!(!report.has_hardware());
    let sheet = HardwareFactSheet::from_probe(&report);
    let input = ResolveInput::new(&sheet, OsVersion::new(22, 0), FeatureFlags::default());
    let resolved = resolve::resolve(&input, Catalog::builtin());

    assert!(!resolved.has_patches());
    assert!(resolved.validation.failed(ValidationCheck::MissingProbeData));
    assert!(resolved.validation.failed(ValidationCheck::NoStorageController));
}

#[test]
fn test_probe_errors() {
    let tmp = TempDir::new().unwrap();

    let missing = tmp.path().join("missing.json");
    assert!(matches!(
        ProbeReport::load(&missing),
        Err(Error::ProbeRead { .. })
    ));

    let bad = tmp.path().join("bad.json");
    fs::write(&bad, "{ not json").unwrap();
    let err = ProbeReport::load(&bad).unwrap_err();
    assert!(matches!(err, Error::ProbeParse { .. }));
    assert!(err.to_string().contains("bad.json"));
}

#[test]
fn test_unknown_model_rejected() {
    assert!(matches!(
        HardwareFactSheet::from_model("Macmini99,1"),
        Err(Error::UnknownModel(_))
    ));
}
