use crate::detect::HardwareFactSheet;
use crate::detect::gpu::GpuArch;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Models that carry a Realtek codec AppleHDA no longer drives, whatever the probe reports.
pub const LEGACY_REALTEK_MODELS: &[&str] = &["iMac7,1", "iMac8,1"];

/// 2017 models whose Polaris GPU lost its driver in Sonoma despite an AVX2 CPU.
pub const GCN_2017_MODELS: &[&str] = &["iMac18,2", "iMac18,3", "MacBookPro14,3"];

/// Closed vocabulary of hardware capability facts.
///
/// Declaration order is the resolver's accumulation priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Predicate {
    IntelIronlake,
    IntelSandyBridge,
    IntelIvyBridge,
    IntelHaswell,
    IntelBroadwell,
    IntelSkylake,
    NvidiaTesla,
    NvidiaWebDrivers,
    NvidiaKepler,
    AmdTeraScale1,
    AmdTeraScale2,
    AmdLegacyGcn,
    AmdLegacyPolaris,
    AmdLegacyGcn2017,
    AmdLegacyVega,
    LegacyBacklightControl,
    LegacyRealtek,
    LegacyWireless,
    ModernWireless,
    LegacyGmux,
    LegacyKeyboardBacklight,
    LegacyUsb11,
    PcieFaceTimeCamera,
    T1SecurityChip,
}

impl Predicate {
    pub const ALL: [Predicate; 24] = [
        Predicate::IntelIronlake,
        Predicate::IntelSandyBridge,
        Predicate::IntelIvyBridge,
        Predicate::IntelHaswell,
        Predicate::IntelBroadwell,
        Predicate::IntelSkylake,
        Predicate::NvidiaTesla,
        Predicate::NvidiaWebDrivers,
        Predicate::NvidiaKepler,
        Predicate::AmdTeraScale1,
        Predicate::AmdTeraScale2,
        Predicate::AmdLegacyGcn,
        Predicate::AmdLegacyPolaris,
        Predicate::AmdLegacyGcn2017,
        Predicate::AmdLegacyVega,
        Predicate::LegacyBacklightControl,
        Predicate::LegacyRealtek,
        Predicate::LegacyWireless,
        Predicate::ModernWireless,
        Predicate::LegacyGmux,
        Predicate::LegacyKeyboardBacklight,
        Predicate::LegacyUsb11,
        Predicate::PcieFaceTimeCamera,
        Predicate::T1SecurityChip,
    ];

    /// Full key, e.g. `Graphics: Intel Sandy Bridge`.
    pub fn name(&self) -> &'static str {
        match self {
            Predicate::IntelIronlake => "Graphics: Intel Ironlake",
            Predicate::IntelSandyBridge => "Graphics: Intel Sandy Bridge",
            Predicate::IntelIvyBridge => "Graphics: Intel Ivy Bridge",
            Predicate::IntelHaswell => "Graphics: Intel Haswell",
            Predicate::IntelBroadwell => "Graphics: Intel Broadwell",
            Predicate::IntelSkylake => "Graphics: Intel Skylake",
            Predicate::NvidiaTesla => "Graphics: Nvidia Tesla",
            Predicate::NvidiaWebDrivers => "Graphics: Nvidia Web Drivers",
            Predicate::NvidiaKepler => "Graphics: Nvidia Kepler",
            Predicate::AmdTeraScale1 => "Graphics: AMD TeraScale 1",
            Predicate::AmdTeraScale2 => "Graphics: AMD TeraScale 2",
            Predicate::AmdLegacyGcn => "Graphics: AMD Legacy GCN",
            Predicate::AmdLegacyPolaris => "Graphics: AMD Legacy Polaris",
            Predicate::AmdLegacyGcn2017 => "Graphics: AMD Legacy GCN (2017)",
            Predicate::AmdLegacyVega => "Graphics: AMD Legacy Vega",
            Predicate::LegacyBacklightControl => "Brightness: Legacy Backlight Control",
            Predicate::LegacyRealtek => "Audio: Legacy Realtek",
            Predicate::LegacyWireless => "Networking: Legacy Wireless",
            Predicate::ModernWireless => "Networking: Modern Wireless",
            Predicate::LegacyGmux => "Miscellaneous: Legacy GMUX",
            Predicate::LegacyKeyboardBacklight => "Miscellaneous: Legacy Keyboard Backlight",
            Predicate::LegacyUsb11 => "Miscellaneous: Legacy USB 1.1",
            Predicate::PcieFaceTimeCamera => "Miscellaneous: PCIe FaceTime Camera",
            Predicate::T1SecurityChip => "Miscellaneous: T1 Security Chip",
        }
    }

    pub fn category(&self) -> &'static str {
        self.name().split_once(':').map(|(c, _)| c).unwrap_or("")
    }

    /// Predicate a GPU architecture turns on. Polaris and Vega only need patches without AVX2.
    /// `AmdLegacyGcn2017` depends on the model as well and is set by [`classify`].
    pub fn for_gpu(arch: GpuArch, cpu_has_avx2: bool) -> Option<Predicate> {
        match arch {
            GpuArch::IronLake => Some(Predicate::IntelIronlake),
            GpuArch::SandyBridge => Some(Predicate::IntelSandyBridge),
            GpuArch::IvyBridge => Some(Predicate::IntelIvyBridge),
            GpuArch::Haswell => Some(Predicate::IntelHaswell),
            GpuArch::Broadwell => Some(Predicate::IntelBroadwell),
            GpuArch::Skylake => Some(Predicate::IntelSkylake),
            GpuArch::Tesla | GpuArch::Fermi => Some(Predicate::NvidiaTesla),
            GpuArch::Maxwell | GpuArch::Pascal => Some(Predicate::NvidiaWebDrivers),
            GpuArch::Kepler => Some(Predicate::NvidiaKepler),
            GpuArch::TeraScale1 => Some(Predicate::AmdTeraScale1),
            GpuArch::TeraScale2 => Some(Predicate::AmdTeraScale2),
            arch if arch.is_legacy_gcn() => Some(Predicate::AmdLegacyGcn),
            GpuArch::Polaris if !cpu_has_avx2 => Some(Predicate::AmdLegacyPolaris),
            GpuArch::Vega if !cpu_has_avx2 => Some(Predicate::AmdLegacyVega),
            _ => None,
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Every predicate with its value. Predicates never go missing, they are false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PredicateSet {
    values: [bool; Predicate::ALL.len()],
}

impl PredicateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, predicate: Predicate) -> bool {
        self.values[predicate as usize]
    }

    pub fn set(&mut self, predicate: Predicate, value: bool) {
        self.values[predicate as usize] = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Predicate, bool)> + '_ {
        Predicate::ALL.iter().map(|&p| (p, self.get(p)))
    }

    /// True predicates in priority order.
    pub fn enabled(&self) -> impl Iterator<Item = Predicate> + '_ {
        self.iter().filter(|(_, v)| *v).map(|(p, _)| p)
    }

    pub fn any(&self) -> bool {
        self.values.iter().any(|v| *v)
    }
}

impl FromIterator<Predicate> for PredicateSet {
    fn from_iter<I: IntoIterator<Item = Predicate>>(iter: I) -> Self {
        let mut set = PredicateSet::new();
        for p in iter {
            set.set(p, true);
        }
        set
    }
}

impl Serialize for PredicateSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Predicate::ALL.len()))?;
        for (predicate, value) in self.iter() {
            map.serialize_entry(predicate.name(), &value)?;
        }
        map.end()
    }
}

/// Classify a fact sheet into the predicate vocabulary. Pure, never fails.
pub fn classify(sheet: &HardwareFactSheet) -> PredicateSet {
    let mut set = PredicateSet::new();
    let avx2 = sheet.cpu.has_avx2();

    for gpu in &sheet.gpus {
        if let Some(p) = Predicate::for_gpu(gpu.arch, avx2) {
            set.set(p, true);
        }
    }

    let polaris = sheet.gpus.iter().any(|g| g.arch == GpuArch::Polaris);
    set.set(
        Predicate::AmdLegacyGcn2017,
        polaris && avx2 && GCN_2017_MODELS.contains(&sheet.model_identifier.as_str()),
    );

    if let Some(chipset) = sheet.wireless {
        set.set(Predicate::LegacyWireless, chipset.is_legacy());
        set.set(Predicate::ModernWireless, chipset.is_modern());
    }

    set.set(
        Predicate::LegacyRealtek,
        sheet.audio.needs_legacy_audio()
            || LEGACY_REALTEK_MODELS.contains(&sheet.model_identifier.as_str()),
    );

    let chassis = &sheet.chassis;
    set.set(
        Predicate::LegacyBacklightControl,
        chassis.legacy_backlight_control,
    );
    set.set(Predicate::LegacyGmux, chassis.legacy_gmux);
    set.set(
        Predicate::LegacyKeyboardBacklight,
        chassis.legacy_keyboard_backlight,
    );
    set.set(Predicate::LegacyUsb11, chassis.legacy_usb11);
    set.set(Predicate::PcieFaceTimeCamera, chassis.pcie_facetime);
    set.set(Predicate::T1SecurityChip, chassis.t1_chip);

    for p in set.enabled() {
        tracing::debug!("{}: true", p);
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::audio::AudioClass;
    use crate::detect::cpu::CpuInfo;
    use crate::detect::gpu::Gpu;
    use crate::detect::wireless::WirelessChipset;
    use crate::models::ChassisFlags;

    fn sheet(model: &str, archs: &[GpuArch], cpu_flags: &str) -> HardwareFactSheet {
        HardwareFactSheet {
            model_identifier: model.to_string(),
            gpus: archs.iter().map(|&a| Gpu::from_arch(a, false)).collect(),
            cpu: CpuInfo::from_feature_string(None, cpu_flags),
            chassis: ChassisFlags::for_model(model),
            probed: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_all_matches_discriminants() {
        for (i, p) in Predicate::ALL.iter().enumerate() {
            assert_eq!(*p as usize, i, "{} out of order", p);
        }
    }

    #[test]
    fn test_every_predicate_present() {
        let set = classify(&HardwareFactSheet::default());
        assert_eq!(set.iter().count(), Predicate::ALL.len());
        assert!(!set.any());
    }

    #[test]
    fn test_gpu_families() {
        let set = classify(&sheet(
            "Foo1,1",
            &[GpuArch::Haswell, GpuArch::Kepler, GpuArch::Fermi, GpuArch::Pascal],
            "",
        ));
        assert!(set.get(Predicate::IntelHaswell));
        assert!(set.get(Predicate::NvidiaKepler));
        assert!(set.get(Predicate::NvidiaTesla));
        assert!(set.get(Predicate::NvidiaWebDrivers));
        assert!(!set.get(Predicate::IntelSkylake));
    }

    #[test]
    fn test_gcn_generations_share_predicate() {
        for arch in [
            GpuArch::LegacyGcn7000,
            GpuArch::LegacyGcn8000,
            GpuArch::LegacyGcn9000,
        ] {
            assert!(classify(&sheet("Foo1,1", &[arch], "")).get(Predicate::AmdLegacyGcn));
        }
    }

    #[test]
    fn test_polaris_vega_need_missing_avx2() {
        let without = classify(&sheet("Foo1,1", &[GpuArch::Polaris, GpuArch::Vega], "AVX1.0"));
        assert!(without.get(Predicate::AmdLegacyPolaris));
        assert!(without.get(Predicate::AmdLegacyVega));

        let with = classify(&sheet("Foo1,1", &[GpuArch::Polaris, GpuArch::Vega], "AVX1.0 AVX2"));
        assert!(!with.get(Predicate::AmdLegacyPolaris));
        assert!(!with.get(Predicate::AmdLegacyVega));
    }

    #[test]
    fn test_gcn_2017_needs_model_and_avx2() {
        for model in GCN_2017_MODELS {
            let set = classify(&sheet(
                model,
                &[GpuArch::KabyLake, GpuArch::Polaris],
                "AVX1.0 AVX2",
            ));
            assert!(set.get(Predicate::AmdLegacyGcn2017), "{}", model);
            assert!(!set.get(Predicate::AmdLegacyPolaris));
        }

        let set = classify(&sheet("iMac18,3", &[GpuArch::Polaris], "AVX1.0"));
        assert!(!set.get(Predicate::AmdLegacyGcn2017));
        assert!(set.get(Predicate::AmdLegacyPolaris));

        let set = classify(&sheet("Foo1,1", &[GpuArch::Polaris], "AVX1.0 AVX2"));
        assert!(!set.any());

        let set = classify(&sheet("iMac18,1", &[GpuArch::KabyLake], "AVX1.0 AVX2"));
        assert!(!set.get(Predicate::AmdLegacyGcn2017));
    }

    #[test]
    fn test_unclassified_gpus_map_to_nothing() {
        let set = classify(&sheet(
            "Foo1,1",
            &[
                GpuArch::Unknown,
                GpuArch::Navi,
                GpuArch::KabyLake,
                GpuArch::Gma950,
                GpuArch::Curie,
                GpuArch::R500,
            ],
            "",
        ));
        assert!(!set.any());
    }

    #[test]
    fn test_wireless_exclusive() {
        let mut s = sheet("Foo1,1", &[], "");
        s.wireless = Some(WirelessChipset::AirPortBrcm4331);
        let set = classify(&s);
        assert!(set.get(Predicate::LegacyWireless));
        assert!(!set.get(Predicate::ModernWireless));

        s.wireless = Some(WirelessChipset::AirPortBrcm4360);
        let set = classify(&s);
        assert!(!set.get(Predicate::LegacyWireless));
        assert!(set.get(Predicate::ModernWireless));

        s.wireless = Some(WirelessChipset::Unknown);
        let set = classify(&s);
        assert!(!set.get(Predicate::LegacyWireless));
        assert!(!set.get(Predicate::ModernWireless));
    }

    #[test]
    fn test_audio() {
        let mut s = sheet("iMac11,1", &[], "");
        s.audio = AudioClass::Native;
        assert!(!classify(&s).get(Predicate::LegacyRealtek));
        s.audio = AudioClass::NonGopHda;
        assert!(classify(&s).get(Predicate::LegacyRealtek));

        let mut s = sheet("iMac8,1", &[], "");
        s.audio = AudioClass::Native;
        assert!(classify(&s).get(Predicate::LegacyRealtek));
    }

    #[test]
    fn test_chassis_predicates() {
        let set = classify(&sheet("MacBookPro13,2", &[GpuArch::Skylake], "AVX2"));
        assert!(set.get(Predicate::T1SecurityChip));
        assert!(set.get(Predicate::PcieFaceTimeCamera));
        assert!(set.get(Predicate::IntelSkylake));

        let set = classify(&sheet("iMac9,1", &[], ""));
        assert!(set.get(Predicate::LegacyBacklightControl));
        assert!(set.get(Predicate::LegacyUsb11));
    }

    #[test]
    fn test_from_iter_and_serialize() {
        let set: PredicateSet = [Predicate::IntelSkylake, Predicate::AmdLegacyPolaris]
            .into_iter()
            .collect();
        let json = serde_json::to_value(set).unwrap();
        assert_eq!(json["Graphics: Intel Skylake"], true);
        assert_eq!(json["Graphics: AMD Legacy Polaris"], true);
        assert_eq!(json["Graphics: Intel Haswell"], false);
        assert_eq!(json.as_object().unwrap().len(), Predicate::ALL.len());
    }

    #[test]
    fn test_category() {
        assert_eq!(Predicate::LegacyGmux.category(), "Miscellaneous");
        assert_eq!(Predicate::NvidiaKepler.category(), "Graphics");
    }
}
