mod table;

use crate::detect::bluetooth::BluetoothChipset;
use crate::detect::gpu::{Gpu, GpuArch, GpuVendor};
use crate::detect::pci::StorageInterface;
use crate::detect::wireless::WirelessChipset;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Oldest CPU generation a board shipped with. Ordered oldest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CpuGeneration {
    Pentium4,
    Yonah,
    Conroe,
    Penryn,
    Nehalem,
    SandyBridge,
    IvyBridge,
    Haswell,
    Broadwell,
    Skylake,
    KabyLake,
    CoffeeLake,
    CometLake,
    IceLake,
}

impl CpuGeneration {
    /// Instruction-set tokens every CPU of this generation reports.
    pub fn baseline_flags(&self) -> &'static [&'static str] {
        match self {
            CpuGeneration::Pentium4 | CpuGeneration::Yonah => &["SSE3"],
            CpuGeneration::Conroe => &["SSE3", "SSSE3"],
            CpuGeneration::Penryn => &["SSE3", "SSSE3", "SSE4.1"],
            CpuGeneration::Nehalem => &["SSE3", "SSSE3", "SSE4.1", "SSE4.2"],
            CpuGeneration::SandyBridge | CpuGeneration::IvyBridge => {
                &["SSE3", "SSSE3", "SSE4.1", "SSE4.2", "AVX1.0"]
            }
            _ => &["SSE3", "SSSE3", "SSE4.1", "SSE4.2", "AVX1.0", "AVX2"],
        }
    }
}

impl fmt::Display for CpuGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CpuGeneration::Pentium4 => "Pentium 4",
            CpuGeneration::Yonah => "Yonah",
            CpuGeneration::Conroe => "Conroe",
            CpuGeneration::Penryn => "Penryn",
            CpuGeneration::Nehalem => "Nehalem",
            CpuGeneration::SandyBridge => "Sandy Bridge",
            CpuGeneration::IvyBridge => "Ivy Bridge",
            CpuGeneration::Haswell => "Haswell",
            CpuGeneration::Broadwell => "Broadwell",
            CpuGeneration::Skylake => "Skylake",
            CpuGeneration::KabyLake => "Kaby Lake",
            CpuGeneration::CoffeeLake => "Coffee Lake",
            CpuGeneration::CometLake => "Comet Lake",
            CpuGeneration::IceLake => "Ice Lake",
        };
        write!(f, "{}", name)
    }
}

/// Board traits recorded directly in the model table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockFlag {
    /// Firmware only exposes UGA, needs UGA to GOP conversion.
    UgaGraphics,
    LegacyISight,
    NForce,
    /// Board has a GMUX and two GPUs.
    SwitchableGpus,
}

/// Stock hardware of one model identifier.
#[derive(Debug, Clone)]
pub struct StockModel {
    pub identifier: &'static str,
    pub board_id: &'static str,
    pub cpu: CpuGeneration,
    /// Last Darwin major Apple supported on this model.
    pub max_os: u32,
    pub wireless: Option<WirelessChipset>,
    pub bluetooth: Option<BluetoothChipset>,
    pub gpus: &'static [GpuArch],
    pub storage: &'static [&'static str],
    pub flags: &'static [StockFlag],
}

impl StockModel {
    pub fn has_flag(&self, flag: StockFlag) -> bool {
        self.flags.contains(&flag)
    }

    /// Stock GPUs as fact-sheet entries. Intel parts are the integrated ones.
    pub fn stock_gpus(&self) -> Vec<Gpu> {
        self.gpus
            .iter()
            .map(|&arch| Gpu::from_arch(arch, arch.vendor() == Some(GpuVendor::Intel)))
            .collect()
    }

    pub fn storage_interfaces(&self) -> BTreeSet<StorageInterface> {
        self.storage
            .iter()
            .filter_map(|label| StorageInterface::from_stock_label(label))
            .collect()
    }

    pub fn chassis(&self) -> ChassisFlags {
        let id = self.identifier;
        let switchable = self.has_flag(StockFlag::SwitchableGpus);
        let portable = id.starts_with("MacBookPro") || id.starts_with("MacBookAir");

        ChassisFlags {
            switchable_gpus: switchable,
            legacy_gmux: switchable && self.cpu <= CpuGeneration::IvyBridge,
            legacy_keyboard_backlight: (portable || id == "MacBook5,1")
                && self.cpu <= CpuGeneration::SandyBridge,
            legacy_backlight_control: LEGACY_BACKLIGHT_MODELS.contains(&id),
            legacy_usb11: self.cpu <= CpuGeneration::Penryn,
            uga_graphics: self.has_flag(StockFlag::UgaGraphics),
            legacy_isight: self.has_flag(StockFlag::LegacyISight),
            nforce: self.has_flag(StockFlag::NForce),
            display_5k: DISPLAY_5K_MODELS.contains(&id),
            t1_chip: T1_MODELS.contains(&id),
            pcie_facetime: PCIE_FACETIME_MODELS.contains(&id),
        }
    }
}

/// Chassis features that drive the brightness and miscellaneous predicates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChassisFlags {
    pub switchable_gpus: bool,
    pub legacy_gmux: bool,
    pub legacy_keyboard_backlight: bool,
    pub legacy_backlight_control: bool,
    pub legacy_usb11: bool,
    pub uga_graphics: bool,
    pub legacy_isight: bool,
    pub nforce: bool,
    pub display_5k: bool,
    pub t1_chip: bool,
    pub pcie_facetime: bool,
}

impl ChassisFlags {
    /// Chassis flags for a model identifier. Unknown models get all-false.
    pub fn for_model(identifier: &str) -> Self {
        lookup(identifier).map(StockModel::chassis).unwrap_or_default()
    }
}

/// iMacs whose panel brightness is driven through the old AppleBacklight path.
const LEGACY_BACKLIGHT_MODELS: &[&str] = &["iMac7,1", "iMac8,1", "iMac9,1"];

const DISPLAY_5K_MODELS: &[&str] = &[
    "iMac15,1",
    "iMac17,1",
    "iMac18,3",
    "iMac19,1",
    "iMac19,2",
    "iMacPro1,1",
];

const T1_MODELS: &[&str] = &[
    "MacBookPro13,2",
    "MacBookPro13,3",
    "MacBookPro14,2",
    "MacBookPro14,3",
];

const PCIE_FACETIME_MODELS: &[&str] = &[
    "MacBookPro13,1",
    "MacBookPro13,2",
    "MacBookPro13,3",
    "MacBookPro14,1",
    "MacBookPro14,2",
    "MacBookPro14,3",
];

pub fn all() -> &'static [StockModel] {
    table::STOCK_MODELS
}

pub fn lookup(identifier: &str) -> Option<&'static StockModel> {
    table::STOCK_MODELS
        .iter()
        .find(|m| m.identifier == identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers_unique() {
        let mut seen = std::collections::HashSet::new();
        for model in all() {
            assert!(seen.insert(model.identifier), "duplicate {}", model.identifier);
        }
    }

    #[test]
    fn test_lookup() {
        let model = lookup("iMac12,2").unwrap();
        assert_eq!(model.cpu, CpuGeneration::SandyBridge);
        assert_eq!(model.gpus, &[GpuArch::SandyBridge, GpuArch::TeraScale2]);
        assert!(lookup("iMac99,9").is_none());
    }

    #[test]
    fn test_stock_gpus_integrated() {
        let gpus = lookup("iMac14,2").unwrap().stock_gpus();
        assert_eq!(gpus.len(), 2);
        assert!(gpus[0].integrated);
        assert_eq!(gpus[0].arch, GpuArch::Haswell);
        assert!(!gpus[1].integrated);
        assert_eq!(gpus[1].arch, GpuArch::Kepler);
    }

    #[test]
    fn test_legacy_gmux() {
        assert!(ChassisFlags::for_model("MacBookPro8,2").legacy_gmux);
        assert!(ChassisFlags::for_model("MacBookPro10,1").legacy_gmux);
        // Haswell-era GMUX is still supported.
        let mbp11 = ChassisFlags::for_model("MacBookPro11,3");
        assert!(mbp11.switchable_gpus);
        assert!(!mbp11.legacy_gmux);
        assert!(!ChassisFlags::for_model("iMac12,2").legacy_gmux);
    }

    #[test]
    fn test_chassis_lists() {
        assert!(ChassisFlags::for_model("MacBookPro13,2").t1_chip);
        assert!(ChassisFlags::for_model("MacBookPro13,1").pcie_facetime);
        assert!(!ChassisFlags::for_model("MacBookPro13,1").t1_chip);
        assert!(ChassisFlags::for_model("iMac8,1").legacy_backlight_control);
        assert!(ChassisFlags::for_model("iMac17,1").display_5k);
        assert!(ChassisFlags::for_model("MacBookAir3,1").legacy_usb11);
        assert!(!ChassisFlags::for_model("MacBookAir4,1").legacy_usb11);
        assert!(ChassisFlags::for_model("MacBookAir4,1").legacy_keyboard_backlight);
    }

    #[test]
    fn test_unknown_model_all_false() {
        assert_eq!(ChassisFlags::for_model("Foo1,1"), ChassisFlags::default());
    }

    #[test]
    fn test_stock_storage() {
        let storage = lookup("iMac14,2").unwrap().storage_interfaces();
        assert!(storage.contains(&StorageInterface::Sata));
        assert!(storage.contains(&StorageInterface::Nvme));
        let storage = lookup("MacBookAir4,1").unwrap().storage_interfaces();
        assert_eq!(storage.len(), 1);
        assert!(storage.contains(&StorageInterface::Sata));
    }
}
