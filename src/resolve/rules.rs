//! Which catalog entries each predicate requires.
//!
//! Rows are evaluated top to bottom. Conditions only look at the input, never
//! at what has already been accumulated; removals of accumulated entries live
//! in `overrides`.

use super::ResolveInput;
use crate::classify::{LEGACY_REALTEK_MODELS, Predicate};
use Predicate::*;

/// Sandy Bridge models that shipped without the non-Metal ColorSync workaround.
pub const COLORSYNC_EXCEPTION_MODELS: &[&str] = &["Macmini5,2", "iMac12,1", "iMac12,2"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Always,
    With(Predicate),
    Without(Predicate),
    ModelIn(&'static [&'static str]),
    ModelNotIn(&'static [&'static str]),
    CpuLacks(&'static str),
}

impl Condition {
    pub fn holds(&self, input: &ResolveInput) -> bool {
        match *self {
            Condition::Always => true,
            Condition::With(p) => input.predicates.get(p),
            Condition::Without(p) => !input.predicates.get(p),
            Condition::ModelIn(models) => models.contains(&input.host.model_identifier.as_str()),
            Condition::ModelNotIn(models) => {
                !models.contains(&input.host.model_identifier.as_str())
            }
            Condition::CpuLacks(flag) => !input.host.has_cpu_flag(flag),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Requirement {
    pub predicate: Predicate,
    pub entry: &'static str,
    pub condition: Condition,
}

const fn always(predicate: Predicate, entry: &'static str) -> Requirement {
    Requirement {
        predicate,
        entry,
        condition: Condition::Always,
    }
}

const fn when(predicate: Predicate, entry: &'static str, condition: Condition) -> Requirement {
    Requirement {
        predicate,
        entry,
        condition,
    }
}

pub const REQUIREMENTS: &[Requirement] = &[
    always(IntelIronlake, "Non-Metal Common"),
    always(IntelIronlake, "WebKit Monterey Common"),
    always(IntelIronlake, "Intel Ironlake"),
    always(IntelSandyBridge, "Non-Metal Common"),
    always(IntelSandyBridge, "High Sierra GVA"),
    always(IntelSandyBridge, "WebKit Monterey Common"),
    always(IntelSandyBridge, "Intel Sandy Bridge"),
    when(
        IntelSandyBridge,
        "Revert Non-Metal ColorSync Workaround",
        Condition::ModelNotIn(COLORSYNC_EXCEPTION_MODELS),
    ),
    always(IntelIvyBridge, "Metal 3802 Common"),
    always(IntelIvyBridge, "Metal 3802 Common Extended"),
    always(IntelIvyBridge, "Catalina GVA"),
    always(IntelIvyBridge, "Monterey OpenCL"),
    always(IntelIvyBridge, "Big Sur OpenCL"),
    always(IntelIvyBridge, "WebKit Monterey Common"),
    always(IntelIvyBridge, "Intel Ivy Bridge"),
    always(IntelHaswell, "Metal 3802 Common"),
    always(IntelHaswell, "Metal 3802 Common Extended"),
    always(IntelHaswell, "Monterey GVA"),
    always(IntelHaswell, "Monterey OpenCL"),
    always(IntelHaswell, "Intel Haswell"),
    always(IntelBroadwell, "Monterey GVA"),
    always(IntelBroadwell, "Monterey OpenCL"),
    always(IntelBroadwell, "Intel Broadwell"),
    always(IntelSkylake, "Revert GVA Downgrade"),
    always(IntelSkylake, "Monterey OpenCL"),
    always(IntelSkylake, "Intel Skylake"),
    always(NvidiaTesla, "Non-Metal Common"),
    always(NvidiaTesla, "WebKit Monterey Common"),
    always(NvidiaTesla, "Nvidia Tesla"),
    always(NvidiaWebDrivers, "Non-Metal Common"),
    always(NvidiaWebDrivers, "Non-Metal IOAccelerator Common"),
    always(NvidiaWebDrivers, "Non-Metal CoreDisplay Common"),
    always(NvidiaWebDrivers, "WebKit Monterey Common"),
    always(NvidiaWebDrivers, "Nvidia Web Drivers"),
    always(NvidiaWebDrivers, "Non-Metal Enforcement"),
    always(NvidiaKepler, "Metal 3802 Common"),
    always(NvidiaKepler, "Metal 3802 Common Extended"),
    always(NvidiaKepler, "Catalina GVA"),
    always(NvidiaKepler, "Monterey OpenCL"),
    always(NvidiaKepler, "Big Sur OpenCL"),
    always(NvidiaKepler, "WebKit Monterey Common"),
    always(NvidiaKepler, "Nvidia Kepler"),
    always(AmdTeraScale1, "Non-Metal Common"),
    always(AmdTeraScale1, "WebKit Monterey Common"),
    always(AmdTeraScale1, "AMD TeraScale Common"),
    always(AmdTeraScale1, "AMD TeraScale 1"),
    always(AmdTeraScale2, "Non-Metal Common"),
    always(AmdTeraScale2, "Non-Metal IOAccelerator Common"),
    always(AmdTeraScale2, "WebKit Monterey Common"),
    always(AmdTeraScale2, "AMD TeraScale Common"),
    always(AmdTeraScale2, "AMD TeraScale 2"),
    when(AmdLegacyGcn, "Monterey GVA", Condition::Without(IntelSkylake)),
    always(AmdLegacyGcn, "Monterey OpenCL"),
    always(AmdLegacyGcn, "AMD Legacy GCN"),
    when(AmdLegacyGcn, "AMD OpenCL", Condition::CpuLacks("AVX2")),
    when(AmdLegacyPolaris, "Monterey GVA", Condition::Without(IntelSkylake)),
    always(AmdLegacyPolaris, "Monterey OpenCL"),
    when(
        AmdLegacyPolaris,
        "AMD Legacy Polaris",
        Condition::Without(AmdLegacyGcn),
    ),
    when(
        AmdLegacyPolaris,
        "Revert GVA Downgrade",
        Condition::Without(AmdLegacyGcn),
    ),
    when(AmdLegacyPolaris, "AMD OpenCL", Condition::CpuLacks("AVX2")),
    always(AmdLegacyGcn2017, "AMD Legacy GCN v2"),
    always(AmdLegacyVega, "Monterey GVA"),
    always(AmdLegacyVega, "Monterey OpenCL"),
    always(AmdLegacyVega, "AMD Legacy Vega"),
    always(AmdLegacyVega, "AMD OpenCL"),
    when(
        AmdLegacyVega,
        "AMD Legacy Vega Extended",
        Condition::With(AmdLegacyGcn),
    ),
    when(
        AmdLegacyVega,
        "Revert GVA Downgrade",
        Condition::Without(AmdLegacyGcn),
    ),
    always(LegacyBacklightControl, "Legacy Backlight Control"),
    when(
        LegacyRealtek,
        "Legacy Realtek",
        Condition::ModelIn(LEGACY_REALTEK_MODELS),
    ),
    when(
        LegacyRealtek,
        "Legacy Non-GOP",
        Condition::ModelNotIn(LEGACY_REALTEK_MODELS),
    ),
    always(LegacyWireless, "Legacy Wireless"),
    always(LegacyWireless, "Legacy Wireless Extended"),
    always(ModernWireless, "Modern Wireless"),
    always(LegacyGmux, "Legacy GMUX"),
    always(LegacyKeyboardBacklight, "Legacy Keyboard Backlight"),
    always(LegacyUsb11, "Legacy USB 1.1"),
    always(LegacyUsb11, "Legacy USB 1.1 Extended"),
    always(PcieFaceTimeCamera, "PCIe FaceTime Camera"),
    always(T1SecurityChip, "T1 Security Chip"),
];

/// Rows for `predicate`, in table order.
pub fn requirements_for(predicate: Predicate) -> impl Iterator<Item = &'static Requirement> {
    REQUIREMENTS.iter().filter(move |r| r.predicate == predicate)
}
