pub mod audio;
pub mod bluetooth;
pub mod cpu;
pub mod gpu;
pub mod pci;
pub mod wireless;

use crate::error::{Error, Result};
use crate::models::{self, ChassisFlags};
use audio::AudioClass;
use bluetooth::BluetoothChipset;
use cpu::CpuInfo;
use gpu::{Gpu, GpuVendor};
use pci::{PciRecord, StorageInterface};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use wireless::WirelessChipset;

/// Boot-time security state. Only consulted by validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootState {
    pub sip_enabled: bool,
    pub secure_boot_model: bool,
    pub filevault_enabled: bool,
    pub boot_args: Vec<String>,
}

impl BootState {
    pub fn boot_arg_value(&self, arg: &str) -> Option<String> {
        let prefix = format!("{}=", arg);
        self.boot_args
            .iter()
            .flat_map(|a| a.split_whitespace())
            .find(|a| a.starts_with(&prefix))
            .map(|a| a[prefix.len()..].to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeGpu {
    pub vendor_id: u16,
    pub device_id: u16,
    /// Defaults to "Intel means integrated" when the probe did not say.
    #[serde(default)]
    pub integrated: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeDevice {
    pub vendor_id: u16,
    pub device_id: u16,
}

/// Raw probe output as written by the external hardware probe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeReport {
    pub model: String,
    pub gpus: Vec<ProbeGpu>,
    pub wireless: Option<ProbeDevice>,
    pub storage: Vec<PciRecord>,
    pub cpu_brand: Option<String>,
    pub cpu_flags: Vec<String>,
    pub bluetooth: Option<String>,
    pub audio: AudioClass,
    pub boot: Option<BootState>,
}

impl ProbeReport {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::ProbeRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content, path)
    }

    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::ProbeParse {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })
    }

    /// True if the probe recorded any hardware at all.
    pub fn has_hardware(&self) -> bool {
        !self.gpus.is_empty()
            || !self.storage.is_empty()
            || self.wireless.is_some()
            || !self.cpu_flags.is_empty()
    }
}

/// Typed hardware facts for one machine. Built once per run and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HardwareFactSheet {
    pub model_identifier: String,
    pub gpus: Vec<Gpu>,
    pub wireless: Option<WirelessChipset>,
    pub bluetooth: Option<BluetoothChipset>,
    pub audio: AudioClass,
    pub cpu: CpuInfo,
    pub storage: BTreeSet<StorageInterface>,
    pub chassis: ChassisFlags,
    pub boot: Option<BootState>,
    pub probed: bool,
}

impl HardwareFactSheet {
    pub fn from_probe(report: &ProbeReport) -> Self {
        let gpus = report
            .gpus
            .iter()
            .map(|g| {
                let integrated = g
                    .integrated
                    .unwrap_or(GpuVendor::from_pci(g.vendor_id) == GpuVendor::Intel);
                Gpu::from_pci(g.vendor_id, g.device_id, integrated)
            })
            .collect();

        let cpu = CpuInfo::from_feature_string(report.cpu_brand.clone(), &report.cpu_flags.join(" "));

        let sheet = Self {
            model_identifier: report.model.clone(),
            gpus,
            wireless: report
                .wireless
                .as_ref()
                .map(|w| WirelessChipset::from_pci(w.vendor_id, w.device_id)),
            bluetooth: report
                .bluetooth
                .as_deref()
                .map(BluetoothChipset::from_hub_name),
            audio: report.audio,
            cpu,
            storage: pci::storage_interfaces(&report.storage),
            chassis: ChassisFlags::for_model(&report.model),
            boot: report.boot.clone(),
            probed: report.has_hardware(),
        };

        if models::lookup(&sheet.model_identifier).is_none() {
            tracing::debug!(
                "model '{}' not in model table, chassis flags default to false",
                sheet.model_identifier
            );
        }
        sheet
    }

    /// Fact sheet for a model's stock configuration, as if it had been probed.
    pub fn from_model(identifier: &str) -> Result<Self> {
        let model =
            models::lookup(identifier).ok_or_else(|| Error::UnknownModel(identifier.to_string()))?;

        Ok(Self {
            model_identifier: model.identifier.to_string(),
            gpus: model.stock_gpus(),
            wireless: model.wireless,
            bluetooth: model.bluetooth,
            audio: AudioClass::Unknown,
            cpu: CpuInfo::from_feature_string(None, &model.cpu.baseline_flags().join(" ")),
            storage: model.storage_interfaces(),
            chassis: model.chassis(),
            boot: None,
            probed: true,
        })
    }

    pub fn has_cpu_flag(&self, flag: &str) -> bool {
        self.cpu.has_flag(flag)
    }
}
