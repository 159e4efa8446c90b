use super::ResolveInput;
use crate::catalog::PatchCatalogEntry;
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use std::fmt;

/// A reason patching cannot proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValidationCheck {
    MissingProbeData,
    NoStorageController,
    SipEnabled,
    SecureBootModelEnabled,
    FileVaultEnabled,
    ForceOpenGlMissing,
}

impl ValidationCheck {
    pub const ALL: [ValidationCheck; 6] = [
        ValidationCheck::MissingProbeData,
        ValidationCheck::NoStorageController,
        ValidationCheck::SipEnabled,
        ValidationCheck::SecureBootModelEnabled,
        ValidationCheck::FileVaultEnabled,
        ValidationCheck::ForceOpenGlMissing,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ValidationCheck::MissingProbeData => "Validation: Missing hardware probe data",
            ValidationCheck::NoStorageController => "Validation: No supported storage controller",
            ValidationCheck::SipEnabled => "Validation: SIP is enabled",
            ValidationCheck::SecureBootModelEnabled => "Validation: SecureBootModel is enabled",
            ValidationCheck::FileVaultEnabled => "Validation: FileVault is enabled",
            ValidationCheck::ForceOpenGlMissing => "Validation: Force OpenGL property missing",
        }
    }
}

impl fmt::Display for ValidationCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = self.key();
        write!(f, "{}", key.strip_prefix("Validation: ").unwrap_or(key))
    }
}

/// Outcome of the pre-patch checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    pub failures: Vec<ValidationCheck>,
}

impl Validation {
    pub fn patching_possible(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failed(&self, check: ValidationCheck) -> bool {
        self.failures.contains(&check)
    }

    /// `Validation: Patching Possible` followed by each individual check.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        std::iter::once(("Validation: Patching Possible", self.patching_possible()))
            .chain(ValidationCheck::ALL.iter().map(|c| (c.key(), self.failed(*c))))
    }
}

impl Serialize for Validation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ValidationCheck::ALL.len() + 1))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, &value)?;
        }
        map.end()
    }
}

/// Run the checks against the final patch list.
///
/// Boot-state checks only matter when something is pending and the probe
/// recorded boot state.
pub fn validate(input: &ResolveInput, patches: &[PatchCatalogEntry]) -> Validation {
    let host = &input.host;
    let mut failures = Vec::new();

    if !host.probed {
        failures.push(ValidationCheck::MissingProbeData);
    }
    if host.storage.is_empty() {
        failures.push(ValidationCheck::NoStorageController);
    }

    if !patches.is_empty()
        && let Some(boot) = &host.boot
    {
        if boot.sip_enabled {
            failures.push(ValidationCheck::SipEnabled);
        }
        if boot.secure_boot_model {
            failures.push(ValidationCheck::SecureBootModelEnabled);
        }
        if boot.filevault_enabled {
            failures.push(ValidationCheck::FileVaultEnabled);
        }
        let web_drivers = patches.iter().any(|p| p.name == "Nvidia Web Drivers");
        if web_drivers && boot.boot_arg_value("ngfxgl").as_deref() != Some("1") {
            failures.push(ValidationCheck::ForceOpenGlMissing);
        }
    }

    for check in &failures {
        tracing::warn!("cannot patch: {}", check);
    }
    Validation { failures }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::detect::BootState;
    use crate::detect::pci::StorageInterface;
    use crate::os::OsVersion;
    use crate::resolve::{FeatureFlags, HostContext};

    fn host_input(boot: Option<BootState>) -> ResolveInput {
        ResolveInput {
            predicates: Default::default(),
            host: HostContext {
                model_identifier: "MacPro5,1".to_string(),
                storage: [StorageInterface::Sata].into_iter().collect(),
                probed: true,
                boot,
                ..Default::default()
            },
            os: OsVersion::new(22, 0),
            flags: FeatureFlags::default(),
        }
    }

    fn patches(names: &[&str]) -> Vec<PatchCatalogEntry> {
        names
            .iter()
            .map(|n| Catalog::builtin().get(n).unwrap().clone())
            .collect()
    }

    #[test]
    fn test_clean_host() {
        let v = validate(&host_input(Some(BootState::default())), &patches(&["Nvidia Kepler"]));
        assert!(v.patching_possible());
    }

    #[test]
    fn test_missing_probe_and_storage() {
        let mut input = host_input(None);
        input.host.probed = false;
        input.host.storage.clear();
        let v = validate(&input, &[]);
        assert!(!v.patching_possible());
        assert!(v.failed(ValidationCheck::MissingProbeData));
        assert!(v.failed(ValidationCheck::NoStorageController));
    }

    #[test]
    fn test_boot_checks_only_with_pending_patches() {
        let boot = BootState {
            sip_enabled: true,
            secure_boot_model: true,
            filevault_enabled: true,
            boot_args: vec![],
        };
        let v = validate(&host_input(Some(boot.clone())), &[]);
        assert!(v.patching_possible());

        let v = validate(&host_input(Some(boot)), &patches(&["Nvidia Kepler"]));
        assert_eq!(
            v.failures,
            vec![
                ValidationCheck::SipEnabled,
                ValidationCheck::SecureBootModelEnabled,
                ValidationCheck::FileVaultEnabled,
            ]
        );
    }

    #[test]
    fn test_web_drivers_need_ngfxgl() {
        let web = patches(&["Non-Metal Common", "Nvidia Web Drivers"]);
        let v = validate(&host_input(Some(BootState::default())), &web);
        assert!(v.failed(ValidationCheck::ForceOpenGlMissing));

        let boot = BootState {
            boot_args: vec!["keepsyms=1 ngfxgl=1".to_string()],
            ..Default::default()
        };
        let v = validate(&host_input(Some(boot)), &web);
        assert!(v.patching_possible());
    }

    #[test]
    fn test_serialized_keys() {
        let v = Validation {
            failures: vec![ValidationCheck::SipEnabled],
        };
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["Validation: Patching Possible"], false);
        assert_eq!(json["Validation: SIP is enabled"], true);
        assert_eq!(json["Validation: FileVault is enabled"], false);
    }
}
