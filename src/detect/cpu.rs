use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuInfo {
    pub brand: Option<String>,
    /// Instruction-set tokens as reported by `machdep.cpu.features` / `leaf7_features`.
    pub flags: BTreeSet<String>,
}

impl CpuInfo {
    /// Parse a whitespace separated feature string, e.g. `"FPU VME SSE4.2 AVX1.0"`.
    pub fn from_feature_string(brand: Option<String>, features: &str) -> Self {
        Self {
            brand,
            flags: features.split_whitespace().map(normalize_flag).collect(),
        }
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.contains(&normalize_flag(flag))
    }

    /// AVX2 hosts run the stock Polaris/Vega/AMD OpenCL stacks.
    pub fn has_avx2(&self) -> bool {
        self.has_flag("AVX2")
    }
}

pub fn normalize_flag(flag: &str) -> String {
    flag.trim().to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_feature_string() {
        let cpu = CpuInfo::from_feature_string(
            Some("Intel(R) Core(TM) i5-2400S CPU @ 2.50GHz".to_string()),
            "FPU VME DE SSE4.1 SSE4.2 AVX1.0",
        );
        assert!(cpu.has_flag("SSE4.2"));
        assert!(cpu.has_flag("avx1.0"));
        assert!(!cpu.has_avx2());
        assert_eq!(cpu.flags.len(), 6);
    }

    #[test]
    fn test_avx2() {
        let cpu = CpuInfo::from_feature_string(None, "SMEP ERMS RDWRFSGS AVX2 BMI1");
        assert!(cpu.has_avx2());
    }
}
