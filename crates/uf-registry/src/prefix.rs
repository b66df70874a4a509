//! Prefix tables for bulk generation of scaled unit families.

use uf_core::Real;

/// `(prefix, multiplier)` pairs.
pub type PrefixTable = [(&'static str, Real)];

/// Metric prefixes, largest first.
pub const SI_PREFIXES: &PrefixTable = &[
    ("Y", 1e24),
    ("Z", 1e21),
    ("E", 1e18),
    ("P", 1e15),
    ("T", 1e12),
    ("G", 1e9),
    ("M", 1e6),
    ("k", 1e3),
    ("h", 1e2),
    ("da", 1e1),
    ("d", 1e-1),
    ("c", 1e-2),
    ("m", 1e-3),
    ("u", 1e-6),
    ("n", 1e-9),
    ("p", 1e-12),
    ("f", 1e-15),
    ("a", 1e-18),
    ("z", 1e-21),
    ("y", 1e-24),
];

/// IEC binary prefixes (powers of 1024), largest first.
///
/// Every multiplier is a power of two and therefore exact in `f64`.
pub const BINARY_PREFIXES: &PrefixTable = &[
    ("Yi", 1_208_925_819_614_629_174_706_176.0),
    ("Zi", 1_180_591_620_717_411_303_424.0),
    ("Ei", 1_152_921_504_606_846_976.0),
    ("Pi", 1_125_899_906_842_624.0),
    ("Ti", 1_099_511_627_776.0),
    ("Gi", 1_073_741_824.0),
    ("Mi", 1_048_576.0),
    ("Ki", 1_024.0),
];

/// A generated `(base, prefix, multiplier)` triple.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixEntry {
    pub base: String,
    pub prefix: String,
    pub multiplier: Real,
}

impl PrefixEntry {
    /// Registered name of the generated unit.
    pub fn unit_name(&self) -> String {
        format!("{}{}", self.prefix, self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn si_prefix_names_are_unique() {
        let mut names: Vec<&str> = SI_PREFIXES.iter().map(|(p, _)| *p).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SI_PREFIXES.len());
    }

    #[test]
    fn binary_prefixes_are_exact_powers_of_1024() {
        let mut expected: Real = 1.0;
        for (prefix, multiplier) in BINARY_PREFIXES.iter().rev() {
            expected *= 1024.0;
            assert_eq!(*multiplier, expected, "{prefix}");
            assert!(prefix.ends_with('i'));
        }
        assert_eq!(BINARY_PREFIXES.len(), 8);
    }

    #[test]
    fn binary_and_si_prefixes_do_not_overlap() {
        for (binary, _) in BINARY_PREFIXES {
            assert!(SI_PREFIXES.iter().all(|(si, _)| si != binary));
        }
    }

    #[test]
    fn unit_name_concatenates() {
        let entry = PrefixEntry {
            base: "m".into(),
            prefix: "k".into(),
            multiplier: 1e3,
        };
        assert_eq!(entry.unit_name(), "km");
    }
}
