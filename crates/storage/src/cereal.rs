use serde::{Deserialize, Serialize};

/// A storable good kind.
///
/// Finite and comparable; used as the key of the container mapping. The
/// `Ord` derive keeps diagnostics output deterministic.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cereal {
    Rice,
    Buckwheat,
    Millet,
    Peas,
    Bulgur,
}

impl Cereal {
    /// Every storable kind, in declaration order.
    pub const ALL: [Cereal; 5] = [
        Cereal::Rice,
        Cereal::Buckwheat,
        Cereal::Millet,
        Cereal::Peas,
        Cereal::Bulgur,
    ];

    /// Human-readable name, used in diagnostic dumps.
    pub fn label(&self) -> &'static str {
        match self {
            Cereal::Rice => "rice",
            Cereal::Buckwheat => "buckwheat",
            Cereal::Millet => "millet",
            Cereal::Peas => "peas",
            Cereal::Bulgur => "bulgur",
        }
    }
}

impl core::fmt::Display for Cereal {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_every_kind_once() {
        for (i, a) in Cereal::ALL.iter().enumerate() {
            for b in &Cereal::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Cereal::Buckwheat.to_string(), "buckwheat");
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&Cereal::Peas).unwrap();
        assert_eq!(json, "\"peas\"");
    }
}
