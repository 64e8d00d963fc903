use ark_bw6_761::Fq;
use ark_ff::PrimeField;
use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::ChipError;

/// Limb layout used to emulate the BW6-761 base field inside a circuit whose
/// native modulus is a different prime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct EmulationConfig {
    pub limb_bits: usize,
    pub num_limbs: usize,
}

impl EmulationConfig {
    pub const MAX_LIMB_BITS: usize = 64;

    pub fn capacity(&self) -> usize {
        self.limb_bits * self.num_limbs
    }

    /// Checks that the limbs fit in a machine word and together cover the
    /// 761-bit base-field modulus.
    pub fn validate(&self) -> Result<(), ChipError> {
        if self.limb_bits == 0 || self.limb_bits > Self::MAX_LIMB_BITS {
            return Err(ChipError::LimbBits {
                limb_bits: self.limb_bits,
            });
        }
        let required = Fq::MODULUS_BIT_SIZE as usize;
        if self.capacity() < required {
            return Err(ChipError::InsufficientCapacity {
                capacity: self.capacity(),
                required,
            });
        }
        Ok(())
    }
}

impl Default for EmulationConfig {
    fn default() -> Self {
        Self::new(64, 12)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(64, 12 ; "default layout")]
    #[test_case(32, 24 ; "half words")]
    #[test_case(61, 13 ; "minimal limb count")]
    fn test_valid_layout(limb_bits: usize, num_limbs: usize) {
        assert!(EmulationConfig::new(limb_bits, num_limbs).validate().is_ok());
    }

    #[test]
    fn test_invalid_layout() {
        assert_eq!(
            EmulationConfig::new(0, 12).validate(),
            Err(ChipError::LimbBits { limb_bits: 0 })
        );
        assert_eq!(
            EmulationConfig::new(65, 12).validate(),
            Err(ChipError::LimbBits { limb_bits: 65 })
        );
        assert_eq!(
            EmulationConfig::new(64, 11).validate(),
            Err(ChipError::InsufficientCapacity {
                capacity: 704,
                required: 761
            })
        );
    }

    #[test]
    fn test_config_serde() {
        let config = EmulationConfig::new(48, 16);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"limb_bits":48,"num_limbs":16}"#);
        let back: EmulationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
        assert_eq!(EmulationConfig::default(), EmulationConfig::new(64, 12));
    }
}
