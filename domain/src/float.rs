use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A 32-bit wire float that compares and hashes by bit pattern, so records
/// carrying scores keep structural `Eq` and `Hash`. Every NaN shares one
/// pattern.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Float(pub f32);

impl Float {
    pub fn value(self) -> f32 {
        self.0
    }

    fn canonical_bits(self) -> u32 {
        if self.0.is_nan() {
            f32::NAN.to_bits()
        } else {
            self.0.to_bits()
        }
    }
}

impl PartialEq for Float {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_bits() == other.canonical_bits()
    }
}

impl Eq for Float {}

impl Hash for Float {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_bits().hash(state);
    }
}

impl From<f32> for Float {
    fn from(value: f32) -> Self {
        Float(value)
    }
}

impl fmt::Display for Float {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl crate::FieldDisplay for Float {
    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(value: Float) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn nan_payloads_are_one_value() {
        let quiet = Float(f32::NAN);
        let payload = Float(f32::from_bits(0x7fc0_0001));
        let negative = Float(f32::from_bits(0xffc0_0000));
        assert!(payload.0.is_nan() && negative.0.is_nan());

        assert_eq!(quiet, payload);
        assert_eq!(quiet, negative);
        assert_eq!(hash_of(quiet), hash_of(payload));
        assert_eq!(hash_of(quiet), hash_of(negative));
    }

    #[test]
    fn signed_zeros_stay_distinct() {
        assert_ne!(Float(0.0), Float(-0.0));
        assert_eq!(Float(1.5), Float::from(1.5));
    }
}
