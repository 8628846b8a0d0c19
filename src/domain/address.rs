//! Account and token addresses.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SwapError;

/// Number of bytes in an [`Address`].
pub const ADDRESS_LEN: usize = 20;

/// A 20-byte account identity, rendered as `0x`-prefixed lowercase hex.
///
/// Accounts (liquidity providers, traders, the pool itself) and token
/// ledgers are all identified by an `Address`.  Every byte sequence is a
/// valid address, so construction from bytes is infallible.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::Address;
///
/// let addr: Address = "0x00000000000000000000000000000000000000ff".parse().expect("hex");
/// assert_eq!(addr, Address::from_low_u64(255));
/// assert_eq!(addr.to_string(), "0x00000000000000000000000000000000000000ff");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    /// The all-zero address.  Holds locked minimum liquidity.
    pub const ZERO: Self = Self([0u8; ADDRESS_LEN]);

    /// Creates an `Address` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Builds an address whose last eight bytes hold `value` (big-endian).
    ///
    /// Handy for deterministic test and demo identities.
    #[must_use]
    pub const fn from_low_u64(value: u64) -> Self {
        let mut bytes = [0u8; ADDRESS_LEN];
        let be = value.to_be_bytes();
        let mut i = 0;
        while i < 8 {
            bytes[ADDRESS_LEN - 8 + i] = be[i];
            i += 1;
        }
        Self(bytes)
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// Returns `true` for the all-zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; ADDRESS_LEN]
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = SwapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let mut bytes = [0u8; ADDRESS_LEN];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|_| SwapError::InvalidConfiguration("address must be 20 hex-encoded bytes"))?;
        Ok(Self(bytes))
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn from_low_u64_places_value_at_the_end() {
        let addr = Address::from_low_u64(0x0102);
        let bytes = addr.as_bytes();
        assert_eq!(bytes[18], 0x01);
        assert_eq!(bytes[19], 0x02);
        assert!(bytes[..18].iter().all(|b| *b == 0));
    }

    #[test]
    fn zero_address() {
        assert!(Address::ZERO.is_zero());
        assert!(!Address::from_low_u64(1).is_zero());
        assert_eq!(Address::default(), Address::ZERO);
    }

    #[test]
    fn display_is_prefixed_hex() {
        let addr = Address::from_bytes([0xab; ADDRESS_LEN]);
        assert_eq!(addr.to_string(), format!("0x{}", "ab".repeat(20)));
    }

    #[test]
    fn parse_with_and_without_prefix() {
        let text = "00000000000000000000000000000000000000aa";
        let Ok(a) = text.parse::<Address>() else {
            panic!("expected Ok");
        };
        let Ok(b) = format!("0x{text}").parse::<Address>() else {
            panic!("expected Ok");
        };
        assert_eq!(a, b);
        assert_eq!(a, Address::from_low_u64(0xaa));
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert!("0x1234".parse::<Address>().is_err());
        assert!("zz".repeat(20).parse::<Address>().is_err());
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(Address::from_low_u64(1) < Address::from_low_u64(2));
        assert!(Address::ZERO < Address::from_low_u64(1));
    }
}
