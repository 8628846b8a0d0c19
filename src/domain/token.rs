//! Token identity type.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Address;

/// Identity of a pooled fungible token: the address of its ledger.
///
/// Every pooled token uses 18 decimal places, so the address alone is the
/// token's identity.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::{Address, Token};
///
/// let addr = Address::from_low_u64(7);
/// let tok = Token::new(addr);
/// assert_eq!(tok.address(), addr);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Token(Address);

impl Token {
    /// Creates a new `Token` from its ledger address.
    #[must_use]
    pub const fn new(address: Address) -> Self {
        Self(address)
    }

    /// Returns the token's ledger address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.0
    }
}

impl From<Address> for Token {
    fn from(address: Address) -> Self {
        Self(address)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
