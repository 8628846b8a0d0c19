//! Configuration for a SimpleSwap pool.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{Address, FeeRate, Shares, Token, TokenPair};
use crate::error::SwapError;

/// Default LP token name.
pub const DEFAULT_LP_NAME: &str = "Token SimpleSwap";

/// Default LP token symbol.
pub const DEFAULT_LP_SYMBOL: &str = "TSS";

/// Immutable parameters of a constant-product pool.
///
/// # Parameters
///
/// - `token_pair`: the two pooled tokens, canonically ordered.
/// - `fee_rate`: swap fee, default `3/1000`.
/// - `minimum_liquidity`: shares permanently locked to the zero address on
///   the first deposit; default `0` (no lock).
/// - `lp_name` / `lp_symbol`: metadata of the LP share token.
///
/// # File format
///
/// ```toml
/// token_a = "0x000000000000000000000000000000000000000a"
/// token_b = "0x000000000000000000000000000000000000000b"
/// minimum_liquidity = 1000
///
/// [fee]
/// numerator = 3
/// denominator = 1000
///
/// [lp_token]
/// name = "Token SimpleSwap"
/// symbol = "TSS"
/// ```
///
/// Every key except `token_a` and `token_b` is optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    token_pair: TokenPair,
    fee_rate: FeeRate,
    minimum_liquidity: Shares,
    lp_name: String,
    lp_symbol: String,
}

impl PoolConfig {
    /// Creates a configuration with default fee, no liquidity lock and
    /// default LP metadata.
    #[must_use]
    pub fn new(token_pair: TokenPair) -> Self {
        Self {
            token_pair,
            fee_rate: FeeRate::DEFAULT,
            minimum_liquidity: Shares::ZERO,
            lp_name: DEFAULT_LP_NAME.to_owned(),
            lp_symbol: DEFAULT_LP_SYMBOL.to_owned(),
        }
    }

    /// Sets the swap fee.
    #[must_use]
    pub const fn with_fee_rate(mut self, fee_rate: FeeRate) -> Self {
        self.fee_rate = fee_rate;
        self
    }

    /// Sets the number of shares locked on the first deposit.
    #[must_use]
    pub const fn with_minimum_liquidity(mut self, minimum_liquidity: Shares) -> Self {
        self.minimum_liquidity = minimum_liquidity;
        self
    }

    /// Sets the LP token name and symbol.
    #[must_use]
    pub fn with_lp_metadata(mut self, name: impl Into<String>, symbol: impl Into<String>) -> Self {
        self.lp_name = name.into();
        self.lp_symbol = symbol.into();
        self
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidConfiguration`] if the LP name or symbol
    /// is blank or the fee rate is malformed.
    pub fn validate(&self) -> Result<(), SwapError> {
        FeeRate::new(self.fee_rate.numerator(), self.fee_rate.denominator())?;
        if self.lp_name.trim().is_empty() {
            return Err(SwapError::InvalidConfiguration("LP token name is empty"));
        }
        if self.lp_symbol.trim().is_empty() {
            return Err(SwapError::InvalidConfiguration("LP token symbol is empty"));
        }
        Ok(())
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// - [`SwapError::ConfigParse`] on malformed TOML or unknown keys.
    /// - [`SwapError::InvalidToken`] if both tokens are the same.
    /// - [`SwapError::InvalidConfiguration`] if validation fails.
    pub fn from_toml_str(text: &str) -> Result<Self, SwapError> {
        let file: PoolConfigFile =
            toml::from_str(text).map_err(|e| SwapError::ConfigParse(e.to_string()))?;
        let fee_rate = FeeRate::new(file.fee.numerator, file.fee.denominator)?;
        let token_pair = TokenPair::new(Token::new(file.token_a), Token::new(file.token_b))?;
        let config = Self::new(token_pair)
            .with_fee_rate(fee_rate)
            .with_minimum_liquidity(Shares::new(u128::from(file.minimum_liquidity)))
            .with_lp_metadata(file.lp_token.name, file.lp_token.symbol);
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML file.
    ///
    /// # Errors
    ///
    /// [`SwapError::ConfigParse`] if the file cannot be read, otherwise as
    /// [`PoolConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SwapError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| SwapError::ConfigParse(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Renders the configuration in the file format [`load`](Self::load)
    /// reads.
    ///
    /// # Errors
    ///
    /// [`SwapError::ConfigParse`] if the lock does not fit the file format
    /// or serialization fails.
    pub fn to_toml_string(&self) -> Result<String, SwapError> {
        let minimum_liquidity = u64::try_from(self.minimum_liquidity.get()).map_err(|_| {
            SwapError::ConfigParse("minimum_liquidity exceeds the file format range".to_owned())
        })?;
        let file = PoolConfigFile {
            token_a: self.token_pair.first().address(),
            token_b: self.token_pair.second().address(),
            minimum_liquidity,
            fee: FeeSection {
                numerator: self.fee_rate.numerator(),
                denominator: self.fee_rate.denominator(),
            },
            lp_token: LpTokenSection {
                name: self.lp_name.clone(),
                symbol: self.lp_symbol.clone(),
            },
        };
        toml::to_string(&file).map_err(|e| SwapError::ConfigParse(e.to_string()))
    }

    /// Returns the token pair.
    #[must_use]
    pub const fn token_pair(&self) -> &TokenPair {
        &self.token_pair
    }

    /// Returns the swap fee.
    #[must_use]
    pub const fn fee_rate(&self) -> FeeRate {
        self.fee_rate
    }

    /// Returns the shares locked on the first deposit.
    #[must_use]
    pub const fn minimum_liquidity(&self) -> Shares {
        self.minimum_liquidity
    }

    /// Returns the LP token name.
    #[must_use]
    pub fn lp_name(&self) -> &str {
        &self.lp_name
    }

    /// Returns the LP token symbol.
    #[must_use]
    pub fn lp_symbol(&self) -> &str {
        &self.lp_symbol
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct PoolConfigFile {
    token_a: Address,
    token_b: Address,
    #[serde(default)]
    minimum_liquidity: u64,
    #[serde(default)]
    fee: FeeSection,
    #[serde(default)]
    lp_token: LpTokenSection,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct FeeSection {
    numerator: u32,
    denominator: u32,
}

impl Default for FeeSection {
    fn default() -> Self {
        Self {
            numerator: FeeRate::DEFAULT.numerator(),
            denominator: FeeRate::DEFAULT.denominator(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct LpTokenSection {
    name: String,
    symbol: String,
}

impl Default for LpTokenSection {
    fn default() -> Self {
        Self {
            name: DEFAULT_LP_NAME.to_owned(),
            symbol: DEFAULT_LP_SYMBOL.to_owned(),
        }
    }
}
