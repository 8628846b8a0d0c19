//! Ordered pair of distinct tokens.

use serde::{Deserialize, Serialize};

use super::Token;
use crate::error::SwapError;

/// Which reserve of a pair a token maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The lower-address token (`reserve_a`).
    A,
    /// The higher-address token (`reserve_b`).
    B,
}

impl Side {
    /// Returns the opposite side.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

/// An ordered pair of distinct tokens, canonically sorted by address.
///
/// The canonical ordering guarantees that `token_a.address() < token_b.address()`,
/// so `(A, B)` and `(B, A)` describe the same pool.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::{Address, Token, TokenPair};
///
/// let tok_a = Token::new(Address::from_low_u64(1));
/// let tok_b = Token::new(Address::from_low_u64(2));
///
/// // Order is enforced automatically:
/// let pair = TokenPair::new(tok_b, tok_a).expect("distinct tokens");
/// assert_eq!(pair.first(), tok_a);
/// assert_eq!(pair.second(), tok_b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(Token, Token)", into = "(Token, Token)")]
pub struct TokenPair {
    token_a: Token,
    token_b: Token,
}

impl TokenPair {
    /// Creates a new canonically-ordered `TokenPair`.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidToken`] if both tokens have the same address.
    pub fn new(token1: Token, token2: Token) -> Result<Self, SwapError> {
        if token1 == token2 {
            return Err(SwapError::InvalidToken(
                "token pair requires two distinct addresses",
            ));
        }

        let (token_a, token_b) = if token1 < token2 {
            (token1, token2)
        } else {
            (token2, token1)
        };

        Ok(Self { token_a, token_b })
    }

    /// Returns the first token (lower address).
    #[must_use]
    pub const fn first(&self) -> Token {
        self.token_a
    }

    /// Returns the second token (higher address).
    #[must_use]
    pub const fn second(&self) -> Token {
        self.token_b
    }

    /// Returns `true` if the given token is part of this pair.
    #[must_use]
    pub fn contains(&self, token: &Token) -> bool {
        self.token_a == *token || self.token_b == *token
    }

    /// Returns the side of the pair `token` belongs to, if any.
    #[must_use]
    pub fn side_of(&self, token: &Token) -> Option<Side> {
        if *token == self.token_a {
            Some(Side::A)
        } else if *token == self.token_b {
            Some(Side::B)
        } else {
            None
        }
    }

    /// Returns the token on `side`.
    #[must_use]
    pub const fn token(&self, side: Side) -> Token {
        match side {
            Side::A => self.token_a,
            Side::B => self.token_b,
        }
    }

    /// Returns the counterpart of `token` in this pair.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidToken`] if `token` is not in the pair.
    pub fn other(&self, token: &Token) -> Result<Token, SwapError> {
        match self.side_of(token) {
            Some(side) => Ok(self.token(side.flip())),
            None => Err(SwapError::InvalidToken("token is not part of this pair")),
        }
    }

    /// Reports whether a caller-ordered `(x, y)` is the reverse of the
    /// canonical order.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidToken`] unless `{x, y}` is exactly this
    /// pair.
    pub fn is_reversed(&self, x: &Token, y: &Token) -> Result<bool, SwapError> {
        if *x == self.token_a && *y == self.token_b {
            Ok(false)
        } else if *x == self.token_b && *y == self.token_a {
            Ok(true)
        } else {
            Err(SwapError::InvalidToken("tokens do not match the pool pair"))
        }
    }
}

impl TryFrom<(Token, Token)> for TokenPair {
    type Error = SwapError;

    fn try_from((a, b): (Token, Token)) -> Result<Self, Self::Error> {
        Self::new(a, b)
    }
}

impl From<TokenPair> for (Token, Token) {
    fn from(pair: TokenPair) -> Self {
        (pair.token_a, pair.token_b)
    }
}
