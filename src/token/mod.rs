//! Token ledger implementations.
//!
//! [`InMemoryToken`] is a complete reference ledger used to bootstrap pools
//! in tests, demos and simulations.  Production deployments plug their own
//! ledger in through [`TokenLedger`](crate::traits::TokenLedger).

mod in_memory;

pub use in_memory::{InMemoryToken, MintCapability};
