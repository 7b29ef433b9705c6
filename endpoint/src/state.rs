//! State definitions for the bridge endpoint.
//!
//! Everything here is written once at instantiation except the deposit
//! ledger, which only the initiate and finalize paths touch.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

/// Endpoint configuration, fixed at instantiation and immutable thereafter.
#[cw_serde]
pub struct Config {
    /// Address of the message gateway on this domain. Sole trusted caller of
    /// the finalize entry point.
    pub gateway: Addr,
    /// Address of the paired endpoint on the other domain, in the form the
    /// gateway authenticates it.
    pub remote_endpoint: String,
    /// Which side of the escrow/mint duality this instance plays.
    pub role: BridgeRole,
}

/// Which token adapter this endpoint drives. The deposit ledger exists only
/// for the escrow role; the compliance gate runs only for the mint/burn role.
#[cw_serde]
pub enum BridgeRole {
    /// Holds the original token: initiate locks it into custody, finalize
    /// pays it back out against the deposit ledger.
    Escrow,
    /// Holds a derived representation token: initiate burns it, finalize
    /// mints it behind the compliance gate.
    MintBurn,
}

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:bridge-endpoint";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Escrow accounting, keyed by (local token, remote token, token id).
///
/// An entry's value equals the total ever escrowed under the key minus the
/// total ever released; a zero entry is indistinguishable from an absent one.
/// Two different remote tokens for the same local token and id are distinct
/// positions. Written only by initiate (increment) and finalize (decrement)
/// on an escrow-role endpoint.
pub const DEPOSITS: Map<(&Addr, &str, u64), Uint128> = Map::new("deposits");
