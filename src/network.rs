// Copyright (c) 2021-2022 Toposware, Inc.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This module provides the `Network` parameter set threaded through
//! every derivation and serialization call.

use crate::constants::HARDENED_BIT;

/// Network-scoped derivation parameters.
///
/// A `Network` value is passed explicitly to every operation that
/// needs it, so a single process can operate several networks
/// concurrently without any shared state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Network {
    /// HMAC-SHA512 key used when generating a master node from a seed
    pub master_secret: &'static [u8],
    /// Version prefix of serialized private extended keys
    pub private_version: u32,
    /// Version prefix of serialized public extended keys
    pub public_version: u32,
    /// Offset marking a stored child index as hardened
    pub hardened_bit: u32,
}

/// Parameters of the Bitcoin main network (`xprv`/`xpub` prefixes).
pub const BITCOIN: Network = Network {
    master_secret: b"Bitcoin seed",
    private_version: 0x0488_ade4,
    public_version: 0x0488_b21e,
    hardened_bit: HARDENED_BIT,
};

/// Parameters of the Bitcoin test networks (`tprv`/`tpub` prefixes).
pub const TESTNET: Network = Network {
    master_secret: b"Bitcoin seed",
    private_version: 0x0435_8394,
    public_version: 0x0435_87cf,
    hardened_bit: HARDENED_BIT,
};
