// Copyright (c) 2021-2022 Toposware, Inc.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This module provides master node generation from a seed and the
//! child key derivation (CKD) algorithm, for both hardened and normal
//! children.

use crate::constants::{
    CHAIN_CODE_LENGTH, MAX_SEED_ATTEMPTS, MAX_SEED_LENGTH, MAX_TWEAK_ATTEMPTS, MIN_SEED_LENGTH,
    PRIVATE_KEY_LENGTH,
};
use crate::curve::{Curve, Secp256k1};
use crate::error::HdError;
use crate::network::Network;
use crate::node::HdNode;

use hmac::{Hmac, Mac};
use rand_core::{CryptoRng, RngCore};
use sha2::Sha512;

type HmacSha512 = Hmac<Sha512>;

/// Splits a 64-byte HMAC-SHA512 output into its key and chain code halves.
fn split_digest(digest: &[u8]) -> ([u8; PRIVATE_KEY_LENGTH], [u8; CHAIN_CODE_LENGTH]) {
    let mut left = [0u8; PRIVATE_KEY_LENGTH];
    left.copy_from_slice(&digest[..PRIVATE_KEY_LENGTH]);

    let mut right = [0u8; CHAIN_CODE_LENGTH];
    right.copy_from_slice(&digest[PRIVATE_KEY_LENGTH..]);

    (left, right)
}

impl HdNode {
    /// Generates the master node of a derivation tree from a seed.
    ///
    /// The seed must be between 16 and 64 bytes. The master private
    /// key and chain code are the two halves of
    /// `HMAC-SHA512(key = network.master_secret, data = seed)`; the
    /// operation fails with [`HdError::InvalidKey`] in the rare case
    /// where the left half is not a valid private key.
    pub fn from_seed(seed: &[u8], network: &Network) -> Result<Self, HdError> {
        if seed.len() < MIN_SEED_LENGTH || seed.len() > MAX_SEED_LENGTH {
            return Err(HdError::InvalidSeedLength);
        }

        let mut mac = HmacSha512::new_from_slice(network.master_secret)
            .expect("HMAC-SHA512 accepts keys of any length");
        mac.update(seed);
        let (key, chain_code) = split_digest(&mac.finalize().into_bytes());

        HdNode::assemble(0, 0, 0, chain_code, Some(key), None)
    }

    /// Generates a master node from a fresh random 64-byte seed.
    ///
    /// Seeds producing an invalid master key are redrawn, up to a small
    /// attempt cap. With a uniform source the first draw succeeds with
    /// overwhelming probability; the cap only matters for deterministic
    /// test sources and yields [`HdError::DerivationExhausted`].
    pub fn from_random_seed(
        mut rng: impl CryptoRng + RngCore,
        network: &Network,
    ) -> Result<Self, HdError> {
        for _ in 0..MAX_SEED_ATTEMPTS {
            let mut seed = [0u8; MAX_SEED_LENGTH];
            rng.fill_bytes(&mut seed);

            match Self::from_seed(&seed, network) {
                Err(HdError::InvalidKey) => continue,
                result => return result,
            }
        }

        Err(HdError::DerivationExhausted)
    }

    /// Derives one child of this node.
    ///
    /// `index` is the base child number and must be strictly below
    /// `network.hardened_bit`; for hardened children the stored index
    /// of the result is `index + network.hardened_bit`. Hardened
    /// derivation mixes the parent's private key into the HMAC input
    /// and therefore fails with [`HdError::DeriveHardenedFromNeutered`]
    /// on a neutered node, while normal children can be derived from
    /// public material alone.
    ///
    /// In the astronomically rare case where the derived tweak is
    /// invalid for the curve, derivation retries with `index + 1`, as
    /// prescribed by the algorithm.
    pub fn derive_child(
        &self,
        index: u32,
        hardened: bool,
        network: &Network,
    ) -> Result<Self, HdError> {
        self.derive_child_with::<Secp256k1>(index, hardened, network)
    }

    /// CKD core, generic over the curve engine so that the tweak retry
    /// cap stays reachable from tests.
    pub(crate) fn derive_child_with<C: Curve>(
        &self,
        index: u32,
        hardened: bool,
        network: &Network,
    ) -> Result<Self, HdError> {
        if hardened && self.is_neutered() {
            return Err(HdError::DeriveHardenedFromNeutered);
        }
        let depth = self
            .depth
            .checked_add(1)
            .ok_or(HdError::MaxDepthExceeded)?;

        let mut candidate = index;
        for _ in 0..MAX_TWEAK_ATTEMPTS {
            if candidate >= network.hardened_bit {
                return Err(HdError::InvalidChildIndex);
            }

            let mut mac = HmacSha512::new_from_slice(&self.chain_code)
                .expect("HMAC-SHA512 accepts keys of any length");
            if hardened {
                let private = self
                    .private_key
                    .expect("checked for a private key above");
                mac.update(&[0]);
                mac.update(&private);
                mac.update(&(candidate + network.hardened_bit).to_be_bytes());
            } else {
                mac.update(&self.public_key());
                mac.update(&candidate.to_be_bytes());
            }
            let (tweak, chain_code) = split_digest(&mac.finalize().into_bytes());

            let keys = match &self.private_key {
                Some(private) => {
                    C::tweak_add_private(private, &tweak).map(|key| (Some(key), None))
                }
                None => C::tweak_add_public(&self.public_key(), &tweak)
                    .map(|key| (None, Some(key))),
            };
            let (private_key, public_key) = match keys {
                Some(keys) => keys,
                // Invalid tweak: move on to the next index.
                None => {
                    candidate += 1;
                    continue;
                }
            };

            let stored_index = if hardened {
                candidate + network.hardened_bit
            } else {
                candidate
            };

            return HdNode::assemble(
                depth,
                u32::from_be_bytes(self.fingerprint()),
                stored_index,
                chain_code,
                private_key,
                public_key,
            );
        }

        Err(HdError::DerivationExhausted)
    }
}
