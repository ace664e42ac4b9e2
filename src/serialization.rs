// Copyright (c) 2021-2022 Toposware, Inc.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This module provides the canonical 78-byte extended key layout and
//! its checksummed base-58 text encoding.
//!
//! Layout, big-endian integers:
//! `version (4) || depth (1) || parent fingerprint (4) || index (4)
//! || chain code (32) || key data (33)`, where the key data is
//! `0x00 || private key` for a private export and the compressed
//! public key for a public export.

use crate::constants::{EXTENDED_KEY_LENGTH, PRIVATE_KEY_LENGTH, PUBLIC_KEY_LENGTH};
use crate::error::HdError;
use crate::network::Network;
use crate::node::HdNode;

impl HdNode {
    /// Writes the common metadata prefix: version, depth, parent
    /// fingerprint, index and chain code.
    fn serialize_prefix(&self, version: u32) -> [u8; EXTENDED_KEY_LENGTH] {
        let mut bytes = [0u8; EXTENDED_KEY_LENGTH];
        bytes[0..4].copy_from_slice(&version.to_be_bytes());
        bytes[4] = self.depth;
        bytes[5..9].copy_from_slice(&self.parent_fingerprint.to_be_bytes());
        bytes[9..13].copy_from_slice(&self.index.to_be_bytes());
        bytes[13..45].copy_from_slice(&self.chain_code);

        bytes
    }

    /// Serializes this node as a private extended key.
    ///
    /// Fails with [`HdError::IsNeutered`] if the node carries no
    /// private key.
    pub fn to_bytes_private(
        &self,
        network: &Network,
    ) -> Result<[u8; EXTENDED_KEY_LENGTH], HdError> {
        let private = self.private_key().ok_or(HdError::IsNeutered)?;

        let mut bytes = self.serialize_prefix(network.private_version);
        bytes[45] = 0;
        bytes[46..].copy_from_slice(&private);

        Ok(bytes)
    }

    /// Serializes this node as a public extended key.
    pub fn to_bytes_public(&self, network: &Network) -> [u8; EXTENDED_KEY_LENGTH] {
        let mut bytes = self.serialize_prefix(network.public_version);
        bytes[45..].copy_from_slice(&self.public_key());

        bytes
    }

    /// Encodes this node as a checksummed base-58 private extended key
    /// (`xprv...` on the Bitcoin main network).
    pub fn encode_private(&self, network: &Network) -> Result<String, HdError> {
        let bytes = self.to_bytes_private(network)?;

        Ok(bs58::encode(bytes).with_check().into_string())
    }

    /// Encodes this node as a checksummed base-58 public extended key
    /// (`xpub...` on the Bitcoin main network).
    pub fn encode_public(&self, network: &Network) -> String {
        bs58::encode(self.to_bytes_public(network)).with_check().into_string()
    }

    /// Reconstructs a node from a serialized extended key.
    ///
    /// The version prefix selects the key side and must match the
    /// active network; for a private key the padding byte must be
    /// zero. All fields are taken verbatim, no re-derivation occurs.
    pub fn from_bytes(bytes: &[u8], network: &Network) -> Result<Self, HdError> {
        if bytes.len() != EXTENDED_KEY_LENGTH {
            return Err(HdError::InvalidLength);
        }

        let version = u32::from_be_bytes(bytes[0..4].try_into().expect("slice is 4 bytes"));
        let depth = bytes[4];
        let parent_fingerprint =
            u32::from_be_bytes(bytes[5..9].try_into().expect("slice is 4 bytes"));
        let index = u32::from_be_bytes(bytes[9..13].try_into().expect("slice is 4 bytes"));
        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(&bytes[13..45]);

        if version == network.private_version {
            if bytes[45] != 0 {
                return Err(HdError::InvalidPrivateKeyPadding);
            }
            let mut private = [0u8; PRIVATE_KEY_LENGTH];
            private.copy_from_slice(&bytes[46..]);

            HdNode::assemble(depth, parent_fingerprint, index, chain_code, Some(private), None)
        } else if version == network.public_version {
            let mut public = [0u8; PUBLIC_KEY_LENGTH];
            public.copy_from_slice(&bytes[45..]);

            HdNode::assemble(depth, parent_fingerprint, index, chain_code, None, Some(public))
        } else {
            Err(HdError::InvalidNetwork)
        }
    }

    /// Decodes a checksummed base-58 extended key string.
    ///
    /// Corruption anywhere in the string surfaces as
    /// [`HdError::ChecksumMismatch`] before the payload is inspected.
    pub fn decode(string: &str, network: &Network) -> Result<Self, HdError> {
        let bytes = bs58::decode(string)
            .with_check(None)
            .into_vec()
            .map_err(|_| HdError::ChecksumMismatch)?;

        Self::from_bytes(&bytes, network)
    }
}
