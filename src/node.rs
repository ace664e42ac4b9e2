// Copyright (c) 2021-2022 Toposware, Inc.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This module provides the `HdNode` type, an immutable node of the
//! hierarchical deterministic key tree.

use crate::constants::{
    CHAIN_CODE_LENGTH, FINGERPRINT_LENGTH, PRIVATE_KEY_LENGTH, PUBLIC_KEY_LENGTH,
};
use crate::curve::{Curve, Secp256k1};
use crate::error::HdError;

use core::fmt;
use std::sync::OnceLock;

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// A node of the hierarchical deterministic key tree.
///
/// A node is an immutable value combining derivation metadata (depth,
/// parent fingerprint, child index), a chain code, and at least one
/// side of a key pair. A node without a private key is "neutered": it
/// can derive further normal children but can never regain private
/// material.
///
/// The compressed public key is computed lazily from the private key
/// and cached, so repeated fingerprint or serialization calls pay the
/// point multiplication only once. Nodes are `Send + Sync` and safe to
/// share across threads.
#[derive(Clone)]
pub struct HdNode {
    pub(crate) depth: u8,
    pub(crate) parent_fingerprint: u32,
    pub(crate) index: u32,
    pub(crate) chain_code: [u8; CHAIN_CODE_LENGTH],
    pub(crate) private_key: Option<[u8; PRIVATE_KEY_LENGTH]>,
    pub(crate) public_key: OnceLock<[u8; PUBLIC_KEY_LENGTH]>,
}

impl HdNode {
    /// Builds a node from raw parts, enforcing the structural invariants:
    /// at least one key side present, valid curve elements, and zeroed
    /// fingerprint and index on a root node.
    pub(crate) fn assemble(
        depth: u8,
        parent_fingerprint: u32,
        index: u32,
        chain_code: [u8; CHAIN_CODE_LENGTH],
        private_key: Option<[u8; PRIVATE_KEY_LENGTH]>,
        public_key: Option<[u8; PUBLIC_KEY_LENGTH]>,
    ) -> Result<Self, HdError> {
        if private_key.is_none() && public_key.is_none() {
            return Err(HdError::InvalidNode);
        }
        if depth == 0 && (parent_fingerprint != 0 || index != 0) {
            return Err(HdError::InvalidNode);
        }
        if let Some(key) = &private_key {
            if !Secp256k1::validate_private_key(key) {
                return Err(HdError::InvalidKey);
            }
        }
        if let Some(key) = &public_key {
            if !Secp256k1::validate_public_key(key) {
                return Err(HdError::InvalidKey);
            }
        }

        let cache = OnceLock::new();
        if let Some(key) = public_key {
            let _ = cache.set(key);
        }

        Ok(HdNode {
            depth,
            parent_fingerprint,
            index,
            chain_code,
            private_key,
            public_key: cache,
        })
    }

    /// Returns the depth of this node in the tree (0 for the root).
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Returns the fingerprint of this node's parent (0 for the root).
    pub fn parent_fingerprint(&self) -> u32 {
        self.parent_fingerprint
    }

    /// Returns the child index of this node, with the hardened bit
    /// applied for hardened children (0 for the root).
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Returns a copy of this node's chain code.
    pub fn chain_code(&self) -> [u8; CHAIN_CODE_LENGTH] {
        self.chain_code
    }

    /// Returns a copy of this node's private key, or `None` if the
    /// node is neutered.
    pub fn private_key(&self) -> Option<[u8; PRIVATE_KEY_LENGTH]> {
        self.private_key
    }

    /// Returns a copy of this node's compressed public key, computing
    /// and caching it on first access.
    pub fn public_key(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        *self.public_key.get_or_init(|| {
            let private = self
                .private_key
                .expect("a node always carries at least one key side");
            Secp256k1::derive_public_key(&private)
                .expect("stored private keys are validated on construction")
        })
    }

    /// Returns the fingerprint of this node: the first four bytes of
    /// `RIPEMD160(SHA256(public_key))`.
    ///
    /// Fingerprints are 32-bit identifiers for parent/child linkage
    /// and display purposes. They are not collision-free and must only
    /// be used as an advisory cross-check, never as a unique key.
    pub fn fingerprint(&self) -> [u8; FINGERPRINT_LENGTH] {
        let digest = Ripemd160::digest(Sha256::digest(self.public_key()));

        let mut fingerprint = [0u8; FINGERPRINT_LENGTH];
        fingerprint.copy_from_slice(&digest[..FINGERPRINT_LENGTH]);

        fingerprint
    }

    /// Returns `true` if this node carries no private key.
    pub fn is_neutered(&self) -> bool {
        self.private_key.is_none()
    }

    /// Produces the neutered counterpart of this node: same depth,
    /// parent fingerprint, index and chain code, but only the public
    /// key retained.
    ///
    /// Neutering an already neutered node fails with
    /// [`HdError::AlreadyNeutered`], catching caller logic errors early.
    pub fn neuter(&self) -> Result<Self, HdError> {
        if self.is_neutered() {
            return Err(HdError::AlreadyNeutered);
        }

        HdNode::assemble(
            self.depth,
            self.parent_fingerprint,
            self.index,
            self.chain_code,
            None,
            Some(self.public_key()),
        )
    }
}

impl PartialEq for HdNode {
    fn eq(&self, other: &Self) -> bool {
        self.depth == other.depth
            && self.parent_fingerprint == other.parent_fingerprint
            && self.index == other.index
            && self.chain_code == other.chain_code
            && self.private_key == other.private_key
            && self.public_key() == other.public_key()
    }
}

impl Eq for HdNode {}

// Manual implementation keeping private key bytes out of debug output.
impl fmt::Debug for HdNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HdNode")
            .field("depth", &self.depth)
            .field("parent_fingerprint", &self.parent_fingerprint)
            .field("index", &self.index)
            .field("chain_code", &self.chain_code)
            .field("private_key", &self.private_key.map(|_| "[redacted]"))
            .field("public_key", &self.public_key.get())
            .finish()
    }
}
