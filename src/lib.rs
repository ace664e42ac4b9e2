// Copyright (c) 2021-2022 Toposware, Inc.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This crate provides an implementation of BIP32-style hierarchical
//! deterministic key derivation over the secp256k1 curve: an unbounded
//! tree of key pairs grown deterministically from a single seed.

//! # Usage
//!
//! To generate the master node of a new tree from a seed, pass the
//! seed together with the network parameters (the parameters are an
//! explicit value on every call, never global state):
//!
//! ```rust
//! use hdkd::{HdNode, BITCOIN};
//!
//! let seed = [7u8; 32];
//! let master = HdNode::from_seed(&seed, &BITCOIN).unwrap();
//! assert_eq!(master.depth(), 0);
//! ```
//!
//! A fresh tree can also be grown from a random seed, with the source
//! of randomness provided by the caller:
//!
//! ```rust
//! use hdkd::{HdNode, BITCOIN};
//! use rand_core::OsRng;
//!
//! let master = HdNode::from_random_seed(OsRng, &BITCOIN).unwrap();
//! ```
//!
//! Children are derived one step at a time or through a textual path.
//! Hardened steps (marked `'`) mix the parent's private key into the
//! derivation and cannot be computed from public material:
//!
//! ```rust
//! use hdkd::{HdNode, BITCOIN};
//!
//! let master = HdNode::from_seed(&[7u8; 32], &BITCOIN).unwrap();
//!
//! let child = master.derive_child(0, true, &BITCOIN).unwrap();
//! let leaf = master.derive_path("m/44'/0'/0'/0/0", &BITCOIN).unwrap();
//! assert_eq!(leaf.depth(), 5);
//! ```
//!
//! Neutering strips the private key, leaving a node that can still
//! derive normal children and serialize publicly:
//!
//! ```rust
//! use hdkd::{HdError, HdNode, BITCOIN};
//!
//! let master = HdNode::from_seed(&[7u8; 32], &BITCOIN).unwrap();
//! let watch_only = master.neuter().unwrap();
//!
//! assert!(watch_only.derive_child(1, false, &BITCOIN).is_ok());
//! assert_eq!(
//!     watch_only.derive_child(1, true, &BITCOIN),
//!     Err(HdError::DeriveHardenedFromNeutered)
//! );
//! ```
//!
//! Nodes serialize to the interoperable 78-byte extended key layout,
//! exchanged as checksummed base-58 text:
//!
//! ```rust
//! use hdkd::{HdNode, BITCOIN};
//!
//! let master = HdNode::from_seed(&[7u8; 32], &BITCOIN).unwrap();
//!
//! let xprv = master.encode_private(&BITCOIN).unwrap();
//! assert_eq!(HdNode::decode(&xprv, &BITCOIN).unwrap(), master);
//!
//! let xpub = master.encode_public(&BITCOIN);
//! assert!(xpub.starts_with("xpub"));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

mod constants;

mod error;

/// The elliptic curve engine module.
mod curve;

/// The network parameters module.
mod network;

/// The HD node module.
mod node;

/// The key derivation module.
mod derivation;

/// The derivation path module.
mod path;

/// The extended key serialization module.
mod serialization;

pub use constants::{
    CHAIN_CODE_LENGTH, EXTENDED_KEY_LENGTH, FINGERPRINT_LENGTH, HARDENED_BIT, MAX_SEED_LENGTH,
    MIN_SEED_LENGTH, PRIVATE_KEY_LENGTH, PUBLIC_KEY_LENGTH,
};

pub use curve::{Curve, Secp256k1};

pub use error::HdError;

pub use network::{Network, BITCOIN, TESTNET};

pub use node::HdNode;

pub use path::{DerivationPath, DerivationStep};
