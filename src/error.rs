// Copyright (c) 2021-2022 Toposware, Inc.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use core::fmt::{Display, Formatter, Result};

/// Custom error type during key derivation operations
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HdError {
    /// Node construction arguments violate a structural invariant
    InvalidNode,
    /// A private or public key fails curve membership
    InvalidKey,
    /// Seed is shorter than 16 bytes or longer than 64 bytes
    InvalidSeedLength,
    /// Base child index carries the hardened bit
    InvalidChildIndex,
    /// Hardened derivation requested on a neutered node
    DeriveHardenedFromNeutered,
    /// A path anchored at the master was applied to a non-root node
    NotMasterNode,
    /// Derivation path does not match the expected grammar
    InvalidPathSyntax,
    /// Serialized extended key is not exactly 78 bytes
    InvalidLength,
    /// Serialized version prefix does not belong to the active network
    InvalidNetwork,
    /// Private key data is not padded with a leading zero byte
    InvalidPrivateKeyPadding,
    /// Base-58 decoding failed or the checksum does not match
    ChecksumMismatch,
    /// Neutering requested on an already neutered node
    AlreadyNeutered,
    /// Private export requested from a neutered node
    IsNeutered,
    /// Child derivation would exceed the maximum depth of 255
    MaxDepthExceeded,
    /// A bounded retry loop reached its attempt cap
    DerivationExhausted,
}

impl Display for HdError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidNode => {
                write!(f, "The node fields violate a structural invariant.")
            }
            Self::InvalidKey => {
                write!(f, "The key is not a valid element of the curve.")
            }
            Self::InvalidSeedLength => {
                write!(f, "The seed must be between 16 and 64 bytes.")
            }
            Self::InvalidChildIndex => {
                write!(f, "The child index must be smaller than the hardened bit.")
            }
            Self::DeriveHardenedFromNeutered => {
                write!(f, "A hardened child cannot be derived without a private key.")
            }
            Self::NotMasterNode => {
                write!(f, "A master-anchored path can only be derived from a root node.")
            }
            Self::InvalidPathSyntax => {
                write!(f, "The derivation path is malformed.")
            }
            Self::InvalidLength => {
                write!(f, "The serialized extended key must be exactly 78 bytes.")
            }
            Self::InvalidNetwork => {
                write!(f, "The version prefix does not match the active network.")
            }
            Self::InvalidPrivateKeyPadding => {
                write!(f, "The private key data must start with a zero padding byte.")
            }
            Self::ChecksumMismatch => {
                write!(f, "The base-58 string is corrupted or its checksum does not match.")
            }
            Self::AlreadyNeutered => {
                write!(f, "The node is already neutered.")
            }
            Self::IsNeutered => {
                write!(f, "The node is neutered and carries no private key.")
            }
            Self::MaxDepthExceeded => {
                write!(f, "The derivation tree cannot grow deeper than 255 levels.")
            }
            Self::DerivationExhausted => {
                write!(f, "The derivation retry loop reached its attempt cap.")
            }
        }
    }
}

impl std::error::Error for HdError {}
