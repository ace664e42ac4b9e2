// Copyright (c) 2021-2022 Toposware, Inc.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This module provides textual derivation path parsing, kept fully
//! separate from the cryptographic derivation itself: a malformed path
//! fails before any key work happens.

use crate::error::HdError;
use crate::network::Network;
use crate::node::HdNode;

use core::str::FromStr;

/// A single child derivation step.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DerivationStep {
    /// Normal derivation with the given base index
    Normal(u32),
    /// Hardened derivation with the given base index
    Hardened(u32),
}

/// A parsed derivation path.
///
/// The grammar is an optional leading `m` segment followed by
/// `/`-separated base-10 indices, each with an optional trailing `'`
/// marking a hardened step, e.g. `m/44'/0'/0'/0/0` or `0'/1`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DerivationPath {
    from_master: bool,
    steps: Vec<DerivationStep>,
}

impl DerivationPath {
    /// Returns `true` if the path is anchored at the master node.
    pub fn from_master(&self) -> bool {
        self.from_master
    }

    /// Returns the ordered derivation steps of this path.
    pub fn steps(&self) -> &[DerivationStep] {
        &self.steps
    }
}

impl FromStr for DerivationPath {
    type Err = HdError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let mut segments = path.split('/').peekable();

        let from_master = segments.peek() == Some(&"m");
        if from_master {
            segments.next();
        }

        let mut steps = Vec::new();
        for segment in segments {
            let (digits, hardened) = match segment.strip_suffix('\'') {
                Some(digits) => (digits, true),
                None => (segment, false),
            };

            // `u32::from_str` alone would accept a leading `+`.
            if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
                return Err(HdError::InvalidPathSyntax);
            }
            let index = digits.parse().map_err(|_| HdError::InvalidPathSyntax)?;

            steps.push(if hardened {
                DerivationStep::Hardened(index)
            } else {
                DerivationStep::Normal(index)
            });
        }

        Ok(DerivationPath { from_master, steps })
    }
}

impl HdNode {
    /// Parses `path` and folds child derivation over its steps,
    /// returning the final node.
    ///
    /// A path anchored with a leading `m` is only valid on a true root
    /// (parent fingerprint zero) and fails with
    /// [`HdError::NotMasterNode`] elsewhere; a relative path such as
    /// `0'/1` can be applied to any node. The path `"m"` returns the
    /// node itself.
    pub fn derive_path(&self, path: &str, network: &Network) -> Result<Self, HdError> {
        self.derive_steps(&path.parse()?, network)
    }

    /// Folds child derivation over an already parsed path.
    pub fn derive_steps(
        &self,
        path: &DerivationPath,
        network: &Network,
    ) -> Result<Self, HdError> {
        if path.from_master() && self.parent_fingerprint != 0 {
            return Err(HdError::NotMasterNode);
        }

        let mut node = self.clone();
        for step in path.steps() {
            node = match *step {
                DerivationStep::Normal(index) => node.derive_child(index, false, network)?,
                DerivationStep::Hardened(index) => node.derive_child(index, true, network)?,
            };
        }

        Ok(node)
    }
}
