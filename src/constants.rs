// Copyright (c) 2021-2022 Toposware, Inc.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This module defines all constants used in this crate.

/// Private key length in bytes (serialized scalar form)
pub const PRIVATE_KEY_LENGTH: usize = 32;

/// Public key length in bytes (SEC1 compressed point form)
pub const PUBLIC_KEY_LENGTH: usize = 33;

/// Chain code length for deriving keys
pub const CHAIN_CODE_LENGTH: usize = 32;

/// Fingerprint length in bytes
pub const FINGERPRINT_LENGTH: usize = 4;

/// Extended key length in bytes (serialized form):
/// version (4) + depth (1) + parent fingerprint (4) + index (4)
/// + chain code (32) + key data (33)
pub const EXTENDED_KEY_LENGTH: usize = 78;

/// Minimum accepted seed length in bytes (128 bits)
pub const MIN_SEED_LENGTH: usize = 16;

/// Maximum accepted seed length in bytes (512 bits)
pub const MAX_SEED_LENGTH: usize = 64;

/// Offset added to a child index for hardened derivation (2^31)
pub const HARDENED_BIT: u32 = 0x8000_0000;

/// Cap on the child-key tweak retry loop. A single retry occurs with
/// probability about 2^-127, so reaching this cap requires a broken
/// curve engine.
pub(crate) const MAX_TWEAK_ATTEMPTS: usize = 8;

/// Cap on the random-seed retry loop when generating a master node.
pub(crate) const MAX_SEED_ATTEMPTS: usize = 8;
