// Copyright (c) 2021-2022 Toposware, Inc.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This module provides the elliptic curve engine backing child key
//! derivation: key validation, public key computation and the scalar
//! and point tweak-additions of the CKD algorithm.

use crate::constants::{PRIVATE_KEY_LENGTH, PUBLIC_KEY_LENGTH};

use k256::elliptic_curve::group::Group;
use k256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use k256::elliptic_curve::PrimeField;
use k256::{AffinePoint, EncodedPoint, ProjectivePoint, Scalar};
use subtle::ConstantTimeEq;

/// Scalar and point operations required by the derivation engine.
///
/// Implementations are stateless. All operations work on serialized
/// key material: 32-byte big-endian scalars and 33-byte compressed
/// SEC1 points. The fallible tweak-additions return `None` on the
/// (astronomically rare) invalid tweak outcomes, which callers handle
/// through the derivation retry rule.
pub trait Curve {
    /// Checks that `key` is a nonzero scalar below the curve order.
    fn validate_private_key(key: &[u8; PRIVATE_KEY_LENGTH]) -> bool;

    /// Checks that `key` encodes a point on the curve.
    fn validate_public_key(key: &[u8; PUBLIC_KEY_LENGTH]) -> bool;

    /// Computes the compressed public key of a private key.
    ///
    /// Returns `None` if `key` is not a valid private key.
    fn derive_public_key(key: &[u8; PRIVATE_KEY_LENGTH]) -> Option<[u8; PUBLIC_KEY_LENGTH]>;

    /// Computes `(key + tweak) mod n`.
    ///
    /// Returns `None` if `tweak` is not below the curve order or if
    /// the sum is congruent to zero.
    fn tweak_add_private(
        key: &[u8; PRIVATE_KEY_LENGTH],
        tweak: &[u8; PRIVATE_KEY_LENGTH],
    ) -> Option<[u8; PRIVATE_KEY_LENGTH]>;

    /// Computes `key + tweak * G`.
    ///
    /// Returns `None` if `tweak` is not below the curve order or if
    /// the resulting point is the identity.
    fn tweak_add_public(
        key: &[u8; PUBLIC_KEY_LENGTH],
        tweak: &[u8; PRIVATE_KEY_LENGTH],
    ) -> Option<[u8; PUBLIC_KEY_LENGTH]>;
}

/// The secp256k1 curve engine used by all public derivation operations.
#[derive(Clone, Copy, Debug)]
pub struct Secp256k1;

impl Curve for Secp256k1 {
    fn validate_private_key(key: &[u8; PRIVATE_KEY_LENGTH]) -> bool {
        let zero = [0u8; PRIVATE_KEY_LENGTH];
        let nonzero = !bool::from(key[..].ct_eq(&zero[..]));

        nonzero && scalar_from_bytes(key).is_some()
    }

    fn validate_public_key(key: &[u8; PUBLIC_KEY_LENGTH]) -> bool {
        point_from_bytes(key).is_some()
    }

    fn derive_public_key(key: &[u8; PRIVATE_KEY_LENGTH]) -> Option<[u8; PUBLIC_KEY_LENGTH]> {
        let scalar = scalar_from_bytes(key)?;
        if bool::from(scalar.is_zero()) {
            return None;
        }

        let point = (ProjectivePoint::GENERATOR * scalar).to_affine();

        Some(point_to_bytes(&point))
    }

    fn tweak_add_private(
        key: &[u8; PRIVATE_KEY_LENGTH],
        tweak: &[u8; PRIVATE_KEY_LENGTH],
    ) -> Option<[u8; PRIVATE_KEY_LENGTH]> {
        let key = scalar_from_bytes(key)?;
        let tweak = scalar_from_bytes(tweak)?;

        let child = key + tweak;
        if bool::from(child.is_zero()) {
            return None;
        }

        Some(child.to_bytes().into())
    }

    fn tweak_add_public(
        key: &[u8; PUBLIC_KEY_LENGTH],
        tweak: &[u8; PRIVATE_KEY_LENGTH],
    ) -> Option<[u8; PUBLIC_KEY_LENGTH]> {
        let point = point_from_bytes(key)?;
        let tweak = scalar_from_bytes(tweak)?;

        let child = ProjectivePoint::from(point) + ProjectivePoint::GENERATOR * tweak;
        if bool::from(child.is_identity()) {
            return None;
        }

        Some(point_to_bytes(&child.to_affine()))
    }
}

/// Parses a big-endian scalar, rejecting values at or above the curve order.
fn scalar_from_bytes(bytes: &[u8; PRIVATE_KEY_LENGTH]) -> Option<Scalar> {
    Scalar::from_repr((*bytes).into()).into()
}

/// Parses a compressed SEC1 point.
fn point_from_bytes(bytes: &[u8; PUBLIC_KEY_LENGTH]) -> Option<AffinePoint> {
    let encoded = EncodedPoint::from_bytes(bytes).ok()?;

    Option::from(AffinePoint::from_encoded_point(&encoded))
}

fn point_to_bytes(point: &AffinePoint) -> [u8; PUBLIC_KEY_LENGTH] {
    let encoded = point.to_encoded_point(true);

    let mut bytes = [0u8; PUBLIC_KEY_LENGTH];
    bytes.copy_from_slice(encoded.as_bytes());

    bytes
}
