// Copyright 2025 Fondazione LINKS

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//     http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use bls12_381_plus::{multi_miller_loop, G1Projective, G2Prepared, Gt, Scalar};
use elliptic_curve::{group::Curve, hash2curve::ExpandMsg};
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use crate::{
    errors::Error,
    utils::util::bbs04_utils::{calculate_random_scalars, decode_hex, g1_to_bytes, ByteReader, G1_BYTES, SCALAR_BYTES},
};
use super::{
    challenge::{calculate_challenge, Commitments, Encryption},
    ciphersuites::Bbs04Ciphersuite,
    keys::{GroupPublicKey, UserSecretKey},
};

/// A BBS04 group signature.
///
/// `(T1, T2, T3)` encrypts the signer's credential `A` for the opener; the remaining
/// fields are the Fiat-Shamir proof that the encrypted value is a valid credential.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct GroupSignature {
    pub t1: G1Projective,
    pub t2: G1Projective,
    pub t3: G1Projective,
    pub c: Scalar,
    pub s_alpha: Scalar,
    pub s_beta: Scalar,
    pub s_x: Scalar,
    pub s_delta_1: Scalar,
    pub s_delta_2: Scalar,
}

impl GroupSignature {
    pub const BYTES: usize = 3 * G1_BYTES + 6 * SCALAR_BYTES;

    /// T1 || T2 || T3 || c || s_alpha || s_beta || s_x || s_delta_1 || s_delta_2
    pub fn to_bytes(&self) -> [u8; Self::BYTES] {
        let mut bytes = [0u8; Self::BYTES];
        let mut offset = 0;
        for p in [&self.t1, &self.t2, &self.t3] {
            bytes[offset..offset + G1_BYTES].copy_from_slice(&g1_to_bytes(p));
            offset += G1_BYTES;
        }
        for s in [&self.c, &self.s_alpha, &self.s_beta, &self.s_x, &self.s_delta_1, &self.s_delta_2] {
            bytes[offset..offset + SCALAR_BYTES].copy_from_slice(&s.to_be_bytes());
            offset += SCALAR_BYTES;
        }
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let mut reader = ByteReader::new(bytes);
        let t1 = reader.read_g1()?;
        let t2 = reader.read_g1()?;
        let t3 = reader.read_g1()?;
        let c = reader.read_scalar()?;
        let s_alpha = reader.read_scalar()?;
        let s_beta = reader.read_scalar()?;
        let s_x = reader.read_scalar()?;
        let s_delta_1 = reader.read_scalar()?;
        let s_delta_2 = reader.read_scalar()?;
        reader.finish()?;

        Ok(Self { t1, t2, t3, c, s_alpha, s_beta, s_x, s_delta_1, s_delta_2 })
    }

    pub fn encode(&self) -> String {
        hex::encode(self.to_bytes())
    }

    pub fn from_hex(s: &str) -> Result<Self, Error> {
        Self::from_bytes(&decode_hex(s)?)
    }

    /// sigma = Sign(gpk, usk, message)
    ///
    /// # Description
    /// Encrypts the credential `A` under `(u, v, h)` and proves knowledge of `(A, x)`
    /// satisfying the membership equation, bound to `message` through the challenge.
    /// Every call draws fresh randomness, so two signatures of the same message differ.
    ///
    /// # Inputs:
    /// * `gpk` (REQUIRED), the group public key.
    /// * `usk` (REQUIRED), the signer's credential.
    /// * `message` (REQUIRED), the octet string to sign.
    ///
    pub fn sign<CS>(gpk: &GroupPublicKey, usk: &UserSecretKey, message: &[u8]) -> Result<Self, Error>
    where
        CS: Bbs04Ciphersuite,
        CS::Expander: for<'a> ExpandMsg<'a>,
    {
        Self::sign_with_rng::<CS, _>(gpk, usk, message, &mut rand::thread_rng())
    }

    pub fn sign_with_rng<CS, R>(gpk: &GroupPublicKey, usk: &UserSecretKey, message: &[u8], rng: &mut R) -> Result<Self, Error>
    where
        CS: Bbs04Ciphersuite,
        CS::Expander: for<'a> ExpandMsg<'a>,
        R: RngCore + CryptoRng,
    {
        let random_scalars = calculate_random_scalars(rng, 7)?;
        core_sign::<CS>(gpk, usk, message, &random_scalars)
    }

    /// Verify(gpk, message, sigma)
    ///
    /// # Description
    /// Recomputes the commitments from the public transcript and accepts iff the
    /// recomputed challenge equals `c`. A rejected signature is `false`, never an error.
    pub fn verify<CS>(&self, gpk: &GroupPublicKey, message: &[u8]) -> bool
    where
        CS: Bbs04Ciphersuite,
        CS::Expander: for<'a> ExpandMsg<'a>,
    {
        match core_verify::<CS>(gpk, message, self) {
            Ok(valid) => valid,
            Err(e) => {
                log::warn!("signature verification aborted: {e}");
                false
            }
        }
    }
}

/// Verifies each `(message, signature)` pair independently against the same group.
pub fn verify_batch<CS>(gpk: &GroupPublicKey, items: &[(&[u8], &GroupSignature)]) -> Vec<bool>
where
    CS: Bbs04Ciphersuite,
    CS::Expander: for<'a> ExpandMsg<'a>,
{
    items.iter().map(|(message, sigma)| sigma.verify::<CS>(gpk, message)).collect()
}

pub(crate) fn core_sign<CS>(gpk: &GroupPublicKey, usk: &UserSecretKey, message: &[u8], random_scalars: &[Scalar]) -> Result<GroupSignature, Error>
where
    CS: Bbs04Ciphersuite,
    CS::Expander: for<'a> ExpandMsg<'a>,
{
    if random_scalars.len() != 7 {
        return Err(Error::CollaboratorFailure("expected 7 random scalars".to_owned()));
    }

    let alpha = random_scalars[0];
    let beta = random_scalars[1];
    let r_alpha = random_scalars[2];
    let r_beta = random_scalars[3];
    let r_x = random_scalars[4];
    let r_delta_1 = random_scalars[5];
    let r_delta_2 = random_scalars[6];

    // T1 = u * alpha, T2 = v * beta, T3 = A + h * (alpha + beta)
    let t1 = gpk.u * alpha;
    let t2 = gpk.v * beta;
    let t3 = usk.a + gpk.h * (alpha + beta);

    let r1 = gpk.u * r_alpha;
    let r2 = gpk.v * r_beta;

    // R3 = e(T3, g2)^r_x * e(h, w)^-(r_alpha + r_beta) * e(h, g2)^-(r_delta_1 + r_delta_2)
    //    = e(T3 * r_x - h * (r_delta_1 + r_delta_2), g2) * e(-h * (r_alpha + r_beta), w)
    let arg1 = t3 * r_x - gpk.h * (r_delta_1 + r_delta_2);
    let arg2 = gpk.h * (-(r_alpha + r_beta));
    let r3 = two_pairings(&arg1, gpk, &arg2);

    let r4 = t1 * r_x + gpk.u * (-r_delta_1);
    let r5 = t2 * r_x + gpk.v * (-r_delta_2);

    let enc = Encryption { t1: &t1, t2: &t2, t3: &t3 };
    let c = calculate_challenge::<CS>(message, &enc, &Commitments { r1, r2, r3, r4, r5 })?;

    let x = usk.x;
    Ok(GroupSignature {
        t1,
        t2,
        t3,
        c,
        s_alpha: r_alpha + c * alpha,
        s_beta: r_beta + c * beta,
        s_x: r_x + c * x,
        s_delta_1: r_delta_1 + c * (x * alpha),
        s_delta_2: r_delta_2 + c * (x * beta),
    })
}

pub(crate) fn core_verify<CS>(gpk: &GroupPublicKey, message: &[u8], sigma: &GroupSignature) -> Result<bool, Error>
where
    CS: Bbs04Ciphersuite,
    CS::Expander: for<'a> ExpandMsg<'a>,
{
    let c = sigma.c;

    // R1' = u * s_alpha - T1 * c
    let r1 = gpk.u * sigma.s_alpha - sigma.t1 * c;
    // R2' = v * s_beta - T2 * c
    let r2 = gpk.v * sigma.s_beta - sigma.t2 * c;
    // R4' = T1 * s_x - u * s_delta_1
    let r4 = sigma.t1 * sigma.s_x - gpk.u * sigma.s_delta_1;
    // R5' = T2 * s_x - v * s_delta_2
    let r5 = sigma.t2 * sigma.s_x - gpk.v * sigma.s_delta_2;

    // R3' = e(T3,g2)^s_x * e(h,w)^-(s_alpha+s_beta) * e(h,g2)^-(s_delta_1+s_delta_2) * [e(T3,w) / e(g1,g2)]^c
    //     = e(T3 * s_x - h * (s_delta_1 + s_delta_2) - g1 * c, g2) * e(T3 * c - h * (s_alpha + s_beta), w)
    let arg1 = sigma.t3 * sigma.s_x - gpk.h * (sigma.s_delta_1 + sigma.s_delta_2) - gpk.g1 * c;
    let arg2 = sigma.t3 * c - gpk.h * (sigma.s_alpha + sigma.s_beta);
    let r3 = two_pairings(&arg1, gpk, &arg2);

    let enc = Encryption { t1: &sigma.t1, t2: &sigma.t2, t3: &sigma.t3 };
    let c_prime = calculate_challenge::<CS>(message, &enc, &Commitments { r1, r2, r3, r4, r5 })?;

    let valid = c_prime == c;
    log::trace!("recomputed challenge matches: {valid}");
    Ok(valid)
}

/// e(arg1, g2) * e(arg2, w) with a single final exponentiation.
fn two_pairings(arg1: &G1Projective, gpk: &GroupPublicKey, arg2: &G1Projective) -> Gt {
    let term1 = (&arg1.to_affine(), &G2Prepared::from(gpk.g2.to_affine()));
    let term2 = (&arg2.to_affine(), &G2Prepared::from(gpk.w.to_affine()));

    multi_miller_loop(&[term1, term2]).final_exponentiation()
}
