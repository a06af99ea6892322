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

use bls12_381_plus::{G1Projective, Gt, Scalar};
use elliptic_curve::hash2curve::ExpandMsg;
use crate::{
    errors::Error,
    utils::util::bbs04_utils::{g1_to_bytes, hash_to_scalar, G1_BYTES, GT_BYTES},
};
use super::ciphersuites::Bbs04Ciphersuite;

/// Ordered-append Fiat-Shamir transcript.
///
/// Every element is appended with its fixed-width encoding and no length prefix,
/// so the field order is part of the wire format.
#[derive(Clone, Debug)]
pub struct Transcript {
    bytes: Vec<u8>,
}

impl Transcript {
    pub fn new(message: &[u8]) -> Self {
        let mut bytes = Vec::with_capacity(message.len() + 7 * G1_BYTES + GT_BYTES);
        bytes.extend_from_slice(message);
        Self { bytes }
    }

    pub fn append_g1(&mut self, p: &G1Projective) -> &mut Self {
        self.bytes.extend_from_slice(&g1_to_bytes(p));
        self
    }

    pub fn append_gt(&mut self, e: &Gt) -> &mut Self {
        self.bytes.extend_from_slice(&e.to_bytes());
        self
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Hash the transcript to a scalar under the suite's `H2S_` tag.
    pub fn challenge<CS>(&self) -> Result<Scalar, Error>
    where
        CS: Bbs04Ciphersuite,
        CS::Expander: for<'a> ExpandMsg<'a>,
    {
        hash_to_scalar::<CS>(&self.bytes, &CS::h2s_dst())
    }
}

/// Public part of the transcript: the ElGamal-style encryption of `A`.
pub(crate) struct Encryption<'a> {
    pub(crate) t1: &'a G1Projective,
    pub(crate) t2: &'a G1Projective,
    pub(crate) t3: &'a G1Projective,
}

/// Commitments of the sigma protocol, computed by the signer or recomputed by the verifier.
pub(crate) struct Commitments {
    pub(crate) r1: G1Projective,
    pub(crate) r2: G1Projective,
    pub(crate) r3: Gt,
    pub(crate) r4: G1Projective,
    pub(crate) r5: G1Projective,
}

/// c = H(message || T1 || T2 || T3 || R1 || R2 || R3 || R4 || R5)
///
/// Shared by sign and verify so that both sides hash the same fields in the same order.
pub(crate) fn calculate_challenge<CS>(message: &[u8], enc: &Encryption<'_>, r: &Commitments) -> Result<Scalar, Error>
where
    CS: Bbs04Ciphersuite,
    CS::Expander: for<'a> ExpandMsg<'a>,
{
    Transcript::new(message)
        .append_g1(enc.t1)
        .append_g1(enc.t2)
        .append_g1(enc.t3)
        .append_g1(&r.r1)
        .append_g1(&r.r2)
        .append_gt(&r.r3)
        .append_g1(&r.r4)
        .append_g1(&r.r5)
        .challenge::<CS>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bbs04::ciphersuites::{Bls12381Sha256, Bls12381Shake256};
    use group::Group;

    #[test]
    fn transcript_layout() {
        let p = G1Projective::GENERATOR;
        let mut t = Transcript::new(b"msg");
        t.append_g1(&p).append_gt(&Gt::generator());
        assert_eq!(t.as_bytes().len(), 3 + G1_BYTES + GT_BYTES);
        assert_eq!(&t.as_bytes()[..3], b"msg");
        assert_eq!(&t.as_bytes()[3..3 + G1_BYTES], &g1_to_bytes(&p));
    }

    #[test]
    fn order_matters() {
        let p = G1Projective::GENERATOR;
        let q = p.double();
        let c1 = Transcript::new(b"m").append_g1(&p).append_g1(&q).challenge::<Bls12381Sha256>().unwrap();
        let c2 = Transcript::new(b"m").append_g1(&q).append_g1(&p).challenge::<Bls12381Sha256>().unwrap();
        assert_ne!(c1, c2);
    }

    #[test]
    fn suites_are_domain_separated() {
        let t = Transcript::new(b"sample msg");
        assert_ne!(t.challenge::<Bls12381Sha256>().unwrap(), t.challenge::<Bls12381Shake256>().unwrap());
    }
}
