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

pub mod bbs04_utils {
    use crate::{bbs04::ciphersuites::Bbs04Ciphersuite, errors::Error};
    use bls12_381_plus::{G1Affine, G1Projective, G2Affine, G2Projective, Gt, Scalar};
    use elliptic_curve::{
        group::Curve,
        hash2curve::{ExpandMsg, Expander},
    };
    use ff::Field;
    use rand::{CryptoRng, RngCore};

    pub const SCALAR_BYTES: usize = Scalar::BYTES;
    pub const G1_BYTES: usize = G1Affine::COMPRESSED_BYTES;
    pub const G2_BYTES: usize = G2Affine::COMPRESSED_BYTES;
    /// Width of a target group element inside the challenge transcript.
    pub const GT_BYTES: usize = Gt::BYTES;

    /// https://identity.foundation/bbs-signature/draft-irtf-cfrg-bbs-signatures.html#name-hash-to-scalar
    ///
    /// # Description
    /// Hashes an arbitrary octet string to a scalar: `expand_message(msg, dst, 48)`
    /// reduced modulo the group order.
    ///
    /// # Inputs:
    /// * `msg_octets` (REQUIRED), the octet string to hash.
    /// * `dst` (REQUIRED), the domain separation tag.
    ///
    pub fn hash_to_scalar<CS>(msg_octets: &[u8], dst: &[u8]) -> Result<Scalar, Error>
    where
        CS: Bbs04Ciphersuite,
        CS::Expander: for<'a> ExpandMsg<'a>,
    {
        let mut uniform_bytes = vec![0u8; CS::EXPAND_LEN];
        CS::Expander::expand_message(&[msg_octets], &[dst], CS::EXPAND_LEN)
            .map_err(|_| Error::CollaboratorFailure("expand_message failed".to_owned()))?
            .fill_bytes(&mut uniform_bytes);

        let okm: &[u8; 48] = uniform_bytes
            .as_slice()
            .try_into()
            .map_err(|_| Error::CollaboratorFailure("EXPAND_LEN must be 48".to_owned()))?;

        Ok(Scalar::from_okm(okm))
    }

    /// Hash an arbitrary octet string to a point of G1 under the suite's `H2G1_` tag.
    pub fn hash_to_g1<CS>(msg_octets: &[u8]) -> G1Projective
    where
        CS: Bbs04Ciphersuite,
        CS::Expander: for<'a> ExpandMsg<'a>,
    {
        G1Projective::hash::<CS::Expander>(msg_octets, &CS::h2g1_dst())
    }

    /// Uniform scalar from 48 bytes of the given rng.
    pub fn random_scalar<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Scalar, Error> {
        let mut buf = [0u8; 48];
        rng.try_fill_bytes(&mut buf)
            .map_err(|e| Error::CollaboratorFailure(format!("random source: {e}")))?;
        Ok(Scalar::from_okm(&buf))
    }

    /// Like [`random_scalar`] but a zero draw is reported instead of returned.
    pub fn random_nonzero_scalar<R: RngCore + CryptoRng>(rng: &mut R, what: &str) -> Result<Scalar, Error> {
        let s = random_scalar(rng)?;
        if bool::from(s.is_zero()) {
            return Err(Error::DegenerateValue(format!("{what} == 0")));
        }
        Ok(s)
    }

    pub fn calculate_random_scalars<R: RngCore + CryptoRng>(rng: &mut R, count: usize) -> Result<Vec<Scalar>, Error> {
        (0..count).map(|_| random_scalar(rng)).collect()
    }

    /// `BP1 * r` for a fresh nonzero r, never the identity.
    pub fn random_g1<R: RngCore + CryptoRng>(rng: &mut R, what: &str) -> Result<G1Projective, Error> {
        Ok(G1Projective::GENERATOR * random_nonzero_scalar(rng, what)?)
    }

    /// `BP2 * r` for a fresh nonzero r, never the identity.
    pub fn random_g2<R: RngCore + CryptoRng>(rng: &mut R, what: &str) -> Result<G2Projective, Error> {
        Ok(G2Projective::GENERATOR * random_nonzero_scalar(rng, what)?)
    }

    pub fn invert_scalar(s: &Scalar, what: &str) -> Result<Scalar, Error> {
        Option::<Scalar>::from(s.invert()).ok_or_else(|| Error::DegenerateValue(format!("{what} is not invertible")))
    }

    pub fn g1_to_bytes(p: &G1Projective) -> [u8; G1_BYTES] {
        p.to_affine().to_compressed()
    }

    pub fn g2_to_bytes(p: &G2Projective) -> [u8; G2_BYTES] {
        p.to_affine().to_compressed()
    }

    pub fn decode_hex(s: &str) -> Result<Vec<u8>, Error> {
        hex::decode(s).map_err(|e| Error::MalformedEncoding(format!("invalid hex: {e}")))
    }

    /// Cursor over a fixed-width encoding. Every read is bounds-checked before slicing.
    pub(crate) struct ByteReader<'a> {
        bytes: &'a [u8],
        offset: usize,
    }

    impl<'a> ByteReader<'a> {
        pub(crate) fn new(bytes: &'a [u8]) -> Self {
            Self { bytes, offset: 0 }
        }

        fn take<const N: usize>(&mut self) -> Result<[u8; N], Error> {
            let remaining = self.bytes.len() - self.offset;
            if remaining < N {
                return Err(Error::TruncatedInput { needed: N, remaining });
            }
            let mut out = [0u8; N];
            out.copy_from_slice(&self.bytes[self.offset..self.offset + N]);
            self.offset += N;
            Ok(out)
        }

        pub(crate) fn read_scalar(&mut self) -> Result<Scalar, Error> {
            let bytes = self.take::<SCALAR_BYTES>()?;
            Option::<Scalar>::from(Scalar::from_be_bytes(&bytes))
                .ok_or_else(|| Error::MalformedEncoding("scalar not in canonical form".to_owned()))
        }

        pub(crate) fn read_g1(&mut self) -> Result<G1Projective, Error> {
            let bytes = self.take::<G1_BYTES>()?;
            Option::<G1Affine>::from(G1Affine::from_compressed(&bytes))
                .map(G1Projective::from)
                .ok_or_else(|| Error::MalformedEncoding("invalid G1 point".to_owned()))
        }

        pub(crate) fn read_g2(&mut self) -> Result<G2Projective, Error> {
            let bytes = self.take::<G2_BYTES>()?;
            Option::<G2Affine>::from(G2Affine::from_compressed(&bytes))
                .map(G2Projective::from)
                .ok_or_else(|| Error::MalformedEncoding("invalid G2 point".to_owned()))
        }

        /// Fails if bytes are left over after the last field.
        pub(crate) fn finish(self) -> Result<(), Error> {
            let trailing = self.bytes.len() - self.offset;
            if trailing != 0 {
                return Err(Error::MalformedEncoding(format!("{trailing} trailing bytes")));
            }
            Ok(())
        }
    }

}
