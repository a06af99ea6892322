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

//! Byte-buffer-in, byte-buffer-out helpers over the group used by BBS04.
//!
//! Scalars are 32 bytes big-endian, G1 points 48 bytes compressed. These are the
//! primitives a foreign-language binding needs next to the scheme itself.

use super::util::bbs04_utils::{hash_to_g1, invert_scalar, random_nonzero_scalar, g1_to_bytes, ByteReader};
use crate::{bbs04::ciphersuites::Bbs04Ciphersuite, errors::Error};
use elliptic_curve::hash2curve::ExpandMsg;

/// Random nonzero scalar.
pub fn scalar_random() -> Result<Vec<u8>, Error> {
    let s = random_nonzero_scalar(&mut rand::thread_rng(), "scalar")?;
    Ok(s.to_be_bytes().to_vec())
}

/// Multiplicative inverse of a scalar modulo the group order.
pub fn scalar_inverse(scalar: &[u8]) -> Result<Vec<u8>, Error> {
    let mut reader = ByteReader::new(scalar);
    let s = reader.read_scalar()?;
    reader.finish()?;
    Ok(invert_scalar(&s, "scalar")?.to_be_bytes().to_vec())
}

pub fn g1_hash_to_point<CS>(msg: &[u8]) -> Result<Vec<u8>, Error>
where
    CS: Bbs04Ciphersuite,
    CS::Expander: for<'a> ExpandMsg<'a>,
{
    Ok(g1_to_bytes(&hash_to_g1::<CS>(msg)).to_vec())
}

/// `point * scalar` in G1.
pub fn g1_mul(point: &[u8], scalar: &[u8]) -> Result<Vec<u8>, Error> {
    let mut reader = ByteReader::new(point);
    let p = reader.read_g1()?;
    reader.finish()?;

    let mut reader = ByteReader::new(scalar);
    let s = reader.read_scalar()?;
    reader.finish()?;

    Ok(g1_to_bytes(&(p * s)).to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{bbs04::ciphersuites::Bls12381Sha256, utils::util::bbs04_utils::{G1_BYTES, SCALAR_BYTES}};

    #[test]
    fn inverse_undoes_multiplication() {
        let p = g1_hash_to_point::<Bls12381Sha256>(b"ecgroup_g1_generator").unwrap();
        assert_eq!(p.len(), G1_BYTES);

        let s = scalar_random().unwrap();
        assert_eq!(s.len(), SCALAR_BYTES);
        let s_inv = scalar_inverse(&s).unwrap();

        let q = g1_mul(&p, &s).unwrap();
        assert_ne!(p, q);
        assert_eq!(g1_mul(&q, &s_inv).unwrap(), p);
    }

    #[test]
    fn hash_to_point_is_deterministic() {
        let a = g1_hash_to_point::<Bls12381Sha256>(b"abc").unwrap();
        let b = g1_hash_to_point::<Bls12381Sha256>(b"abc").unwrap();
        let c = g1_hash_to_point::<Bls12381Sha256>(b"abd").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn zero_scalar_is_degenerate() {
        let zero = [0u8; SCALAR_BYTES];
        assert!(matches!(scalar_inverse(&zero), Err(Error::DegenerateValue(_))));
    }

    #[test]
    fn short_inputs_are_truncated() {
        let p = g1_hash_to_point::<Bls12381Sha256>(b"abc").unwrap();
        assert!(matches!(g1_mul(&p[..G1_BYTES - 1], &[1u8; SCALAR_BYTES]), Err(Error::TruncatedInput { .. })));
        assert!(matches!(scalar_inverse(&[1u8; 3]), Err(Error::TruncatedInput { .. })));
    }
}
