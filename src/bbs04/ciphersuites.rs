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

use digest::HashMarker;
use elliptic_curve::hash2curve::{ExpandMsg, ExpandMsgXmd, ExpandMsgXof};
use sha2::Sha256;
use sha3::Shake256;

/// Hash configuration of a BBS04 deployment.
///
/// The suite only affects the domain-separated hashes (the Fiat-Shamir challenge and
/// hash-to-G1); the group arithmetic is always BLS12-381.
pub trait Bbs04Ciphersuite {
    const ID: &'static [u8];
    const H2S: &'static [u8] = b"H2S_";
    const H2G1: &'static [u8] = b"H2G1_";
    /// Bytes of `expand_message` output reduced into one scalar.
    const EXPAND_LEN: usize = 48;
    type HashAlg: HashMarker;
    type Expander: ExpandMsg<'static>;

    fn h2s_dst() -> Vec<u8> {
        [Self::ID, Self::H2S].concat()
    }

    fn h2g1_dst() -> Vec<u8> {
        [Self::ID, Self::H2G1].concat()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bls12381Sha256 {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bls12381Shake256 {}

impl Bbs04Ciphersuite for Bls12381Sha256 {
    const ID: &'static [u8] = b"BBS04_BLS12381G1_XMD:SHA-256_SSWU_RO_";
    type HashAlg = Sha256;
    type Expander = ExpandMsgXmd<Self::HashAlg>;
}

impl Bbs04Ciphersuite for Bls12381Shake256 {
    const ID: &'static [u8] = b"BBS04_BLS12381G1_XOF:SHAKE-256_SSWU_RO_";
    type HashAlg = Shake256;
    type Expander = ExpandMsgXof<Self::HashAlg>;
}
