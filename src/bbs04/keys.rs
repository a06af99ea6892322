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

use bls12_381_plus::{G1Projective, G2Projective, Scalar};
use serde::{Deserialize, Serialize};
use crate::{
    errors::Error,
    utils::util::bbs04_utils::{decode_hex, g1_to_bytes, g2_to_bytes, ByteReader, G1_BYTES, G2_BYTES, SCALAR_BYTES},
};

/// Public parameters shared by every member, verifier and the opener.
///
/// `u = h * xi1^-1`, `v = h * xi2^-1` and `w = g2 * gamma` for the trapdoors produced
/// together with it.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct GroupPublicKey {
    pub g1: G1Projective,
    pub g2: G2Projective,
    pub h: G1Projective,
    pub u: G1Projective,
    pub v: G1Projective,
    pub w: G2Projective,
}

impl GroupPublicKey {
    pub const BYTES: usize = 4 * G1_BYTES + 2 * G2_BYTES;

    /// g1 || h || u || v || g2 || w
    pub fn to_bytes(&self) -> [u8; Self::BYTES] {
        let mut bytes = [0u8; Self::BYTES];
        let mut offset = 0;
        for p in [&self.g1, &self.h, &self.u, &self.v] {
            bytes[offset..offset + G1_BYTES].copy_from_slice(&g1_to_bytes(p));
            offset += G1_BYTES;
        }
        for p in [&self.g2, &self.w] {
            bytes[offset..offset + G2_BYTES].copy_from_slice(&g2_to_bytes(p));
            offset += G2_BYTES;
        }
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let mut reader = ByteReader::new(bytes);
        let g1 = reader.read_g1()?;
        let h = reader.read_g1()?;
        let u = reader.read_g1()?;
        let v = reader.read_g1()?;
        let g2 = reader.read_g2()?;
        let w = reader.read_g2()?;
        reader.finish()?;

        Ok(Self { g1, g2, h, u, v, w })
    }

    pub fn encode(&self) -> String {
        hex::encode(self.to_bytes())
    }

    pub fn from_hex(s: &str) -> Result<Self, Error> {
        Self::from_bytes(&decode_hex(s)?)
    }
}

/// The opener's tracing trapdoor.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct OpenerSecretKey {
    pub xi1: Scalar,
    pub xi2: Scalar,
}

impl OpenerSecretKey {
    pub const BYTES: usize = 2 * SCALAR_BYTES;

    //in BE order
    pub fn to_bytes(&self) -> [u8; Self::BYTES] {
        let mut bytes = [0u8; Self::BYTES];
        bytes[..SCALAR_BYTES].copy_from_slice(&self.xi1.to_be_bytes());
        bytes[SCALAR_BYTES..].copy_from_slice(&self.xi2.to_be_bytes());
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let mut reader = ByteReader::new(bytes);
        let xi1 = reader.read_scalar()?;
        let xi2 = reader.read_scalar()?;
        reader.finish()?;

        Ok(Self { xi1, xi2 })
    }

    pub fn encode(&self) -> String {
        hex::encode(self.to_bytes())
    }

    pub fn from_hex(s: &str) -> Result<Self, Error> {
        Self::from_bytes(&decode_hex(s)?)
    }
}

/// The issuer's trapdoor. Only needed while members join.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct IssuerSecretKey {
    pub gamma: Scalar,
}

impl IssuerSecretKey {
    pub const BYTES: usize = SCALAR_BYTES;

    //in BE order
    pub fn to_bytes(&self) -> [u8; Self::BYTES] {
        self.gamma.to_be_bytes()
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let mut reader = ByteReader::new(bytes);
        let gamma = reader.read_scalar()?;
        reader.finish()?;

        Ok(Self { gamma })
    }

    pub fn encode(&self) -> String {
        hex::encode(self.to_bytes())
    }

    pub fn from_hex(s: &str) -> Result<Self, Error> {
        Self::from_bytes(&decode_hex(s)?)
    }
}

/// A member's credential `(A, x)` with `A = g1 * (gamma + x)^-1`.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct UserSecretKey {
    pub a: G1Projective,
    pub x: Scalar,
}

impl UserSecretKey {
    pub const BYTES: usize = G1_BYTES + SCALAR_BYTES;

    /// The element `A` that opening a signature of this member recovers.
    pub fn credential(&self) -> G1Projective {
        self.a
    }

    /// A || x
    pub fn to_bytes(&self) -> [u8; Self::BYTES] {
        let mut bytes = [0u8; Self::BYTES];
        bytes[..G1_BYTES].copy_from_slice(&g1_to_bytes(&self.a));
        bytes[G1_BYTES..].copy_from_slice(&self.x.to_be_bytes());
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let mut reader = ByteReader::new(bytes);
        let a = reader.read_g1()?;
        let x = reader.read_scalar()?;
        reader.finish()?;

        Ok(Self { a, x })
    }

    pub fn encode(&self) -> String {
        hex::encode(self.to_bytes())
    }

    pub fn from_hex(s: &str) -> Result<Self, Error> {
        Self::from_bytes(&decode_hex(s)?)
    }
}

/// Output of the group setup: the public key and both trapdoors.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct GroupKeys {
    pub(crate) public: GroupPublicKey,
    pub(crate) opener: OpenerSecretKey,
    pub(crate) issuer: IssuerSecretKey,
}

impl GroupKeys {
    pub fn public_key(&self) -> &GroupPublicKey {
        &self.public
    }

    pub fn opener_key(&self) -> &OpenerSecretKey {
        &self.opener
    }

    pub fn issuer_key(&self) -> &IssuerSecretKey {
        &self.issuer
    }

    /// Returns `(gpk, osk, isk)`, so that the trapdoors can be handed to different parties.
    pub fn into_parts(self) -> (GroupPublicKey, OpenerSecretKey, IssuerSecretKey) {
        (self.public, self.opener, self.issuer)
    }
}
