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

use bls12_381_plus::{multi_miller_loop, G2Prepared};
use elliptic_curve::group::Curve;
use group::Group;
use rand::{CryptoRng, RngCore};
use crate::{
    errors::Error,
    utils::util::bbs04_utils::{invert_scalar, random_g1, random_g2, random_nonzero_scalar, random_scalar},
};
use super::keys::{GroupKeys, GroupPublicKey, IssuerSecretKey, OpenerSecretKey, UserSecretKey};

impl GroupKeys {
    /// (gpk, osk, isk) = Setup()
    ///
    /// # Description
    /// Generates the public parameters of a new group together with the opener's
    /// trapdoor `(xi1, xi2)` and the issuer's trapdoor `gamma`.
    pub fn generate() -> Result<Self, Error> {
        Self::generate_with_rng(&mut rand::thread_rng())
    }

    pub fn generate_with_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, Error> {
        let g1 = random_g1(rng, "g1")?;
        let g2 = random_g2(rng, "g2")?;
        let h = random_g1(rng, "h")?;

        let xi1 = random_nonzero_scalar(rng, "xi1")?;
        let xi2 = random_nonzero_scalar(rng, "xi2")?;

        // u = h * (1 / xi1), v = h * (1 / xi2)
        let u = h * invert_scalar(&xi1, "xi1")?;
        let v = h * invert_scalar(&xi2, "xi2")?;

        let gamma = random_nonzero_scalar(rng, "gamma")?;
        let w = g2 * gamma;

        log::debug!("group setup completed");

        Ok(Self {
            public: GroupPublicKey { g1, g2, h, u, v, w },
            opener: OpenerSecretKey { xi1, xi2 },
            issuer: IssuerSecretKey { gamma },
        })
    }
}

impl IssuerSecretKey {
    /// usk = UserKeygen(isk, gpk)
    ///
    /// # Description
    /// Issues a fresh member credential `(A, x)` with `A = g1 * (gamma + x)^-1`.
    /// The result must be delivered confidentially to the member.
    pub fn issue(&self, gpk: &GroupPublicKey) -> Result<UserSecretKey, Error> {
        self.issue_with_rng(gpk, &mut rand::thread_rng())
    }

    pub fn issue_with_rng<R: RngCore + CryptoRng>(&self, gpk: &GroupPublicKey, rng: &mut R) -> Result<UserSecretKey, Error> {
        let x = random_scalar(rng)?;

        // A = g1 * (1 / (gamma + x))
        let a = gpk.g1 * invert_scalar(&(self.gamma + x), "gamma + x")?;

        log::debug!("user key issued");

        Ok(UserSecretKey { a, x })
    }
}

/// Free-function form of [`GroupKeys::generate`].
pub fn setup() -> Result<(GroupPublicKey, OpenerSecretKey, IssuerSecretKey), Error> {
    Ok(GroupKeys::generate()?.into_parts())
}

/// Free-function form of [`IssuerSecretKey::issue`].
pub fn user_keygen(isk: &IssuerSecretKey, gpk: &GroupPublicKey) -> Result<UserSecretKey, Error> {
    isk.issue(gpk)
}

/// Checks the membership equation `e(A, w + g2 * x) == e(g1, g2)`.
///
/// Lets a member confirm a freshly issued key before trusting it; needs no secret
/// of the issuer. A key that does not satisfy the equation yields `false`.
pub fn verify_user_key(gpk: &GroupPublicKey, usk: &UserSecretKey) -> bool {
    let w_g2x = gpk.w + gpk.g2 * usk.x;

    // e(A, w + g2 * x) - e(g1, g2) == 1_GT
    let term1 = (&usk.a.to_affine(), &G2Prepared::from(w_g2x.to_affine()));
    let term2 = (&gpk.g1.to_affine(), &G2Prepared::from(-gpk.g2.to_affine()));

    let valid = bool::from(multi_miller_loop(&[term1, term2]).final_exponentiation().is_identity());
    if !valid {
        log::debug!("user key does not satisfy the membership equation");
    }
    valid
}
