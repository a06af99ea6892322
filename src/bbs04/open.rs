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

use bls12_381_plus::G1Projective;
use super::{
    keys::{GroupPublicKey, OpenerSecretKey},
    signature::GroupSignature,
};

impl OpenerSecretKey {
    /// A = Open(gpk, osk, sigma)
    ///
    /// # Description
    /// Decrypts the credential `A` carried by `(T1, T2, T3)`.
    ///
    /// The signature is not verified here: on a tampered or never-valid signature
    /// this returns some unrelated point, not an error. Callers must check the
    /// signature with [`GroupSignature::verify`] first, or compare the result against
    /// the registry of issued credentials.
    pub fn open(&self, _gpk: &GroupPublicKey, sigma: &GroupSignature) -> G1Projective {
        // h * (alpha + beta) = T1 * xi1 + T2 * xi2
        let h_alpha_beta = sigma.t1 * self.xi1 + sigma.t2 * self.xi2;

        sigma.t3 - h_alpha_beta
    }
}

/// Free-function form of [`OpenerSecretKey::open`].
pub fn open(gpk: &GroupPublicKey, osk: &OpenerSecretKey, sigma: &GroupSignature) -> G1Projective {
    osk.open(gpk, sigma)
}
