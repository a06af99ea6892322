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

//! The [BBS04 (Boneh-Boyen-Shacham) Short Group Signature Scheme](https://crypto.stanford.edu/~dabo/pubs/papers/groupsigs.pdf)
//! lets any member of a group sign on behalf of the group without revealing which member signed.
//! Key characteristics of the scheme:
//! - **Anonymity**: a verifier only learns that *some* holder of a valid credential produced the signature.
//!                  Two signatures of the same member cannot be linked.
//! - **Traceability**: the opener, holding the trapdoor `(xi1, xi2)`, recovers the credential `A` embedded in
//!                     any valid signature and can compare it against the credentials that were issued.
//! - **Non-interactive proof**: the signature is a Fiat-Shamir transformed sigma protocol proving knowledge of
//!                              `(A, x)` with `e(A, w + g2 * x) = e(g1, g2)`, bound to the signed message.
//!
//! The roles are:
//! - the **issuer**, holding `gamma`, which issues member credentials ([`keys::IssuerSecretKey::issue`]);
//! - the **opener**, holding `(xi1, xi2)`, which traces signatures ([`keys::OpenerSecretKey::open`]);
//! - **members**, each holding a [`keys::UserSecretKey`], which sign ([`signature::GroupSignature::sign`]);
//! - **verifiers**, which only need the [`keys::GroupPublicKey`] ([`signature::GroupSignature::verify`]).
//!
//! Points live on BLS12-381; the ciphersuite only selects the hash used for the challenge.

/// Module for the challenge transcript
pub mod challenge;
/// Module for ciphersuites
pub mod ciphersuites;
/// Module for keys
pub mod keys;
/// Module for opening (tracing) signatures
pub mod open;
/// Module for group setup and member key issuance
pub mod setup;
/// Module for signatures
pub mod signature;
