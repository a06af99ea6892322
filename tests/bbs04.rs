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

#[cfg(test)]
mod bbs04_tests {

    use bbs04::{
        bbs04::{
            ciphersuites::{Bbs04Ciphersuite, Bls12381Sha256, Bls12381Shake256},
            keys::{GroupKeys, GroupPublicKey, IssuerSecretKey, OpenerSecretKey, UserSecretKey},
            open::open,
            setup::{setup, user_keygen, verify_user_key},
            signature::GroupSignature,
        },
        errors::Error,
        utils::ecgroup,
    };
    use elliptic_curve::hash2curve::ExpandMsg;

    fn sample_scenario<CS>()
    where
        CS: Bbs04Ciphersuite,
        CS::Expander: for<'a> ExpandMsg<'a>,
    {
        let (gpk, osk, isk) = setup().unwrap();
        let usk = user_keygen(&isk, &gpk).unwrap();
        assert!(verify_user_key(&gpk, &usk));

        let m = b"sample msg";
        let sigma = GroupSignature::sign::<CS>(&gpk, &usk, m).unwrap();

        assert!(sigma.verify::<CS>(&gpk, m));
        assert_eq!(open(&gpk, &osk, &sigma), usk.credential());
        assert!(!sigma.verify::<CS>(&gpk, b"fail"));
    }

    #[test]
    fn sample_scenario_sha256() {
        sample_scenario::<Bls12381Sha256>();
    }

    #[test]
    fn sample_scenario_shake256() {
        sample_scenario::<Bls12381Shake256>();
    }

    /// Every party only ever sees the others' keys as byte buffers.
    #[test]
    fn parties_exchange_bytes() {
        let keys = GroupKeys::generate().unwrap();
        let gpk_bytes = keys.public_key().to_bytes();
        let osk_hex = keys.opener_key().encode();
        let isk_bytes = keys.issuer_key().to_bytes();

        // issuer
        let isk = IssuerSecretKey::from_bytes(&isk_bytes).unwrap();
        let gpk = GroupPublicKey::from_bytes(&gpk_bytes).unwrap();
        let usk_bytes = isk.issue(&gpk).unwrap().to_bytes();

        // member
        let usk = UserSecretKey::from_bytes(&usk_bytes).unwrap();
        assert!(verify_user_key(&gpk, &usk));
        let sig_bytes = GroupSignature::sign::<Bls12381Sha256>(&gpk, &usk, b"vote: yes").unwrap().to_bytes();

        // verifier
        let sigma = GroupSignature::from_bytes(&sig_bytes).unwrap();
        assert!(sigma.verify::<Bls12381Sha256>(&gpk, b"vote: yes"));

        // opener
        let osk = OpenerSecretKey::from_hex(&osk_hex).unwrap();
        assert_eq!(osk.open(&gpk, &sigma), usk.a);
    }

    #[test]
    fn opener_distinguishes_members() {
        let keys = GroupKeys::generate().unwrap();
        let gpk = keys.public_key();
        let registry: Vec<UserSecretKey> = (0..3).map(|_| keys.issuer_key().issue(gpk).unwrap()).collect();

        for (i, usk) in registry.iter().enumerate() {
            let sigma = GroupSignature::sign::<Bls12381Shake256>(gpk, usk, b"msg").unwrap();
            assert!(sigma.verify::<Bls12381Shake256>(gpk, b"msg"));

            let traced = keys.opener_key().open(gpk, &sigma);
            let found = registry.iter().position(|member| member.credential() == traced);
            assert_eq!(found, Some(i));
        }
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        assert!(matches!(GroupSignature::from_bytes(&[0u8; 10]), Err(Error::TruncatedInput { .. })));
        assert!(matches!(GroupPublicKey::from_hex("00"), Err(Error::TruncatedInput { .. })));
        assert!(matches!(GroupSignature::from_bytes(&[0xffu8; GroupSignature::BYTES]), Err(Error::MalformedEncoding(_))));
    }

    #[test]
    fn ecgroup_helpers() {
        let p = ecgroup::g1_hash_to_point::<Bls12381Sha256>(b"ecgroup_g1_generator").unwrap();
        let s = ecgroup::scalar_random().unwrap();
        let s_inv = ecgroup::scalar_inverse(&s).unwrap();
        let q = ecgroup::g1_mul(&ecgroup::g1_mul(&p, &s).unwrap(), &s_inv).unwrap();
        assert_eq!(p, q);
    }
}
