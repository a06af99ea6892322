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

mod bbs04_example {
    use bbs04::{
        bbs04::{
            ciphersuites::Bbs04Ciphersuite,
            keys::GroupKeys,
            setup::verify_user_key,
            signature::GroupSignature,
        },
        errors::Error,
    };
    use elliptic_curve::hash2curve::ExpandMsg;

    pub(crate) fn bbs04_main<CS>() -> Result<(), Error>
    where
        CS: Bbs04Ciphersuite,
        CS::Expander: for<'a> ExpandMsg<'a>,
    {
        const MSG: &[u8] = b"sample msg";

        log::info!("Group Setup");
        let keys = GroupKeys::generate()?;
        let gpk = keys.public_key();
        log::info!("GPK: {}", gpk.encode());

        log::info!("Member Join");
        let usk = keys.issuer_key().issue(gpk)?;
        assert!(verify_user_key(gpk, &usk), "Issued user key is NOT valid!");
        log::info!("User key is VALID");

        log::info!("Signature Computation...");
        let signature = GroupSignature::sign::<CS>(gpk, &usk, MSG)?;
        log::info!("Signature: {}", signature.encode());

        assert!(signature.verify::<CS>(gpk, MSG), "Signature verification FAILED!");
        log::info!("Signature is VALID");

        assert!(!signature.verify::<CS>(gpk, b"fail"), "Signature verified on the wrong message!");
        log::info!("Signature on a different message is rejected");

        log::info!("Opening the Signature...");
        let credential = keys.opener_key().open(gpk, &signature);
        assert_eq!(credential, usk.credential(), "Opening FAILED!");
        log::info!("Signer traced to the issued credential");

        Ok(())
    }
}

fn main() {
    use crate::bbs04_example::bbs04_main;
    use bbs04::bbs04::ciphersuites::{Bls12381Sha256, Bls12381Shake256};
    use std::env;

    dotenvy::dotenv().ok();
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        println!(
            "Usage: {} <cipher_suite>
                Ciphersuites:
                    - BLS12-381-SHA-256
                    - BLS12-381-SHAKE-256",
            args[0]
        );
        return;
    }

    let cipher_suite = &args[1];

    let result = match cipher_suite.as_str() {
        "BLS12-381-SHA-256" => {
            log::info!("Ciphersuite: BLS12-381-SHA-256");
            bbs04_main::<Bls12381Sha256>()
        }
        "BLS12-381-SHAKE-256" => {
            log::info!("Ciphersuite: BLS12-381-SHAKE-256");
            bbs04_main::<Bls12381Shake256>()
        }
        _ => {
            println!("Unknown cipher suite: {}", cipher_suite);
            return;
        }
    };

    if let Err(e) = result {
        log::error!("{e}");
    }
}
