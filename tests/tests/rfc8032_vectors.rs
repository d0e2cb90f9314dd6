//! RFC 8032 section 7 known-answer tests, run through the public facade

use edsig::prelude::*;
use edsig::sign::{Error as SignError, Rejection};
use edsig_tests::vectors::{Flavour, Rfc8032Vector, RFC8032_VECTORS};

fn scheme_for(vector: &Rfc8032Vector) -> SignatureScheme {
    let key = decode_private_key(&vector.secret_key_bytes()).unwrap();
    SignatureScheme::new(&key, "rfc8032", &vector.context_bytes()).unwrap()
}

fn digest_for(vector: &Rfc8032Vector) -> Option<[u8; 64]> {
    match vector.flavour {
        Flavour::Prehash => Some(prehash(&vector.message_bytes())),
        Flavour::Pure | Flavour::Context => None,
    }
}

fn find(name: &str) -> &'static Rfc8032Vector {
    RFC8032_VECTORS
        .iter()
        .find(|v| v.name == name)
        .unwrap_or_else(|| panic!("no vector named {}", name))
}

#[test]
fn test_public_keys_match_vectors() {
    for vector in RFC8032_VECTORS {
        let key = decode_private_key(&vector.secret_key_bytes()).unwrap();
        assert_eq!(
            encode_public_key(key.public_key()).to_vec(),
            vector.public_key_bytes(),
            "{}",
            vector.name
        );
        assert_eq!(
            encode_private_key(&key).to_vec(),
            vector.secret_key_bytes(),
            "{}",
            vector.name
        );
    }
}

#[test]
fn test_signatures_match_vectors() {
    for vector in RFC8032_VECTORS {
        let scheme = scheme_for(vector);
        let message = vector.message_bytes();
        let digest = digest_for(vector);
        let input = match &digest {
            Some(d) => SignInput::Prehashed(d),
            None => SignInput::Message(&message),
        };

        let signature = scheme.sign(input).unwrap();
        assert_eq!(
            signature.to_bytes().to_vec(),
            vector.signature_bytes(),
            "{}",
            vector.name
        );
    }
}

#[test]
fn test_vectors_verify_with_public_key_only() {
    for vector in RFC8032_VECTORS {
        let public = decode_public_key(&vector.public_key_bytes()).unwrap();
        let scheme = SignatureScheme::new(&public, "rfc8032", &vector.context_bytes()).unwrap();
        assert!(!scheme.can_sign());

        let message = vector.message_bytes();
        let digest = digest_for(vector);
        let input = match &digest {
            Some(d) => SignInput::Prehashed(d),
            None => SignInput::Message(&message),
        };

        assert_eq!(
            scheme.verify(input, &vector.signature_bytes()),
            Ok(()),
            "{}",
            vector.name
        );
    }
}

#[test]
fn test_context_vectors_are_bound_to_their_context() {
    let foo = find("7.2 foo");
    let bar = find("7.2 bar");
    assert_eq!(foo.message, bar.message);
    assert_ne!(foo.signature, bar.signature);

    let public = decode_public_key(&foo.public_key_bytes()).unwrap();
    let message = foo.message_bytes();

    let under_bar = SignatureScheme::new(&public, "rfc8032", b"bar").unwrap();
    assert_eq!(
        under_bar.verify(SignInput::Message(&message), &foo.signature_bytes()),
        Err(SignError::InvalidSignature(Rejection::Equation))
    );

    let no_context = SignatureScheme::new(&public, "rfc8032", b"").unwrap();
    assert!(no_context
        .verify(SignInput::Message(&message), &foo.signature_bytes())
        .is_err());
}

#[test]
fn test_prehash_vector_is_not_a_pure_signature() {
    let vector = find("7.3 abc");
    let scheme = scheme_for(vector);
    let message = vector.message_bytes();

    // Same bytes, but without ph=1 in dom2 and without hashing
    assert!(scheme
        .verify(SignInput::Message(&message), &vector.signature_bytes())
        .is_err());

    // Raw message passed where a digest is expected
    assert_eq!(
        scheme.verify(SignInput::Prehashed(&message), &vector.signature_bytes()),
        Err(SignError::InvalidPrehash {
            expected: 64,
            actual: 3
        })
    );
}

#[test]
fn test_pure_vectors_through_signature_trait() {
    for vector in RFC8032_VECTORS
        .iter()
        .filter(|v| v.flavour == Flavour::Pure)
    {
        let secret = Ed25519::deserialize_secret_key(&vector.secret_key_bytes()).unwrap();
        let public = Ed25519::deserialize_public_key(&vector.public_key_bytes()).unwrap();
        let message = vector.message_bytes();

        let signature = Ed25519::sign(&message, &secret).unwrap();
        assert_eq!(
            Ed25519::serialize_signature(&signature),
            vector.signature_bytes(),
            "{}",
            vector.name
        );
        assert!(Ed25519::verify(&message, &signature, &public).is_ok());
    }
}

#[test]
fn test_tampered_vectors_fail() {
    for vector in RFC8032_VECTORS {
        let scheme = scheme_for(vector);
        let mut message = vector.message_bytes();
        message.push(0x00);
        let digest = match vector.flavour {
            Flavour::Prehash => Some(prehash(&message)),
            Flavour::Pure | Flavour::Context => None,
        };
        let input = match &digest {
            Some(d) => SignInput::Prehashed(d),
            None => SignInput::Message(&message),
        };

        assert_eq!(
            scheme.verify(input, &vector.signature_bytes()),
            Err(SignError::InvalidSignature(Rejection::Equation)),
            "{}",
            vector.name
        );
    }
}
