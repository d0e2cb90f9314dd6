//! Integration tests for the Ed25519 signature scheme

use edsig::prelude::*;
use edsig::sign::Error as SignError;
use rand::rngs::OsRng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn test_ed25519_signature() {
    let mut rng = OsRng;

    // Generate keypair
    let (public_key, secret_key) = Ed25519::keypair(&mut rng).unwrap();

    // Message to sign
    let message = b"Test message for Ed25519 signature";

    // Sign the message
    let signature = Ed25519::sign(message, &secret_key).unwrap();

    // Verify the signature
    let result = Ed25519::verify(message, &signature, &public_key);
    assert!(result.is_ok());

    // Try with a modified message
    let modified_message = b"Modified message that should not verify";
    let result = Ed25519::verify(modified_message, &signature, &public_key);
    assert!(matches!(result, Err(Error::InvalidSignature { .. })));
}

#[test]
fn test_seeded_generation_is_reproducible() {
    let mut first = ChaCha20Rng::seed_from_u64(2024);
    let mut second = ChaCha20Rng::seed_from_u64(2024);

    let a = PrivateKey::generate(&mut first);
    let b = PrivateKey::generate(&mut second);
    assert_eq!(a.seed(), b.seed());
    assert_eq!(a.public_key(), b.public_key());
}

#[test]
fn test_scheme_and_trait_agree() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let (public_key, secret_key) = Ed25519::keypair(&mut rng).unwrap();
    let message = b"one message, two front doors";

    let from_trait = Ed25519::sign(message, &secret_key).unwrap();
    let scheme = SignatureScheme::new(&secret_key, "rfc8032", b"").unwrap();
    let from_scheme = scheme.sign(SignInput::Message(message)).unwrap();
    assert_eq!(from_trait, from_scheme);

    let verifier = SignatureScheme::new(&public_key, "rfc8032", b"").unwrap();
    assert!(verifier
        .verify(SignInput::Message(message), from_trait.as_ref())
        .is_ok());
}

#[test]
fn test_public_only_scheme_cannot_sign() {
    let mut rng = ChaCha20Rng::seed_from_u64(11);
    let secret_key = PrivateKey::generate(&mut rng);
    let public_key = decode_public_key(&encode_public_key(secret_key.public_key())).unwrap();

    let scheme = SignatureScheme::new(&public_key, "rfc8032", b"ctx").unwrap();
    assert!(!scheme.can_sign());
    assert_eq!(
        scheme.sign(SignInput::Message(b"nope")),
        Err(SignError::PrivateKeyRequired)
    );

    // The private half still signs for it under the same context
    let signer = SignatureScheme::new(&secret_key, "rfc8032", b"ctx").unwrap();
    let signature = signer.sign(SignInput::Message(b"yes")).unwrap();
    assert!(scheme
        .verify(SignInput::Message(b"yes"), signature.as_ref())
        .is_ok());
}

#[test]
fn test_mode_must_be_rfc8032() {
    let key = decode_private_key(&[3u8; 32]).unwrap();
    for mode in ["", "RFC8032", "fips-186-3", "deterministic-rsa"] {
        assert_eq!(
            SignatureScheme::new(&key, mode, b"").err(),
            Some(SignError::UnsupportedMode(mode.to_string())),
            "{:?}",
            mode
        );
    }
    assert_eq!("rfc8032".parse::<Mode>(), Ok(Mode::Rfc8032));
}

#[test]
fn test_sign_errors_convert_to_api_errors() {
    let too_short = decode_private_key(&[0u8; 31]).unwrap_err();
    let api: Error = too_short.into();
    assert_eq!(
        api,
        Error::InvalidLength {
            context: "Ed25519 private key",
            expected: 32,
            actual: 31,
        }
    );
}
