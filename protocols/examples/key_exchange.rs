use ecprotocols::{DEFAULT_ALPHABET_SIZE, DiffieHellman, DigitalSignature, Koblitz, Signature};
use num_bigint::BigUint;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() {
    let mut rng = StdRng::seed_from_u64(42);

    let alice = DiffieHellman::with_default_curve(BigUint::from(12345u32)).expect("alice");
    let bob = DiffieHellman::with_default_curve(BigUint::from(67890u32)).expect("bob");
    let secret = alice
        .compute_shared_secret(bob.public_key())
        .expect("shared secret");
    assert_eq!(
        secret,
        bob.compute_shared_secret(alice.public_key()).expect("shared secret")
    );
    println!("shared secret: {secret}");

    let signer = DigitalSignature::random(alice.curve().clone(), &mut rng).expect("keys");
    let hash = BigUint::from_bytes_be(b"hello ecdsa");
    let sig = signer.generate_signature(&mut rng, &hash).expect("sign");
    let sig_bytes = sig.to_bytes().expect("serialize sig");

    let sig2 = Signature::from_bytes(&sig_bytes).expect("deserialize sig");
    let ok = signer
        .verify_signature(signer.public_key(), &hash, &sig2)
        .expect("verify");
    assert!(ok);

    let koblitz = Koblitz::with_default_curve().expect("koblitz");
    let (point, j) = koblitz.encode("hello koblitz", DEFAULT_ALPHABET_SIZE).expect("encode");
    let text = koblitz.decode(&point, j, DEFAULT_ALPHABET_SIZE).expect("decode");
    println!("{text} -> {point} (j = {j})");

    let stats = alice.curve().cache().stats();
    println!("cache: {} hits, {} misses", stats.hits, stats.misses);
}
