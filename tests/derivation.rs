use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use masterkey::{DerivationError, HashAlgorithm, MasterKey};
use rand::RngCore;

fn random_material(len: usize) -> Vec<u8> {
    let mut material = vec![0u8; len];
    rand::thread_rng().fill_bytes(&mut material);
    material
}

#[test]
fn test_master_key_len() {
    for len in 0..4096 {
        let key = MasterKey::new(random_material(len));
        let subkey = key.subkey("test", 4096).expect("subkey from material");
        assert_eq!(subkey.len(), 4096);
    }
}

#[test]
fn test_subkey_len() {
    for len in 0..4096 {
        let key = MasterKey::new(random_material(32));
        let subkey = key.subkey("test", len).expect("subkey of requested len");
        assert_eq!(subkey.len(), len);
    }
}

#[test]
fn test_key_variance() {
    let master_keys = 1000;
    let subkeys_per_master = 1000;
    let mut seen: HashSet<[u8; 32]> = HashSet::with_capacity(master_keys * subkeys_per_master);

    for _ in 0..master_keys {
        let key = MasterKey::new(random_material(32));
        for id in 0..subkeys_per_master {
            let subkey = key.subkey_array::<32>(&format!("subkey-{}", id)).unwrap();
            seen.insert(*secrecy::ExposeSecret::expose_secret(&subkey));
        }
    }

    assert_eq!(seen.len(), master_keys * subkeys_per_master);
}

#[test]
fn test_key_deterministic() {
    let key = MasterKey::new(random_material(32));
    let original = key.subkey("foo", 4096).unwrap();
    for _ in 0..1000 {
        assert_eq!(key.subkey("foo", 4096).unwrap(), original);
    }
}

#[test]
fn test_same_material_same_subkeys() {
    let material = random_material(32);
    let a = MasterKey::new(material.clone());
    let b = MasterKey::new(material);
    assert_eq!(a.subkey("encryption", 32).unwrap(), b.subkey("encryption", 32).unwrap());
}

#[test]
fn test_bound_enforcement() {
    let key = MasterKey::new(random_material(32));
    assert_eq!(key.subkey("bound", 255 * 32).unwrap().len(), 8160);
    assert!(matches!(
        key.subkey("bound", 255 * 32 + 1),
        Err(DerivationError::LengthExceeded { requested: 8161, max: 8160, .. })
    ));
    assert!(key.subkey("bound", usize::MAX).is_err());

    let wide = MasterKey::with_hash(random_material(64), HashAlgorithm::Sha512);
    assert_eq!(wide.subkey("bound", 255 * 64).unwrap().len(), 16320);
    assert!(wide.subkey("bound", 255 * 64 + 1).is_err());
}

#[test]
fn test_failed_derivation_leaves_key_usable() {
    let key = MasterKey::new(random_material(32));
    let before = key.subkey("encryption", 32).unwrap();
    assert!(key.subkey("encryption", 10_000).is_err());
    assert_eq!(key.subkey("encryption", 32).unwrap(), before);
}

#[test]
fn test_concurrent_derivation() {
    let key = Arc::new(MasterKey::new(random_material(32)));
    let expected = key.subkey("shared", 256).unwrap().to_vec();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let key = Arc::clone(&key);
            thread::spawn(move || {
                (0..100)
                    .map(|_| key.subkey("shared", 256).unwrap().to_vec())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for subkey in handle.join().unwrap() {
            assert_eq!(subkey, expected);
        }
    }
}

#[test]
fn test_unicode_identifiers_are_distinct() {
    let key = MasterKey::new(random_material(32));
    let a = key.subkey("clé", 32).unwrap();
    let b = key.subkey("cle", 32).unwrap();
    let empty = key.subkey("", 32).unwrap();
    assert_ne!(a, b);
    assert_ne!(a, empty);
}
