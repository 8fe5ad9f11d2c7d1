use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;
use sheet_core::{generate_id, generate_id_with, is_valid_email, ID_PREFIX, ID_RANDOM_LEN};

#[test]
fn email_accepts_simple_addresses() {
    assert!(is_valid_email("a@b.com"));
    assert!(is_valid_email("first.last+tag@sub.example.co.uk"));
}

#[test]
fn email_rejects_wrong_shapes() {
    assert!(!is_valid_email("not-an-email"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("@b.com"));
    assert!(!is_valid_email("a@.com"));
    assert!(!is_valid_email("a@b."));
    assert!(!is_valid_email("a b@c.com"));
    assert!(!is_valid_email("a@b@c.com"));
    assert!(!is_valid_email(" a@b.com"));
    assert!(!is_valid_email(""));
}

#[test]
fn email_is_a_shape_check_only() {
    // Undeliverable but correctly shaped.
    assert!(is_valid_email("x@y.z"));
    assert!(is_valid_email("a@b.c.d"));
}

fn assert_id_shape(id: &str) {
    let rest = id.strip_prefix(ID_PREFIX).expect("id prefix");
    assert_eq!(rest.len(), ID_RANDOM_LEN);
    assert!(rest
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
}

#[test]
fn generated_ids_have_prefix_and_nine_base36_chars() {
    for _ in 0..100 {
        assert_id_shape(&generate_id());
    }
}

#[test]
fn seeded_rng_gives_repeatable_ids() {
    let first = generate_id_with(&mut StdRng::seed_from_u64(42));
    let second = generate_id_with(&mut StdRng::seed_from_u64(42));
    assert_eq!(first, second);
    assert_id_shape(&first);
}

#[test]
fn ids_rarely_collide_in_small_batches() {
    let mut rng = StdRng::seed_from_u64(7);
    let ids: HashSet<String> = (0..1000).map(|_| generate_id_with(&mut rng)).collect();
    assert_eq!(ids.len(), 1000);
}
