use super::*;

#[test]
fn test_pass_bits_are_distinct() {
    assert_eq!(PassFlags::REFLECTION.bits(), 0b01);
    assert_eq!(PassFlags::FINAL.bits(), 0b10);
    assert!(!PassFlags::REFLECTION.intersects(PassFlags::FINAL));
}

#[test]
fn test_all_pass_is_every_bit_of_storage() {
    assert_eq!(PassFlags::ALL_PASS.bits(), u8::MAX);
    assert_eq!(PassFlags::ALL_PASS.bits(), !0u8);
    for pass in PassFlags::DEFINED {
        assert!(PassFlags::ALL_PASS.contains(pass));
    }
}

#[test]
fn test_subscribed_actor_participates() {
    let flags = PassFlags::REFLECTION | PassFlags::FINAL;

    assert!(flags.participates_in(PassFlags::REFLECTION));
    assert!(flags.participates_in(PassFlags::FINAL));
    assert!(flags.participates_in(PassFlags::ALL_PASS));
}

#[test]
fn test_partially_subscribed_actor() {
    let flags = PassFlags::FINAL;

    assert!(!flags.participates_in(PassFlags::REFLECTION));
    assert!(flags.participates_in(PassFlags::FINAL));
    assert!(flags.participates_in(PassFlags::ALL_PASS));
}

#[test]
fn test_unsubscribed_actor_participates_nowhere() {
    let flags = PassFlags::empty();

    for pass in PassFlags::DEFINED {
        assert!(!flags.participates_in(pass));
    }
    assert!(!flags.participates_in(PassFlags::ALL_PASS));
    assert_eq!(PassFlags::default(), PassFlags::empty());
}

#[test]
fn test_all_pass_actor_participates_everywhere() {
    for pass in PassFlags::DEFINED {
        assert!(PassFlags::ALL_PASS.participates_in(pass));
    }
}
