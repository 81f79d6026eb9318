use super::*;

#[test]
fn messages_carry_their_category() {
    assert_eq!(
        PetalfallError::validation("bad layer").to_string(),
        "validation error: bad layer"
    );
    assert_eq!(
        PetalfallError::palette("bad hex").to_string(),
        "palette error: bad hex"
    );
    assert_eq!(
        PetalfallError::serde("bad json").to_string(),
        "serialization error: bad json"
    );
}

#[test]
fn anyhow_errors_pass_through() {
    let e: PetalfallError = anyhow::anyhow!("upstream failure").into();
    assert!(matches!(e, PetalfallError::Other(_)));
    assert_eq!(e.to_string(), "upstream failure");
}
