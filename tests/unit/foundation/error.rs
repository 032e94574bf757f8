use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PhotoslotError::decode("x")
            .to_string()
            .contains("decode error:")
    );
    assert!(
        PhotoslotError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        PhotoslotError::encode("x")
            .to_string()
            .contains("encode error:")
    );
    assert!(PhotoslotError::EmptySlots.to_string().contains("no placeholder slots"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PhotoslotError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
