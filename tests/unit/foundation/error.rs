use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        RoughError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(RoughError::render("x").to_string().contains("render error:"));
    assert!(
        RoughError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = RoughError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
