use super::*;

#[test]
fn mapped_countries_get_their_flag() {
    assert_eq!(icon_for("China"), "\u{1F1E8}\u{1F1F3}");
    assert_eq!(icon_for("India"), "\u{1F1EE}\u{1F1F3}");
}

#[test]
fn unmapped_names_fall_back() {
    assert_eq!(icon_for("Atlantis"), FALLBACK_ICON);
    assert_eq!(icon_for(""), FALLBACK_ICON);
}
