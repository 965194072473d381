use shadekit::utils::initials::initials;

#[test]
fn test_two_part_name() {
    assert_eq!(initials("Jane Doe"), "JD");
}

#[test]
fn test_single_word_name() {
    assert_eq!(initials("Madonna"), "M");
}

#[test]
fn test_empty_name() {
    assert_eq!(initials(""), "");
    assert_eq!(initials("   "), "");
}

#[test]
fn test_truncates_to_two() {
    assert_eq!(initials("Ada King Lovelace"), "AK");
}

#[test]
fn test_uppercases_and_ignores_extra_whitespace() {
    assert_eq!(initials("  grace   hopper "), "GH");
}

#[test]
fn test_non_ascii_names() {
    assert_eq!(initials("élodie ürban"), "ÉÜ");
}
