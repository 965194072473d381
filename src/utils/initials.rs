//! Avatar placeholder labels

/// Maximum number of characters in an initials label
pub const MAX_INITIALS: usize = 2;

/// Derive initials from a display name
///
/// Takes the first character of each whitespace-separated part, uppercases
/// the result and keeps at most two characters.
///
/// ```
/// use shadekit::utils::initials::initials;
///
/// assert_eq!(initials("Jane Doe"), "JD");
/// assert_eq!(initials("Madonna"), "M");
/// assert_eq!(initials(""), "");
/// ```
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .take(MAX_INITIALS)
        .collect()
}
