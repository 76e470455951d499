//! Identifier case conversion.
//!
//! Property names cross between Rust field identifiers (`student_id`),
//! bean-style names (`studentId`) and map keys, so the conversions live here
//! where both the runtime crate and the derive macro can reach them.

/// Converts a camel-case identifier to lower underscore case.
///
/// An underscore is inserted before an upper-case letter that follows a
/// lower-case letter or digit, and before the last letter of an upper-case
/// run that is followed by a lower-case letter (`userID` -> `user_id`,
/// `HTTPServer` -> `http_server`). Existing underscores are kept.
///
/// # Examples
///
/// ```
/// use bean_utils::case::to_underline_case;
///
/// assert_eq!(to_underline_case("studentId"), "student_id");
/// assert_eq!(to_underline_case("age"), "age");
/// assert_eq!(to_underline_case("student_id"), "student_id");
/// ```
pub fn to_underline_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (index, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && index > 0 {
            let prev = chars[index - 1];
            let next_is_lower = chars.get(index + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary {
                out.push('_');
            }
        }
        out.extend(c.to_lowercase());
    }
    out
}

/// Converts a snake-case identifier to lower camel case.
///
/// # Examples
///
/// ```
/// use bean_utils::case::to_camel_case;
///
/// assert_eq!(to_camel_case("student_id"), "studentId");
/// assert_eq!(to_camel_case("name"), "name");
/// ```
pub fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for (index, part) in name.split('_').filter(|p| !p.is_empty()).enumerate() {
        if index == 0 {
            out.push_str(part);
        } else {
            push_capitalized(&mut out, part);
        }
    }
    out
}

/// Converts a snake-case identifier to upper camel case.
///
/// ```
/// use bean_utils::case::to_pascal_case;
///
/// assert_eq!(to_pascal_case("student_id"), "StudentId");
/// ```
pub fn to_pascal_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for part in name.split('_').filter(|p| !p.is_empty()) {
        push_capitalized(&mut out, part);
    }
    out
}

/// Converts a snake-case identifier to upper underscore case.
///
/// ```
/// use bean_utils::case::to_screaming_snake_case;
///
/// assert_eq!(to_screaming_snake_case("student_id"), "STUDENT_ID");
/// ```
pub fn to_screaming_snake_case(name: &str) -> String {
    name.to_uppercase()
}

fn push_capitalized(out: &mut String, part: &str) {
    let mut chars = part.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn underline_handles_acronyms() {
        assert_eq!(to_underline_case("userID"), "user_id");
        assert_eq!(to_underline_case("HTTPServer"), "http_server");
        assert_eq!(to_underline_case("address2Line"), "address2_line");
        assert_eq!(to_underline_case("Name"), "name");
        assert_eq!(to_underline_case(""), "");
    }

    #[test]
    fn camel_round_trip() {
        for name in ["student_id", "age", "create_time_utc"] {
            assert_eq!(to_underline_case(&to_camel_case(name)), name);
        }
        assert_eq!(to_camel_case("_private_field"), "privateField");
        assert_eq!(to_pascal_case("create_time"), "CreateTime");
    }
}
