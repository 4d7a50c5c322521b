//! Pure validation logic for name and course fields
//!
//! These functions never touch I/O so they can be tested in isolation.

/// Validates a first or last name.
///
/// An empty value means "unset" and is always accepted. Anything else must
/// consist solely of alphabetic characters.
pub fn validate_name(value: &str) -> Result<(), String> {
    if value.is_empty() || value.chars().all(char::is_alphabetic) {
        return Ok(());
    }

    Err("must be alphabetic, cannot contain numbers.".to_string())
}

/// Validates a course name: letters, digits and whitespace only.
pub fn validate_course_name(value: &str) -> Result<(), String> {
    if value
        .chars()
        .all(|c| c.is_alphanumeric() || c.is_whitespace())
    {
        return Ok(());
    }

    Err("must be alphanumeric".to_string())
}

/// Maps `c` through a case conversion, keeping `c` unchanged when the
/// mapping expands to several chars or changes whether it is a letter
/// (`ß` to `SS`, `İ` to `i` plus a combining dot).
fn convert_case<I>(c: char, mut mapped: I) -> char
where
    I: Iterator<Item = char>,
{
    match (mapped.next(), mapped.next()) {
        (Some(single), None)
            if single.is_alphabetic() == c.is_alphabetic()
                && single.is_alphanumeric() == c.is_alphanumeric() =>
        {
            single
        }
        _ => c,
    }
}

/// Capitalizes the first letter of every whitespace-separated word and
/// lowercases the rest. Whitespace is preserved as-is.
///
/// Every char maps to exactly one char of the same class, so the result of a
/// valid name or course is still valid and converting it again is a no-op.
pub fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut at_word_start = true;

    for c in value.chars() {
        if c.is_whitespace() {
            result.push(c);
            at_word_start = true;
        } else if at_word_start {
            result.push(convert_case(c, c.to_uppercase()));
            at_word_start = false;
        } else {
            result.push(convert_case(c, c.to_lowercase()));
        }
    }

    result
}
