//! Property-based tests for field validation
//!
//! These check the validation rules hold for whole classes of inputs rather
//! than a handful of hand-picked examples.

#[cfg(test)]
mod tests {
    use crate::core::validation::*;
    use proptest::prelude::*;

    // Names made only of letters, including the empty name
    prop_compose! {
        fn alphabetic_name()(name in "[a-zA-Z]{0,20}") -> String {
            name
        }
    }

    // Strings guaranteed to carry at least one character outside letters,
    // digits and whitespace
    prop_compose! {
        fn string_with_symbol()(
            prefix in "[a-zA-Z0-9 ]{0,10}",
            symbol in "[!@#$%^&*()_+=.,;:'\"/?<>-]",
            suffix in "[a-zA-Z0-9 ]{0,10}",
        ) -> String {
            format!("{prefix}{symbol}{suffix}")
        }
    }

    proptest! {
        #[test]
        fn alphabetic_names_are_accepted(name in alphabetic_name()) {
            prop_assert!(validate_name(&name).is_ok());
        }

        #[test]
        fn names_with_digits_are_rejected(
            head in "[a-zA-Z]{0,8}",
            digit in "[0-9]",
            tail in "[a-zA-Z]{0,8}",
        ) {
            let name = format!("{head}{digit}{tail}");
            prop_assert!(validate_name(&name).is_err());
        }

        #[test]
        fn names_with_symbols_are_rejected(value in string_with_symbol()) {
            prop_assert!(validate_name(&value).is_err());
        }

        #[test]
        fn courses_with_symbols_are_rejected(value in string_with_symbol()) {
            prop_assert!(validate_course_name(&value).is_err());
        }

        #[test]
        fn alphanumeric_courses_are_accepted(value in "[a-zA-Z0-9 ]{0,30}") {
            prop_assert!(validate_course_name(&value).is_ok());
        }

        #[test]
        fn title_case_is_idempotent(value in "[a-zA-Z0-9 ]{0,30}") {
            let once = title_case(&value);
            prop_assert_eq!(title_case(&once), once.clone());
        }

        #[test]
        fn title_cased_unicode_names_stay_valid(name in "\\p{L}{1,12}") {
            let once = title_case(&name);
            prop_assert!(validate_name(&once).is_ok());
            prop_assert_eq!(once.chars().count(), name.chars().count());
            prop_assert_eq!(title_case(&once), once.clone());
        }

        #[test]
        fn title_case_matches_ignoring_case(value in "[a-zA-Z0-9 ]{0,30}") {
            prop_assert_eq!(title_case(&value).to_lowercase(), value.to_lowercase());
        }
    }
}
