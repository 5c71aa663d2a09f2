//! Display-name normalization.

/// Title-case a display name: the first letter of every alphabetic run is
/// upper-cased, the rest lower-cased. Non-alphabetic characters pass through
/// and start a new run, which keeps the output byte-compatible with history
/// files written by earlier versions of this system.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_run_start = true;
    for ch in input.chars() {
        if ch.is_alphabetic() {
            if at_run_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_run_start = false;
        } else {
            out.push(ch);
            at_run_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn capitalizes_each_word() {
        assert_eq!(title_case("jane doe"), "Jane Doe");
        assert_eq!(title_case("JANE DOE"), "Jane Doe");
        assert_eq!(title_case("jAnE dOe"), "Jane Doe");
    }

    #[test]
    fn preserves_spacing_and_punctuation() {
        assert_eq!(title_case("  mary   ann "), "  Mary   Ann ");
        assert_eq!(title_case("anne-marie"), "Anne-Marie");
    }

    #[test]
    fn apostrophes_start_a_new_run() {
        assert_eq!(title_case("o'neil"), "O'Neil");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(title_case(""), "");
    }

    proptest! {
        #[test]
        fn title_case_is_idempotent(input in "[ -~]{0,64}") {
            let once = title_case(&input);
            prop_assert_eq!(title_case(&once), once);
        }
    }
}
