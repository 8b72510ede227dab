//! Display grouping for already-normalized numbers.
//!
//! Purely cosmetic. No detection happens here: the input is assumed to be
//! the output of the normalizer.

/// Formats normalized numbers for on-screen display.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayFormatter;

impl DisplayFormatter {
    /// Groups an E.164 string for display.
    ///
    /// - Strings that already contain a space are returned unchanged.
    /// - `+1` followed by exactly 10 digits renders as `+1 (XXX) XXX-XXXX`.
    /// - Anything else starting with `+` splits the two characters after the
    ///   `+` from the rest. This mis-groups 1- and 3-digit codes other than
    ///   the `+1` case above (`+971501234567` becomes `+97 1501234567`),
    ///   and always inserts the space, so `+63` becomes `+63 `.
    /// - Input without a leading `+` is returned unchanged.
    pub fn for_display(e164: &str) -> String {
        if e164.contains(' ') {
            return e164.to_string();
        }

        if let Some(national) = e164.strip_prefix("+1") {
            if national.len() == 10 && national.bytes().all(|b| b.is_ascii_digit()) {
                return format!(
                    "+1 ({}) {}-{}",
                    &national[0..3],
                    &national[3..6],
                    &national[6..10]
                );
            }
        }

        // Not normalizer output; there is no code to split off
        let Some(body) = e164.strip_prefix('+') else {
            return e164.to_string();
        };

        let split = body
            .char_indices()
            .nth(2)
            .map(|(idx, _)| idx)
            .unwrap_or(body.len());
        let (country, national) = body.split_at(split);

        format!("+{} {}", country, national)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_north_american_grouping() {
        assert_eq!(
            DisplayFormatter::for_display("+15551234567"),
            "+1 (555) 123-4567"
        );
    }

    #[test]
    fn test_already_formatted_is_unchanged() {
        assert_eq!(
            DisplayFormatter::for_display("+44 20 7946 0958"),
            "+44 20 7946 0958"
        );
    }

    #[test]
    fn test_generic_two_character_split() {
        assert_eq!(
            DisplayFormatter::for_display("+639171234567"),
            "+63 9171234567"
        );
        assert_eq!(
            DisplayFormatter::for_display("+442079460958"),
            "+44 2079460958"
        );
    }

    #[test]
    fn test_generic_split_misgroups_other_code_lengths() {
        assert_eq!(
            DisplayFormatter::for_display("+971501234567"),
            "+97 1501234567"
        );
        // +1 with 11 national digits misses the special case
        assert_eq!(
            DisplayFormatter::for_display("+155512345678"),
            "+15 5512345678"
        );
        assert_eq!(
            DisplayFormatter::for_display("+79161234567"),
            "+79 161234567"
        );
    }

    #[test]
    fn test_short_and_unprefixed_input() {
        assert_eq!(DisplayFormatter::for_display(""), "");
        assert_eq!(DisplayFormatter::for_display("+63"), "+63 ");
        assert_eq!(DisplayFormatter::for_display("+6"), "+6 ");
        assert_eq!(DisplayFormatter::for_display("5551234567"), "5551234567");
    }
}
