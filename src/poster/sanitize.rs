/// Punctuation kept on the poster, besides letters, digits and whitespace
const ALLOWED_PUNCTUATION: &[char] = &['’', '!', '?'];

/// `'` through `:` in ASCII: apostrophe, parentheses, `* + , - . /`, digits and colon
const ALLOWED_ASCII_RANGE: std::ops::RangeInclusive<char> = '\''..=':';

fn is_latin1_letter(c: char) -> bool {
    ('\u{C0}'..='\u{FF}').contains(&c) && c != '×' && c != '÷'
}

fn is_allowed(c: char) -> bool {
    c.is_alphanumeric()
        || c == '_'
        || c.is_whitespace()
        || is_latin1_letter(c)
        || ALLOWED_ASCII_RANGE.contains(&c)
        || ALLOWED_PUNCTUATION.contains(&c)
}

/// Strip characters the poster should not render, collapse whitespace runs and trim.
pub fn sanitize_for_poster(text: &str) -> String {
    let filtered: String = text.chars().filter(|&c| is_allowed(c)).collect();

    let mut out = String::with_capacity(filtered.len());
    let mut chars = filtered.chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_whitespace() && chars.peek().is_some_and(|n| n.is_whitespace()) {
            while chars.peek().is_some_and(|n| n.is_whitespace()) {
                chars.next();
            }
            out.push(' ');
        } else {
            out.push(c);
        }
    }

    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_french_copy_intact() {
        assert_eq!(
            sanitize_for_poster("Mission assignée : Rideau (14 février)."),
            "Mission assignée : Rideau (14 février)."
        );
    }

    #[test]
    fn keeps_apostrophe_to_colon_range() {
        assert_eq!(sanitize_for_poster("(a+b)*c/d - 1:2"), "(a+b)*c/d - 1:2");
        // Just outside the range on either side
        assert_eq!(sanitize_for_poster("a&b;c<d"), "abcd");
    }

    #[test]
    fn strips_symbols_and_collapses_resulting_gap() {
        assert_eq!(
            sanitize_for_poster("Célibataire & en mission — on se retrouve"),
            "Célibataire en mission on se retrouve"
        );
    }

    #[test]
    fn keeps_typographic_apostrophe() {
        assert_eq!(sanitize_for_poster("l’évangélisation !"), "l’évangélisation !");
    }

    #[test]
    fn trims_and_collapses() {
        assert_eq!(sanitize_for_poster("  a \t\n b   c  "), "a b c");
    }

    #[test]
    fn single_inner_whitespace_is_left_alone() {
        assert_eq!(sanitize_for_poster("a\tb"), "a\tb");
    }

    #[test]
    fn empty_output_is_fine() {
        assert_eq!(sanitize_for_poster("<>{}[]&@#"), "");
        assert_eq!(sanitize_for_poster(""), "");
    }

    #[test]
    fn drops_latin1_math_signs() {
        assert_eq!(sanitize_for_poster("2×3÷1"), "231");
    }

    #[test]
    fn output_is_allowed_collapsed_and_idempotent() {
        let samples = [
            "Statut confirmé — <b>bold</b>   &&  ✨ emoji 🎉!!",
            "  \u{00A0}\u{2003} mixed\u{00A0}\u{00A0}spaces ",
            "Je suis célibataire… vraiment ? «oui»",
            "tabs\t\t\tand\n\nnewlines",
            "ÀÉÎÕÜ àéîõü ÿ ñ ç – — ‘quoted’",
        ];
        for sample in samples {
            let once = sanitize_for_poster(sample);
            assert!(once.chars().all(is_allowed), "{once:?}");
            let chars: Vec<char> = once.chars().collect();
            assert!(
                !chars.windows(2).any(|w| w[0].is_whitespace() && w[1].is_whitespace()),
                "{once:?}"
            );
            assert_eq!(sanitize_for_poster(&once), once);
        }
    }
}
