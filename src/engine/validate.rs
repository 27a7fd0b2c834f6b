/// Uppercase and drop every whitespace character.
pub fn normalize_answer(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

pub fn answer_matches(solution: &str, answer: &str) -> bool {
    normalize_answer(answer) == normalize_answer(solution)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_case_and_whitespace() {
        assert!(answer_matches("CAT", "cat"));
        assert!(answer_matches("CAT", " C A T "));
        assert!(answer_matches("El Nido", "elnido"));
        assert!(answer_matches("ELNIDO", "el\tni\ndo"));
    }

    #[test]
    fn empty_answer_never_matches() {
        assert!(!answer_matches("CAT", ""));
        assert!(!answer_matches("CAT", "   "));
    }

    #[test]
    fn different_letters_do_not_match() {
        assert!(!answer_matches("CAT", "CART"));
        assert!(!answer_matches("1234567890", "123456789"));
    }
}
