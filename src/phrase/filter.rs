//! Candidate phrase acceptability

/// Decide whether a candidate phrase is worth scoring
///
/// A phrase is rejected when it is shorter than `min_char_length`
/// characters, has more than `max_words_length` space-separated words,
/// contains no ASCII letter, or has more digits than letters.
pub fn is_acceptable(phrase: &str, min_char_length: usize, max_words_length: usize) -> bool {
    if phrase.chars().count() < min_char_length {
        return false;
    }

    if phrase.split(' ').count() > max_words_length {
        return false;
    }

    let (alpha, digits) = phrase.chars().fold((0usize, 0usize), |(alpha, digits), c| {
        (
            alpha + usize::from(c.is_ascii_alphabetic()),
            digits + usize::from(c.is_ascii_digit()),
        )
    });

    alpha > 0 && digits <= alpha
}
