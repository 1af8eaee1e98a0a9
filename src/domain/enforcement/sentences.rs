//! Sentence segmentation and clause splitting shared by enforcement
//! passes.

/// Sentence terminator characters.
fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Splits text into sentences, keeping terminators attached.
///
/// A sentence ends at a run of terminator characters followed by
/// whitespace or end of input. Trailing text without a terminator forms
/// a final sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);
        if is_terminator(c) {
            // Absorb terminator runs ("?!", "...").
            while let Some(&next) = chars.peek() {
                if is_terminator(next) {
                    current.push(next);
                    chars.next();
                } else {
                    break;
                }
            }
            let at_boundary = chars
                .peek()
                .map(|next| next.is_whitespace())
                .unwrap_or(true);
            if at_boundary {
                let trimmed = current.trim();
                if !trimmed.is_empty() {
                    sentences.push(trimmed.to_string());
                }
                current.clear();
            }
        }
    }
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
    sentences
}

/// Words in a sentence.
pub fn word_count(sentence: &str) -> usize {
    sentence.split_whitespace().count()
}

/// Rejoins sentences with single spaces.
pub fn join_sentences(sentences: &[String]) -> String {
    sentences.join(" ")
}

/// Minimum words each side of a clause split must keep.
const MIN_CLAUSE_WORDS: usize = 3;

/// Coordinating conjunctions usable as split points.
const CONJUNCTIONS: [&str; 5] = ["and", "but", "or", "so", "yet"];

/// Splits a sentence at the clause boundary nearest its midpoint.
///
/// Boundaries are commas and coordinating conjunctions. Returns `None`
/// when no boundary leaves at least `MIN_CLAUSE_WORDS` words on each
/// side; the caller then leaves the sentence unchanged and records a
/// flag instead of forcing a malformed split.
pub fn split_at_clause(sentence: &str) -> Option<(String, String)> {
    let words: Vec<&str> = sentence.split_whitespace().collect();
    if words.len() < MIN_CLAUSE_WORDS * 2 {
        return None;
    }

    let terminator: String = sentence
        .chars()
        .rev()
        .take_while(|c| is_terminator(*c))
        .collect();
    let terminator = if terminator.is_empty() {
        ".".to_string()
    } else {
        terminator.chars().rev().collect()
    };

    let midpoint = words.len() / 2;
    let mut best: Option<(usize, usize)> = None; // (distance, split index)

    for (index, word) in words.iter().enumerate() {
        let left_len = index + 1;
        let right_len = words.len() - left_len;

        // Split after a comma-terminated word.
        if word.ends_with(',')
            && left_len >= MIN_CLAUSE_WORDS
            && right_len >= MIN_CLAUSE_WORDS
        {
            let distance = midpoint.abs_diff(left_len);
            if best.map(|(d, _)| distance < d).unwrap_or(true) {
                best = Some((distance, index + 1));
            }
        }

        // Split before a coordinating conjunction.
        let lowered = word.to_lowercase();
        if CONJUNCTIONS.contains(&lowered.as_str())
            && index >= MIN_CLAUSE_WORDS
            && words.len() - index >= MIN_CLAUSE_WORDS
        {
            let distance = midpoint.abs_diff(index);
            if best.map(|(d, _)| distance < d).unwrap_or(true) {
                best = Some((distance, index));
            }
        }
    }

    let (_, split) = best?;
    let mut left = words[..split].join(" ");
    while left.ends_with(',') {
        left.pop();
    }
    left.push_str(&terminator);

    let mut right_words = words[split..].to_vec();
    // Drop a leading conjunction so the second sentence stands alone.
    if let Some(first) = right_words.first() {
        if CONJUNCTIONS.contains(&first.to_lowercase().as_str()) {
            right_words.remove(0);
        }
    }
    if right_words.len() < MIN_CLAUSE_WORDS {
        return None;
    }
    let mut right = right_words.join(" ");
    right = capitalize_first(&right);

    Some((left, right))
}

/// Upper-cases the first alphabetic character.
fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_terminators() {
        let sentences = split_sentences("First one. Second one! Third?");
        assert_eq!(sentences, vec!["First one.", "Second one!", "Third?"]);
    }

    #[test]
    fn keeps_terminator_runs_together() {
        let sentences = split_sentences("Really?! Yes... truly.");
        assert_eq!(sentences, vec!["Really?!", "Yes... truly."]);
    }

    #[test]
    fn trailing_text_without_terminator_is_a_sentence() {
        let sentences = split_sentences("Done. And a fragment");
        assert_eq!(sentences, vec!["Done.", "And a fragment"]);
    }

    #[test]
    fn abbreviation_like_runs_do_not_split_mid_token() {
        // A terminator not followed by whitespace stays inside the
        // sentence (e.g. version numbers).
        let sentences = split_sentences("Release 2.1 shipped today.");
        assert_eq!(sentences, vec!["Release 2.1 shipped today."]);
    }

    #[test]
    fn word_count_counts_whitespace_tokens() {
        assert_eq!(word_count("three word sentence"), 3);
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn clause_split_prefers_comma_near_midpoint() {
        let sentence = "The plan moved quickly through review, and the team shipped it after the summer freeze ended.";
        let (left, right) = split_at_clause(sentence).unwrap();
        assert_eq!(left, "The plan moved quickly through review.");
        assert_eq!(
            right,
            "The team shipped it after the summer freeze ended."
        );
    }

    #[test]
    fn clause_split_uses_conjunction_without_comma() {
        let sentence = "The metrics looked healthy all quarter but the retention curve told a very different story.";
        let (left, right) = split_at_clause(sentence).unwrap();
        assert_eq!(left, "The metrics looked healthy all quarter.");
        assert_eq!(right, "The retention curve told a very different story.");
    }

    #[test]
    fn short_sentences_have_no_safe_split() {
        assert!(split_at_clause("No split here.").is_none());
        assert!(split_at_clause("Five words, but too short.").is_none());
    }

    #[test]
    fn sentence_without_boundary_has_no_safe_split() {
        let sentence = "This sentence simply runs along without any internal punctuation at all today.";
        assert!(split_at_clause(sentence).is_none());
    }
}
