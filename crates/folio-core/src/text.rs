//! Text shaping for cards and the modal.

/// Number of characters of the description shown on a card
pub const DESCRIPTION_PREVIEW_CHARS: usize = 92;

/// Marker appended to every card description
const PREVIEW_MARKER: &str = "...";

/// Card-sized preview of a description: the first
/// [`DESCRIPTION_PREVIEW_CHARS`] characters followed by the
/// truncation marker.
///
/// The marker is unconditional; short descriptions get it too, so
/// every card reads as an excerpt of the full text shown in the
/// modal. Counts Unicode scalar values, never splits a code point.
pub fn preview(description: &str) -> String {
    let head: String = description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
    format!("{head}{PREVIEW_MARKER}")
}

/// Split a comma-separated tag string into trimmed, non-empty labels.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Displayed tag labels for a record's tag field.
///
/// Accepts both encodings a record may carry: the ordered sequence,
/// or a single comma-separated string (the inlined-attribute card
/// encoding). Both normalize to the same trimmed, non-empty labels
/// in order.
pub fn tag_labels(tags: &[String]) -> Vec<String> {
    match tags {
        [single] if single.contains(',') => split_tags(single),
        _ => clean_tags(tags),
    }
}

/// Trim each tag of a sequence, dropping any that trim to nothing.
pub fn clean_tags(tags: &[String]) -> Vec<String> {
    tags.iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_description_is_cut_at_ninety_two_chars() {
        let long = "x".repeat(200);
        let p = preview(&long);
        assert_eq!(p, format!("{}...", "x".repeat(92)));
        assert_eq!(p.chars().count(), 95);
    }

    #[test]
    fn short_description_still_gets_the_marker() {
        let short = "y".repeat(50);
        assert_eq!(preview(&short), format!("{}...", "y".repeat(50)));
    }

    #[test]
    fn preview_counts_chars_not_bytes() {
        let s = "é".repeat(100);
        let p = preview(&s);
        assert!(p.starts_with(&"é".repeat(92)));
        assert!(p.ends_with("..."));
    }

    #[test]
    fn split_tags_trims_and_drops_empties() {
        assert_eq!(
            split_tags(" UI , Frontend ,, CSS "),
            vec!["UI", "Frontend", "CSS"]
        );
        assert!(split_tags("").is_empty());
        assert!(split_tags(" , ,").is_empty());
    }

    #[test]
    fn sequence_and_comma_string_normalize_identically() {
        let seq = vec![" UI ".to_string(), "Frontend".to_string()];
        assert_eq!(clean_tags(&seq), split_tags(" UI ,Frontend"));
    }

    #[test]
    fn tag_labels_accepts_both_record_encodings() {
        let sequence = vec!["UI".to_string(), "Frontend".to_string()];
        let inlined = vec!["UI, Frontend".to_string()];
        assert_eq!(tag_labels(&sequence), vec!["UI", "Frontend"]);
        assert_eq!(tag_labels(&inlined), tag_labels(&sequence));
    }

    #[test]
    fn tag_labels_keeps_a_single_plain_tag() {
        let single = vec![" DOM ".to_string()];
        assert_eq!(tag_labels(&single), vec!["DOM"]);
    }
}
