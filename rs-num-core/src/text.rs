use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

/// Splits a string into user-perceived characters (extended graphemes).
///
/// The input is first normalized to NFC, so a base letter followed by
/// combining marks collapses into its precomposed form when one exists.
/// Sequences with no precomposed form (emoji modifiers, ZWJ sequences,
/// stacked marks) still come out as a single grapheme.
///
/// Examples:
/// - `"世界"` → `["世", "界"]`
/// - `"e\u{301}a"` → `["é", "a"]`
/// - `""` → `[]`
pub fn split_graphemes(s: &str) -> Vec<String> {
	let normalized: String = s.nfc().collect();
	normalized
		.graphemes(true)
		.map(str::to_owned)
		.collect()
}

/// Returns the number of user-perceived characters in `s`.
///
/// Same counting rules as [`split_graphemes`].
pub fn grapheme_count(s: &str) -> usize {
	let normalized: String = s.nfc().collect();
	normalized.graphemes(true).count()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_input_yields_nothing() {
		assert!(split_graphemes("").is_empty());
		assert_eq!(grapheme_count(""), 0);
	}

	#[test]
	fn multi_byte_characters_are_single_units() {
		assert_eq!(split_graphemes("世界"), vec!["世", "界"]);
		assert_eq!(grapheme_count("😀😁😂🤣😄😅"), 6);
		assert_eq!(grapheme_count("𠜎𠜱"), 2);
	}

	#[test]
	fn combining_marks_are_composed() {
		let split = split_graphemes("e\u{301}a");
		assert_eq!(split, vec!["\u{e9}", "a"]);
	}

	#[test]
	fn sequences_without_precomposed_form_stay_together() {
		// q + combining acute has no precomposed code point
		assert_eq!(split_graphemes("q\u{301}x"), vec!["q\u{301}", "x"]);
		// thumbs up + skin tone modifier
		assert_eq!(grapheme_count("👍🏽👍"), 2);
		// family emoji joined with ZWJ
		assert_eq!(grapheme_count("👨\u{200d}👩\u{200d}👧"), 1);
	}
}
