//! GitHub-style anchor slugs for heading labels.

/// Convert a heading label into the fragment GitHub assigns to it.
///
/// - spaces and hyphens become `-`
/// - alphanumeric characters are kept, lowercased
/// - backticks toggle an inline code span and are dropped
/// - underscores inside a code span are kept
/// - underscores outside a code span are emphasis markers: they are dropped
///   in pairs, so an unpaired trailing underscore survives
/// - everything else is dropped
///
/// ```rust
/// use mdtoc_core::anchor;
///
/// assert_eq!(anchor("Getting Started"), "getting-started");
/// assert_eq!(anchor("`snake_case` Example"), "snake_case-example");
/// assert_eq!(anchor("_emphasis_ here"), "emphasis-here");
/// ```
pub fn anchor(label: &str) -> String {
	// Candidate output characters and whether they survive. Slots are only
	// ever flipped to dropped, never removed, so recorded indices stay valid.
	let mut slots: Vec<(char, bool)> = Vec::with_capacity(label.len());
	let mut in_code = false;
	let mut pending_underscore: Option<usize> = None;

	for ch in label.chars() {
		match ch {
			' ' | '-' => slots.push(('-', true)),
			'`' => in_code = !in_code,
			'_' if in_code => slots.push(('_', true)),
			'_' => {
				match pending_underscore.take() {
					Some(index) => slots[index].1 = false,
					None => {
						pending_underscore = Some(slots.len());
						slots.push(('_', true));
					}
				}
			}
			ch if ch.is_alphanumeric() => {
				slots.extend(ch.to_lowercase().map(|lower| (lower, true)));
			}
			_ => {}
		}
	}

	slots
		.into_iter()
		.filter_map(|(ch, keep)| keep.then_some(ch))
		.collect()
}
