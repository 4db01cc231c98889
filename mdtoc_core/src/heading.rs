use crate::anchor;

/// The deepest heading level that is listed in a table of contents.
pub const MAX_HEADING_LEVEL: usize = 6;

/// The level of the headings that open a document's sections.
pub const SECTION_LEVEL: usize = 2;

/// Lines starting with this marker open or close a fenced code block.
pub const CODE_FENCE: &str = "```";

/// Number of spaces each level below [`SECTION_LEVEL`] is indented by.
const INDENT_WIDTH: usize = 4;

/// A heading found while scanning a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
	/// Number of leading `#` characters, between 2 and 6.
	pub level: usize,
	/// The label with the `#` markers and surrounding whitespace removed.
	pub text: String,
	/// The fragment this heading is reachable at.
	pub anchor: String,
	/// 1-indexed line number within the document.
	pub line: usize,
}

impl Heading {
	/// Build a heading from a raw markdown line, returning `None` when the
	/// line is not a heading that belongs in a table of contents.
	pub fn from_line(line: &str, line_number: usize) -> Option<Self> {
		let level = heading_level(line)?;
		if !(SECTION_LEVEL..=MAX_HEADING_LEVEL).contains(&level) {
			return None;
		}

		let text = line.trim_start_matches('#').trim().to_string();
		let anchor = anchor(&text);

		Some(Self {
			level,
			text,
			anchor,
			line: line_number,
		})
	}

	/// Render the heading as a bulleted, indented link without a line ending.
	///
	/// ```rust
	/// use mdtoc_core::Heading;
	///
	/// let heading = Heading::from_line("### Sub Section\n", 3).unwrap();
	/// assert_eq!(heading.toc_entry(), "    * [Sub Section](#sub-section)");
	/// ```
	pub fn toc_entry(&self) -> String {
		let indent = " ".repeat(INDENT_WIDTH * self.level.saturating_sub(SECTION_LEVEL));
		format!("{indent}* [{}](#{})", self.text, self.anchor)
	}
}

/// The number of leading `#` characters, or `None` if the line does not
/// start with `#`.
pub fn heading_level(line: &str) -> Option<usize> {
	let level = line.bytes().take_while(|byte| *byte == b'#').count();
	(level > 0).then_some(level)
}

/// Whether the line opens a section: exactly two `#` followed by anything
/// other than another `#`.
pub fn is_section_heading(line: &str) -> bool {
	heading_level(line) == Some(SECTION_LEVEL)
}

/// Whether the line opens or closes a fenced code block.
pub fn is_code_fence(line: &str) -> bool {
	line.starts_with(CODE_FENCE)
}

/// Collect the headings of a document in order, skipping the title line.
///
/// Heading-like lines inside fenced code blocks are ignored, as are level-1
/// headings and anything deeper than [`MAX_HEADING_LEVEL`].
pub fn scan_headings<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<Heading> {
	let mut headings = Vec::new();
	let mut in_code_block = false;

	for (index, line) in lines.into_iter().enumerate().skip(1) {
		if is_code_fence(line) {
			in_code_block = !in_code_block;
			continue;
		}

		if in_code_block {
			continue;
		}

		if let Some(heading) = Heading::from_line(line, index + 1) {
			headings.push(heading);
		}
	}

	headings
}

/// Render the table of contents for the given headings. Every entry,
/// including the last, is terminated by `line_ending`.
pub fn render_toc(headings: &[Heading], line_ending: &str) -> String {
	let mut toc = String::new();
	for heading in headings {
		toc.push_str(&heading.toc_entry());
		toc.push_str(line_ending);
	}
	toc
}
