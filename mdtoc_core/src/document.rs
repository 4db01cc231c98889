use crate::Heading;
use crate::SkipReason;
use crate::heading::heading_level;
use crate::heading::is_section_heading;
use crate::heading::render_toc;
use crate::heading::scan_headings;

/// The line terminator a document uses, taken from its title line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineEnding {
	#[default]
	Lf,
	CrLf,
}

impl LineEnding {
	/// Detect the line ending of a single line. Lines without a terminator
	/// fall back to `\n`.
	pub fn of_line(line: &str) -> Self {
		if line.ends_with("\r\n") {
			Self::CrLf
		} else {
			Self::Lf
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Lf => "\n",
			Self::CrLf => "\r\n",
		}
	}
}

/// A markdown document split into lines, each keeping its terminator so the
/// document can be reassembled byte for byte.
#[derive(Debug, Clone)]
pub struct Document<'a> {
	lines: Vec<&'a str>,
}

/// The outcome of generating a table of contents for a valid document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocDocument {
	/// The full document with the table of contents in place.
	pub content: String,
	/// The rendered table of contents on its own.
	pub toc: String,
	/// The headings listed in the table of contents.
	pub headings: Vec<Heading>,
}

impl<'a> Document<'a> {
	pub fn new(source: &'a str) -> Self {
		Self {
			lines: source.split_inclusive('\n').collect(),
		}
	}

	pub fn line_ending(&self) -> LineEnding {
		self.lines
			.first()
			.map_or(LineEnding::Lf, |line| LineEnding::of_line(line))
	}

	/// Check that the document can receive a table of contents and return the
	/// index of its first level-2 heading.
	///
	/// The document must open with a heading, and the first heading after it
	/// must be a level-2 heading. Code fences are not considered here.
	pub fn validate(&self) -> Result<usize, SkipReason> {
		let Some(title) = self.lines.first() else {
			return Err(SkipReason::MissingTitle);
		};
		if heading_level(title).is_none() {
			return Err(SkipReason::MissingTitle);
		}

		for (index, line) in self.lines.iter().enumerate().skip(1) {
			if is_section_heading(line) {
				return Ok(index);
			}
			if heading_level(line).is_some() {
				return Err(SkipReason::HeadingBeforeSection { line: index + 1 });
			}
		}

		Err(SkipReason::NoSections)
	}

	/// All headings that belong in the table of contents.
	pub fn headings(&self) -> Vec<Heading> {
		scan_headings(self.lines.iter().copied())
	}

	/// Replace everything between the title and the line at `boundary` with
	/// `toc` followed by a blank line.
	pub fn inject(&self, boundary: usize, toc: &str) -> String {
		let mut content = String::with_capacity(self.len() + toc.len());
		if let Some(title) = self.lines.first() {
			content.push_str(title);
		}
		content.push_str(toc);
		content.push_str(self.line_ending().as_str());
		for line in self.lines.iter().skip(boundary) {
			content.push_str(line);
		}
		content
	}

	/// Validate the document, scan its headings and inject the resulting table
	/// of contents.
	pub fn with_toc(&self) -> Result<TocDocument, SkipReason> {
		let boundary = self.validate()?;
		let headings = self.headings();
		let toc = render_toc(&headings, self.line_ending().as_str());
		let content = self.inject(boundary, &toc);

		Ok(TocDocument {
			content,
			toc,
			headings,
		})
	}

	fn len(&self) -> usize {
		self.lines.iter().map(|line| line.len()).sum()
	}
}

/// Insert or refresh the table of contents of a markdown source.
///
/// ```rust
/// use mdtoc_core::insert_toc;
///
/// let source = "# Title\n\nOld intro.\n\n## Section One\n### Sub Section\n";
/// let result = insert_toc(source).unwrap();
/// assert_eq!(
/// 	result.content,
/// 	"# Title\n* [Section One](#section-one)\n    * [Sub Section](#sub-section)\n\n## Section One\n### Sub Section\n"
/// );
/// ```
pub fn insert_toc(source: &str) -> Result<TocDocument, SkipReason> {
	Document::new(source).with_toc()
}
