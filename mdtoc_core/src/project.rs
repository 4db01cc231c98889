use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use ignore::WalkBuilder;
use regex::Regex;

use crate::TocError;
use crate::TocResult;
use crate::config::TocOptions;

/// Regular expressions excluding files from processing, loaded from
/// `.tocignore`.
///
/// A pattern excludes a path when it matches at the start of the
/// root-relative path, which uses `/` as its separator on every platform.
#[derive(Debug, Clone, Default)]
pub struct IgnorePatterns {
	patterns: Vec<Regex>,
}

impl IgnorePatterns {
	/// Load the patterns from `path`. A missing file yields an empty set.
	pub fn load(path: &Path) -> TocResult<Self> {
		if !path.is_file() {
			return Ok(Self::default());
		}

		let source = std::fs::read_to_string(path)?;
		Self::parse(&source, &path.display().to_string())
	}

	/// Parse one pattern per line. Non-printable characters are stripped
	/// before compiling and blank lines are skipped.
	pub fn parse(source: &str, file: &str) -> TocResult<Self> {
		let mut patterns = Vec::new();

		for (index, line) in source.lines().enumerate() {
			let pattern: String = line.chars().filter(|ch| is_printable(*ch)).collect();
			if pattern.trim().is_empty() {
				continue;
			}

			let regex = Regex::new(&format!("^(?:{pattern})")).map_err(|e| {
				TocError::InvalidIgnorePattern {
					file: file.to_string(),
					line: index + 1,
					pattern: pattern.clone(),
					reason: e.to_string(),
				}
			})?;
			patterns.push(regex);
		}

		Ok(Self { patterns })
	}

	pub fn len(&self) -> usize {
		self.patterns.len()
	}

	pub fn is_empty(&self) -> bool {
		self.patterns.is_empty()
	}

	/// Whether any pattern matches the start of `relative`.
	pub fn is_match(&self, relative: &str) -> bool {
		self.patterns.iter().any(|pattern| pattern.is_match(relative))
	}
}

/// Whether a character survives pattern cleanup. Control, format,
/// private-use and separator characters are rejected, except the ASCII space.
fn is_printable(ch: char) -> bool {
	if ch == ' ' {
		return true;
	}

	!(ch.is_control() || ch.is_whitespace() || is_format(ch) || is_private_use(ch))
}

/// Characters of the Unicode `Cf` (format) category.
fn is_format(ch: char) -> bool {
	matches!(
		ch,
		'\u{ad}'
			| '\u{600}'..='\u{605}'
			| '\u{61c}'
			| '\u{6dd}'
			| '\u{70f}'
			| '\u{890}'..='\u{891}'
			| '\u{8e2}'
			| '\u{180e}'
			| '\u{200b}'..='\u{200f}'
			| '\u{202a}'..='\u{202e}'
			| '\u{2060}'..='\u{2064}'
			| '\u{2066}'..='\u{206f}'
			| '\u{feff}'
			| '\u{fff9}'..='\u{fffb}'
			| '\u{110bd}'
			| '\u{110cd}'
			| '\u{13430}'..='\u{1343f}'
			| '\u{1bca0}'..='\u{1bca3}'
			| '\u{1d173}'..='\u{1d17a}'
			| '\u{e0001}'
			| '\u{e0020}'..='\u{e007f}'
	)
}

/// Characters of the Unicode `Co` (private use) category.
fn is_private_use(ch: char) -> bool {
	matches!(
		ch,
		'\u{e000}'..='\u{f8ff}' | '\u{f0000}'..='\u{ffffd}' | '\u{100000}'..='\u{10fffd}'
	)
}

/// A markdown file selected for processing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MarkdownFile {
	/// Path relative to the root, `/`-separated.
	pub relative: String,
	/// Path as found on disk.
	pub path: PathBuf,
}

/// Check whether a file name has a `.md` extension, ignoring case.
pub fn is_markdown_file(name: &str) -> bool {
	name.to_lowercase().ends_with(".md")
}

/// Whether a root-relative path is excluded from processing.
pub fn is_file_ignored(relative: &str, patterns: &IgnorePatterns) -> bool {
	!is_markdown_file(relative) || patterns.is_match(relative)
}

/// Render a path relative to `root` with `/` separators.
pub fn relative_path(path: &Path, root: &Path) -> String {
	let relative = path.strip_prefix(root).unwrap_or(path);
	relative
		.components()
		.filter_map(|component| {
			match component {
				Component::Normal(part) => Some(part.to_string_lossy()),
				_ => None,
			}
		})
		.collect::<Vec<_>>()
		.join("/")
}

/// Walk the root directory and collect every markdown file that is not
/// excluded by `patterns`, sorted by relative path.
pub fn collect_markdown_files(
	options: &TocOptions,
	patterns: &IgnorePatterns,
) -> TocResult<Vec<MarkdownFile>> {
	let root = options.root();
	let mut files = Vec::new();

	let walker = WalkBuilder::new(root)
		.standard_filters(false)
		.git_ignore(options.respect_gitignore)
		.require_git(false)
		.build();

	for entry in walker {
		let entry = entry.map_err(|e| {
			TocError::Walk {
				path: root.display().to_string(),
				reason: e.to_string(),
			}
		})?;

		// Symlinked files are candidates too; `is_file` follows the link.
		if !entry.path().is_file() {
			continue;
		}

		let relative = relative_path(entry.path(), root);
		if is_file_ignored(&relative, patterns) {
			continue;
		}

		files.push(MarkdownFile {
			relative,
			path: entry.into_path(),
		});
	}

	files.sort();
	Ok(files)
}
