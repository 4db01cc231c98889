use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum TocError {
	#[error(transparent)]
	#[diagnostic(code(mdtoc::io_error))]
	Io(#[from] std::io::Error),

	#[error("invalid ignore pattern `{pattern}` at {file}:{line}: {reason}")]
	#[diagnostic(
		code(mdtoc::invalid_ignore_pattern),
		help("every line of `.tocignore` must be a valid regular expression")
	)]
	InvalidIgnorePattern {
		file: String,
		line: usize,
		pattern: String,
		reason: String,
	},

	#[error("failed to walk directory `{path}`: {reason}")]
	#[diagnostic(code(mdtoc::walk))]
	Walk { path: String, reason: String },

	#[error("failed to write `{path}`: {reason}")]
	#[diagnostic(
		code(mdtoc::persist),
		help("check that the file and its directory are writable")
	)]
	Persist { path: String, reason: String },
}

/// Why a document was left untouched.
///
/// These are not failures of the run. The file is reported as skipped and
/// processing continues with the next one.
#[derive(Debug, Clone, Copy, Diagnostic, Error, PartialEq, Eq)]
pub enum SkipReason {
	#[error("doesn't start with a header")]
	#[diagnostic(
		code(mdtoc::missing_title),
		help("the first line must be a level-1 heading such as `# Title`")
	)]
	MissingTitle,

	#[error("has another header (line {line}) between lvl1 and the first lvl2 headers")]
	#[diagnostic(
		code(mdtoc::heading_before_section),
		help("move or remove the heading so the first heading after the title is a `##` heading")
	)]
	HeadingBeforeSection {
		/// 1-indexed line number of the offending heading.
		line: usize,
	},

	#[error("doesn't have lvl2 headers")]
	#[diagnostic(code(mdtoc::no_sections))]
	NoSections,
}

pub type TocResult<T> = Result<T, TocError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
