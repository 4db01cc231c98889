use std::path::Path;
use std::path::PathBuf;

/// Name of the file holding ignore patterns, looked up in the root
/// directory.
pub const IGNORE_FILE_NAME: &str = ".tocignore";

/// Options for a single run over a directory.
///
/// ```rust
/// use mdtoc_core::config::TocOptions;
///
/// let options = TocOptions::new("docs");
/// assert!(!options.dry_run);
/// assert!(options.ignore_file().ends_with(".tocignore"));
/// ```
#[derive(Debug, Clone)]
pub struct TocOptions {
	/// Directory that is walked for markdown files.
	pub root: PathBuf,
	/// Compute results without writing any file.
	pub dry_run: bool,
	/// Skip paths excluded by `.gitignore` files.
	pub respect_gitignore: bool,
}

impl TocOptions {
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self {
			root: root.into(),
			dry_run: false,
			respect_gitignore: false,
		}
	}

	/// Location of the ignore file for this run.
	pub fn ignore_file(&self) -> PathBuf {
		self.root.join(IGNORE_FILE_NAME)
	}

	pub fn root(&self) -> &Path {
		&self.root
	}
}
