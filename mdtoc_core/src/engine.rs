use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use crate::Document;
use crate::SkipReason;
use crate::TocError;
use crate::TocResult;
use crate::config::TocOptions;
use crate::project::IgnorePatterns;
use crate::project::MarkdownFile;
use crate::project::collect_markdown_files;

/// What happened to a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
	/// The table of contents changed and the file was (or, in a dry run,
	/// would be) rewritten.
	Updated,
	/// The regenerated content is identical to what is on disk.
	Unchanged,
	/// The document's structure does not allow a table of contents.
	Skipped(SkipReason),
}

/// The result of processing one file.
#[derive(Debug, Clone)]
pub struct FileReport {
	pub path: PathBuf,
	/// Path relative to the root, `/`-separated.
	pub relative: String,
	pub outcome: FileOutcome,
	/// Number of entries in the generated table of contents.
	pub headings: usize,
}

/// The result of a run over a directory.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
	pub reports: Vec<FileReport>,
	pub dry_run: bool,
}

impl RunSummary {
	pub fn is_empty(&self) -> bool {
		self.reports.is_empty()
	}

	pub fn updated(&self) -> impl Iterator<Item = &FileReport> {
		self.reports
			.iter()
			.filter(|report| report.outcome == FileOutcome::Updated)
	}

	pub fn updated_count(&self) -> usize {
		self.updated().count()
	}

	pub fn unchanged_count(&self) -> usize {
		self.reports
			.iter()
			.filter(|report| report.outcome == FileOutcome::Unchanged)
			.count()
	}

	pub fn skipped_count(&self) -> usize {
		self.reports
			.iter()
			.filter(|report| matches!(report.outcome, FileOutcome::Skipped(_)))
			.count()
	}
}

/// Generate tables of contents for every markdown file under the root.
pub fn run(options: &TocOptions) -> TocResult<RunSummary> {
	tracing::info!("generating tables of contents");

	let patterns = IgnorePatterns::load(&options.ignore_file())?;
	tracing::debug!(patterns = patterns.len(), "loaded ignore patterns");

	let files = collect_markdown_files(options, &patterns)?;
	let mut summary = RunSummary {
		reports: Vec::with_capacity(files.len()),
		dry_run: options.dry_run,
	};

	if files.is_empty() {
		tracing::warn!("no markdown files found");
		return Ok(summary);
	}

	tracing::debug!(
		files = ?files.iter().map(|file| file.relative.as_str()).collect::<Vec<_>>(),
		"working with files"
	);

	for file in &files {
		summary.reports.push(process_file(file, options)?);
	}

	tracing::info!("done");
	Ok(summary)
}

/// Read a single file, regenerate its table of contents and write it back
/// unless nothing changed or this is a dry run.
pub fn process_file(file: &MarkdownFile, options: &TocOptions) -> TocResult<FileReport> {
	let source = std::fs::read_to_string(&file.path)?;
	let document = Document::new(&source);

	let result = match document.with_toc() {
		Ok(result) => result,
		Err(reason) => {
			tracing::warn!(file = %file.relative, "file {}, skipping", reason);
			return Ok(report(file, FileOutcome::Skipped(reason), 0));
		}
	};

	tracing::debug!(
		file = %file.relative,
		"prepared the table of contents:\n{}",
		result.toc
	);

	let headings = result.headings.len();
	if result.content == source {
		tracing::debug!(file = %file.relative, "already up to date");
		return Ok(report(file, FileOutcome::Unchanged, headings));
	}

	if !options.dry_run {
		write_atomic(&file.path, &result.content)?;
		tracing::debug!(file = %file.relative, "file updated");
	}

	Ok(report(file, FileOutcome::Updated, headings))
}

fn report(file: &MarkdownFile, outcome: FileOutcome, headings: usize) -> FileReport {
	FileReport {
		path: file.path.clone(),
		relative: file.relative.clone(),
		outcome,
		headings,
	}
}

/// Replace the contents of `path` by writing to a sibling temporary file and
/// renaming it over the original. The original permissions are kept.
///
/// Symlinks are resolved first so the link's target is replaced, not the
/// link.
pub fn write_atomic(path: &Path, content: &str) -> TocResult<()> {
	let target = std::fs::canonicalize(path)?;
	let path = target.as_path();
	let dir = path
		.parent()
		.filter(|parent| !parent.as_os_str().is_empty())
		.unwrap_or_else(|| Path::new("."));
	let permissions = std::fs::metadata(path)?.permissions();

	let mut temp = NamedTempFile::new_in(dir)?;
	temp.write_all(content.as_bytes())?;
	temp.as_file().sync_all()?;
	temp.as_file().set_permissions(permissions)?;

	temp.persist(path).map_err(|e| {
		TocError::Persist {
			path: path.display().to_string(),
			reason: e.error.to_string(),
		}
	})?;

	Ok(())
}
