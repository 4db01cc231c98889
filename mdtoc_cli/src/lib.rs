use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Generate tables of contents for the markdown files in a directory.",
	long_about = "mdtoc generates tables of contents for the markdown files in the current \
	              directory and its subdirectories.\n\nThe table of contents is written between \
	              the `# Title` on the first line and the first `##` heading, replacing whatever \
	              was there before. Files whose first line is not a heading, that have no `##` \
	              headings, or that have another heading before the first `##` heading are \
	              left untouched.\n\nAdd regular expressions for files that should be ignored \
	              to a `.tocignore` file in the scanned directory, one per line."
)]
pub struct MdtocCli {
	/// Set the log level to DEBUG.
	#[arg(long, short, default_value_t = false)]
	pub debug: bool,

	/// Directory to scan. Defaults to the current working directory.
	#[arg(long, short)]
	pub path: Option<PathBuf>,

	/// Report which files would change without writing them.
	#[arg(long, default_value_t = false)]
	pub dry_run: bool,

	/// Skip files excluded by `.gitignore`.
	#[arg(long, default_value_t = false)]
	pub gitignore: bool,

	/// Disable colored output.
	#[arg(long, default_value_t = false)]
	pub no_color: bool,
}

impl MdtocCli {
	/// Whether colored output is enabled. `NO_COLOR` and `--no-color` both
	/// turn it off, as does a stderr that is not a terminal.
	pub fn use_color(&self) -> bool {
		!self.no_color
			&& std::env::var_os("NO_COLOR").is_none()
			&& supports_color::on(supports_color::Stream::Stderr).is_some()
	}
}

/// How log events are filtered and rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
	pub level: LevelFilter,
	pub color: bool,
}

impl LogConfig {
	pub fn from_cli(args: &MdtocCli) -> Self {
		let level = if args.debug {
			LevelFilter::DEBUG
		} else {
			LevelFilter::INFO
		};

		Self {
			level,
			color: args.use_color(),
		}
	}

	/// Build the event filter. `RUST_LOG` directives take precedence over the
	/// configured level.
	pub fn env_filter(&self) -> EnvFilter {
		EnvFilter::builder()
			.with_default_directive(self.level.into())
			.from_env_lossy()
	}

	/// Install a global subscriber writing to stderr.
	pub fn init(&self) {
		tracing_subscriber::fmt()
			.with_env_filter(self.env_filter())
			.with_ansi(self.color)
			.with_target(false)
			.without_time()
			.with_writer(std::io::stderr)
			.init();
	}
}
