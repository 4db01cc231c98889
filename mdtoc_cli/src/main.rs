use std::path::PathBuf;
use std::process;

use clap::Parser;
use mdtoc_cli::LogConfig;
use mdtoc_cli::MdtocCli;
use mdtoc_core::RunSummary;
use mdtoc_core::config::TocOptions;
use mdtoc_core::run;
use owo_colors::OwoColorize;

fn main() {
	let args = MdtocCli::parse();
	let log_config = LogConfig::from_cli(&args);
	log_config.init();

	let use_color = log_config.color;
	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let options = TocOptions {
		root: resolve_root(&args),
		dry_run: args.dry_run,
		respect_gitignore: args.gitignore,
	};

	match run(&options) {
		Ok(summary) => print_summary(&summary, use_color),
		Err(e) => {
			let report: miette::Report = e.into();
			eprintln!("{report:?}");
			process::exit(1);
		}
	}
}

fn resolve_root(args: &MdtocCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn print_summary(summary: &RunSummary, use_color: bool) {
	if summary.is_empty() {
		println!("No markdown files found.");
		return;
	}

	if summary.dry_run {
		println!("Dry run: would update {} file(s):", summary.updated_count());
		for report in summary.updated() {
			println!("  {} ({} heading(s))", report.relative, report.headings);
		}
		return;
	}

	let updated = format!("Updated {} file(s)", summary.updated_count());
	let updated = if use_color {
		updated.green().to_string()
	} else {
		updated
	};
	let skipped = format!("{} skipped", summary.skipped_count());
	let skipped = if use_color && summary.skipped_count() > 0 {
		skipped.yellow().to_string()
	} else {
		skipped
	};

	println!(
		"{updated}, {} already up to date, {skipped}.",
		summary.unchanged_count()
	);
}
