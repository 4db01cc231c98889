//! `mdtoc_core` is the core library for [mdtoc](https://github.com/ifiokjr/mdtoc). It inserts and refreshes the table of contents of markdown documents so that their navigation always matches their headings.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Directory
//!   → File selector (walks the tree, keeps `*.md` files not excluded by `.tocignore`)
//!   → Validator (title on line 1, first heading after it is a `##` heading)
//!   → Heading scanner (levels 2–6 outside fenced code blocks)
//!   → Anchor generator (GitHub-style slug per heading)
//!   → Injector (replaces everything between the title and the first `##` heading)
//! ```
//!
//! ## Modules
//!
//! - [`config`] — Run options and the location of the `.tocignore` file.
//! - [`project`] — Directory walking and ignore patterns.
//!
//! ## Key Types
//!
//! - [`Document`] — A markdown source split into lines, with validation and injection.
//! - [`Heading`] — A heading with its level, label and anchor.
//! - [`SkipReason`] — Why a document was left untouched.
//! - [`RunSummary`] — Per-file outcomes of a run.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mdtoc_core::config::TocOptions;
//! use mdtoc_core::run;
//!
//! let summary = run(&TocOptions::new(".")).unwrap();
//! println!("{} file(s) updated", summary.updated_count());
//! ```

pub use anchor::*;
pub use document::*;
pub use engine::*;
pub use error::*;
pub use heading::*;

mod anchor;
pub mod config;
mod document;
mod engine;
#[allow(unused_assignments)]
mod error;
mod heading;
pub mod project;
