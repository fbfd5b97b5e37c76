//! LaTeX side of the pipeline: fixed templates, per-record fragments, document
//! assembly and the output file. Fragments are pure text; only `output` does I/O.

pub mod document;
pub mod output;
pub mod sections;
pub mod templates;

pub use document::{assemble, generate, load_sources, CvSources};
