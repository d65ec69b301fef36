pub mod build;
pub mod categories;
pub mod completions;
pub mod import;
pub mod translate;
