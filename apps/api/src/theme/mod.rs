// Theme resolution: template defaults overlaid with a résumé's customizations.
// Pure and synchronous; recomputed on every render, never cached.

pub mod apply;
pub mod merge;

pub use apply::{apply_customizations, AppliedTheme};
