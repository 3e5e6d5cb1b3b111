//! Report renderers for a finished comparison.
//!
//! ```
//! use trackdiff_core::evolution::{compare_track_texts, EvolutionOptions};
//! use trackdiff_core::report::{render_text_report, RenderOptions};
//!
//! let (_, _, evolution) =
//!     compare_track_texts("s-a\n", "s-a\n", &EvolutionOptions::default()).unwrap();
//! let text = render_text_report(&evolution, &RenderOptions::plain(80));
//! assert!(text.contains("No semantic changes detected."));
//! ```

pub mod json;
pub mod text;

pub use json::render_json_report;
pub use text::render_text_report;

/// Presentation settings for the text report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit ANSI colour escapes
    pub color: bool,
    /// Maximum terminal columns per line; 0 disables truncation
    pub max_width: usize,
}

impl RenderOptions {
    /// Black/white output truncated to `max_width`.
    pub fn plain(max_width: usize) -> Self {
        Self {
            color: false,
            max_width,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            color: true,
            max_width: 80,
        }
    }
}
