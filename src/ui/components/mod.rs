//! Widgets the browser screen is assembled from.

pub mod detail;
pub mod footer;
pub mod header;
/// Region filter buttons and their hit boxes.
pub mod regions;
/// Result table plus the loading, empty and failure placeholders.
pub mod results;

pub use detail::{DetailContext, render_detail};
pub use footer::render_footer;
pub use header::{HeaderContext, render_header};
pub use regions::render_regions;
pub use results::{ResultRow, render_empty, render_failed, render_loading, render_results};
