//! Pure renderers turning a [`SystemSnapshot`](crate::system::snapshot::SystemSnapshot)
//! into terminal text or a standalone HTML page.

pub mod html;
pub mod text;

pub use html::render_html;
pub use text::render_text;
