//! HTML chart documents.

pub mod gantt;
pub mod html;

pub use gantt::{GanttSpan, render_gantt_html};
pub use html::render_treemap_html;
