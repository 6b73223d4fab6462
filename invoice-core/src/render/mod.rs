//! Invoice document rendering: pure layout, font metrics, and PDF emission.

mod fonts;
mod layout;
mod metrics;
mod pdf;

pub use fonts::{FontError, InvoiceFonts, bold_sibling};
pub use layout::{Element, InvoiceLayout, TextStyle, layout_invoice};
pub use metrics::{TextMeasure, TtfMetrics};
pub use pdf::{Logo, LogoError, RenderError, render_invoice};
