pub mod panel;

pub use panel::{PanelMarkup, PanelMarkupProps};
