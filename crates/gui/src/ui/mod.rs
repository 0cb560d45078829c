//! Side panels, toolbar and dialogs

pub mod catalog_panel;
pub mod designs;
pub mod layers;
pub mod properties;
pub mod status_bar;
pub mod toolbar;
