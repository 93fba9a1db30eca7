pub mod actions;
pub mod app;
pub mod details;
pub mod gallery;
pub mod preview;
pub mod table;
pub mod tax_panel;
pub mod terms;
pub mod toolbar;
