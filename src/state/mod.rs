pub mod bom;
pub mod branding;
pub mod calculator;
pub mod data_model;
pub mod details;
pub mod document;
pub mod gallery;
pub mod i18n;
pub mod paginate;
pub mod quote_state;
pub mod session;
pub mod tax;
pub mod terms;
