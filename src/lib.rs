pub mod io;
pub mod settings;
pub mod state;
pub mod ui;
