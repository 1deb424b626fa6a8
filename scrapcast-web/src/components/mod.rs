pub mod daisy_ui;
pub mod footer;
pub mod header;
pub mod ui;
