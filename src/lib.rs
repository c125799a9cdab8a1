pub mod encoding;
pub mod ui;
pub mod utils;
