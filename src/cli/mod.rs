pub mod display;
pub mod menu;
pub mod seed;

pub use display::{display_books, display_members};
pub use menu::run;
pub use seed::load_demo_data;
