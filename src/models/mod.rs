// Module exports for models

pub mod item;
pub mod layout;
pub mod settings;
pub mod window;
