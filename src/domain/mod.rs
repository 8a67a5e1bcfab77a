pub mod models;
pub mod actions;
pub mod reducer;
pub mod services;
pub mod format;
pub mod errors;

pub use models::*;
pub use actions::*;
pub use reducer::*;
pub use services::*;
pub use format::*;
pub use errors::*;
