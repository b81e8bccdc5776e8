//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and runs against the record store.

pub mod approve;
pub mod home;
pub mod list;
pub mod show;
pub mod sitemap;
pub mod submit;
pub mod tags;

pub use approve::execute as approve;
pub use home::execute as home;
pub use list::execute as list;
pub use show::execute as show;
pub use sitemap::{execute as sitemap, robots};
pub use submit::execute as submit;
pub use tags::execute as tags;
