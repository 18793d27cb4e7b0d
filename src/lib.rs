pub mod config;
pub mod data;
pub mod stats;
pub mod ui;
pub mod util;

pub use config::Config;
pub use data::{AddError, Store, StoreError, Student};
pub use ui::App;
