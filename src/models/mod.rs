pub mod breakdown;
pub mod bucket;
pub mod dataset;
pub mod date_key;
pub mod reference;
pub mod sprint;
pub mod time_entry;

pub use breakdown::*;
pub use bucket::*;
pub use dataset::*;
pub use reference::*;
pub use sprint::*;
pub use time_entry::*;
