pub mod access_records;
pub mod topics;
pub mod webpages;

pub use access_records::*;
pub use topics::*;
pub use webpages::*;
