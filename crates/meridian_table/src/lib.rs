pub mod assemble;
pub mod error;
pub mod groups;
pub mod parameters;
pub mod plugin;
pub mod resolve;
pub mod response;
pub mod slots;
pub mod validate;

pub use error::TableError;
pub use parameters::{TableParameters, TableRequest};
pub use plugin::DistanceTablePlugin;
pub use response::TableResponse;

#[cfg(test)]
pub(crate) mod test_utils;
