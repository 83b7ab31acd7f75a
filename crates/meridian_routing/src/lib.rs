pub mod bearing;
pub mod constants;
pub mod coordinate;
pub mod error;
pub mod facade;
pub mod hint;
pub mod network;
pub mod phantom_node;
pub mod timer;
pub mod types;

#[cfg(test)]
pub(crate) mod test_utils;
