pub mod client;
pub mod models;
pub mod multipart;
pub mod params;
pub mod response;
pub mod transport;

#[cfg(test)]
pub(crate) mod mock;
