//! Remote listing API: client, request signing, and wire types.

pub mod client;
pub mod models;
mod sign;
