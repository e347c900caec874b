//! Wire contracts shared between the text-data processing server and the
//! browser client.

pub mod shared;
pub mod usecases;
