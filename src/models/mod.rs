//! FUGA catalog model types.

mod artist;
mod asset;
mod common;
mod label;
mod person;
mod product;

pub use artist::*;
pub use asset::*;
pub use common::*;
pub use label::*;
pub use person::*;
pub use product::*;
