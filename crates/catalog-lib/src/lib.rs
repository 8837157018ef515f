#[macro_use]
extern crate log;

pub mod catalog;
pub mod classification;
pub mod copy;
pub mod error;
pub mod html;
pub mod models;
pub mod prelude;
pub mod surface;
