pub mod config;
pub mod display;
pub mod event;
pub mod model;
pub mod render;
pub mod script;
pub mod util;

#[cfg(test)]
mod test_utils;
