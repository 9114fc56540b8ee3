pub mod controller;
pub mod memory;
pub mod view;

#[cfg(test)]
mod tests;

pub use controller::*;
pub use memory::*;
pub use view::*;
