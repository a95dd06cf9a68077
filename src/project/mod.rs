//! Project file structures

mod repr;

pub use repr::Project;

#[cfg(test)]
mod tests;
