pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod memory;

pub use memory::InMemoryFavoriteRepository;
pub use r#trait::FavoriteRepository;

#[cfg(test)]
mod tests;
