//! Parent favorites over a single membership relation

mod service;

#[cfg(test)]
mod tests;

pub use service::FavoritesService;
