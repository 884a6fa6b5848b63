//! Business logic services.

pub mod cart;

pub use cart::{AddedToCart, CartService, CartServiceError};
