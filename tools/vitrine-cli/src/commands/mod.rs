//! CLI commands.

pub mod add;
pub mod cart;
pub mod clear;
pub mod promo;
pub mod qty;
pub mod remove;
pub mod shop;

pub use add::AddArgs;
pub use cart::CartArgs;
pub use clear::ClearArgs;
pub use promo::PromoArgs;
pub use qty::QtyArgs;
pub use remove::RemoveArgs;
pub use shop::ShopArgs;
