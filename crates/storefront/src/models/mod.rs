//! Domain models for the storefront.
//!
//! These types represent validated domain objects. Wire-level request and
//! response shapes live with the route handlers; the view types here
//! (`CartView`, `CartItemView`) are the one exception because the cart
//! listing's positional renumbering is a store contract, not a
//! presentation detail.

pub mod cart;
pub mod customer;
pub mod menu;
pub mod order;
pub mod user;

pub use cart::{CartItemView, CartLine, CartView};
pub use customer::{CustomerProfile, CustomerUpdate};
pub use menu::MenuItem;
pub use order::{Order, OrderLine, OrderLineInput};
pub use user::{OtpRecord, UserAccount};
