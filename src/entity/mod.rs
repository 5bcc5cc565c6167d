pub mod cart_items;
pub mod users;

pub use cart_items::Entity as CartItems;
pub use users::Entity as Users;
