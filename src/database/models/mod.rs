pub mod category;
pub mod item;
pub mod user;

pub use category::Category;
pub use item::{
    AvailabilityType, Condition, Item, ItemDetails, ItemListing, ItemStatus, NewItem,
};
pub use user::{NewUser, PublicUser, User};
