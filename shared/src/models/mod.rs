//! Data models
//!
//! One file per entity, mirroring the remote service's JSON shapes.
//! Mutation payloads live next to the entity they mutate.

pub mod bill;
pub mod branch;
pub mod menu;
pub mod order;
pub mod restaurant;
pub mod staff;
pub mod table;

pub use bill::{Bill, DailyReport, PaymentMethod, PaymentReceipt, PaymentRequest};
pub use branch::{Branch, BranchCreate};
pub use menu::{MenuCategory, MenuCategoryCreate, MenuItem, MenuItemCreate, MenuItemUpdate};
pub use order::{Order, OrderLine, OrderStatus, OrderStatusUpdate};
pub use restaurant::{Restaurant, RestaurantCreate, RestaurantUpdate, ResetOwnerPassword};
pub use staff::{Staff, StaffCreate, StaffRole};
pub use table::{DiningTable, TableCreate, TableQr};
