//! Domain data types exchanged with the API.

pub mod entity;
pub mod filter;
pub mod module;
pub mod notification;

pub use entity::{Entity, EntityRef, ModuleRef};
pub use filter::{FilterClause, FilterExpression, FilterOperator, FilterValue};
pub use module::{Field, Module, ModuleOptions};
pub use notification::{Notification, NotificationRef};
