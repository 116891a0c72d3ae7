pub mod subscription_table;

pub use subscription_table::SubscriptionTable;
