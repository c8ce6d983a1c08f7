pub mod vendor;
pub mod vendor_items;

pub use vendor::Entity as Vendors;
pub use vendor_items::Entity as VendorItems;
