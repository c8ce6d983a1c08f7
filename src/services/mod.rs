pub mod cart_service;
pub mod catalog_service;
pub mod order_service;
pub mod review_service;
pub mod session_service;
pub mod tracker_service;
pub mod vendor_service;
pub mod view_service;
