pub mod auth;
pub mod cart;
pub mod common;
pub mod currency;
pub mod icon;
pub mod layout;
pub mod notifications;
pub mod pages;
pub mod services;
pub mod storage;
pub mod theme;

pub use icon::{Icon, icons};
pub use layout::Header;
pub use notifications::ToastContainer;
pub use services::AppServices;
