//! Page chrome shared by every route

mod header;

pub use header::Header;
