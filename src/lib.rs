//! Derives group/permission views from an access-control registry export.

pub mod render;
pub mod report;
pub mod table;
