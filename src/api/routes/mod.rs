//! API Routes
//!
//! Route handlers organized by functionality.

pub mod exercises;
pub mod health;
pub mod landing;
pub mod logs;
pub mod users;
