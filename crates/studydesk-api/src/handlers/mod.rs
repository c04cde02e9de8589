//! API request handlers.

pub mod courses;
pub mod feedback;
pub mod health;
pub mod home;
pub mod suggestions;
pub mod tasks;

pub use courses::*;
pub use feedback::*;
pub use health::*;
pub use home::*;
pub use suggestions::*;
pub use tasks::*;
