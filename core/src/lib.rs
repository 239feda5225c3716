// Button Creator - Core Library

pub mod models;
pub mod preview;
pub mod settings;
pub mod snippet;

pub use models::*;
pub use preview::*;
pub use settings::*;
pub use snippet::*;
