pub mod navigator;
pub mod scroll;

pub use navigator::{Navigator, Screen, ViewState};
pub use scroll::{NoopScrollLock, ScrollLock, SharedScrollLock};
