pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;
pub mod logging;

pub use application::clients::{BrowserClient, Payments, ServerClient};
pub use domain::fee::platform_fee;
