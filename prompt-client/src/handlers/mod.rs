pub mod app;

pub use app::{health_check, index, submit_fragment, submit_page};
