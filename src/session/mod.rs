pub mod headless_mode;
pub mod messages;
pub mod store;
pub mod tui_mode;

pub use headless_mode::{run_headless_fetch, run_headless_login};
pub use store::{Credential, FileSessionStore, SessionStore};

#[cfg(test)]
pub use store::MemorySessionStore;
pub use tui_mode::run_tui_mode;
