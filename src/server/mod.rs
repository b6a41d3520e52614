// Server module entry point
// Listener setup and the accept loop

pub mod connection;
pub mod listener;

// `loop` is a keyword, so the module gets an explicit path
#[path = "loop.rs"]
pub mod server_loop;

// Re-export commonly used types
pub use listener::create_listener;
pub use server_loop::start_server_loop;
