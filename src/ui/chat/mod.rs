//! Chat window components.
//!
//! The `#message-list` element is the unit of refresh: the send endpoint
//! returns it directly and the SSE stream pushes it on every conversation
//! change.

mod bubble;
mod header;
mod input_area;
mod message_list;
mod shell;

pub use bubble::render_bubble;
pub use header::render_header;
pub use input_area::render_input_area;
pub use message_list::{MESSAGE_LIST_ID, render_message_list};
pub use shell::render_chat_window;
