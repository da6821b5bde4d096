pub mod lead;
pub mod message;

pub use lead::{Lead, ScheduledDrop};
pub use message::{DispatchResult, DispatchStatus, MessageRequest};
