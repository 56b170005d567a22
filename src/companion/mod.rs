//! The CoCo persona: recipe summaries and chat replies, both degrading to
//! canned text when the model cannot answer.

pub mod conversation;
pub mod summary;

pub use conversation::{ ensure_system_preamble, ConversationManager };
pub use summary::SummaryGenerator;
