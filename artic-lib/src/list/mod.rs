//! The paginated, selectable artwork list.
//!
//! [`ListState`] is the single state record. Its transitions hand out
//! requests ([`LoadRequest`], [`AccumulateRequest`]) that the caller performs
//! against a [`PageSource`](crate::api::PageSource) and reports back. Each
//! request carries a ticket so completions that arrive after the user moved
//! on are dropped instead of overwriting newer state.
//!
//! [`ListSession`](crate::session::ListSession) wires the two together for
//! callers that are happy to await each operation in turn.

mod accumulate;
mod config;
mod page_state;
mod row_count;
mod selection;
mod state;

pub use accumulate::Accumulation;
pub use accumulate::StopReason;
pub use accumulate::accumulate;
pub use config::ListConfig;
pub use page_state::PageChange;
pub use page_state::PageState;
pub use row_count::RowCount;
pub use selection::Selection;
pub use state::AccumulateRequest;
pub use state::ListState;
pub use state::LoadRequest;
pub use state::Ticket;
