//! Collection API operations

mod artworks;
mod page;
mod source;

pub use page::Page;
pub use page::Pagination;
pub use source::PageSource;
