pub mod identity;
pub mod page_fetcher;

pub use identity::*;
pub use page_fetcher::*;
