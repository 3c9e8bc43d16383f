//! Dog search: query state, pagination and the search orchestrator.

pub mod orchestrator;
pub mod pagination;
pub mod query;

pub use orchestrator::{
    run_search, SearchOrchestrator, SearchOutcome, SearchPage, SearchStatus, SearchTicket,
    SEARCH_ERROR_MESSAGE,
};
pub use pagination::{
    clamp_page, offset, page_count, page_items, JumpPrompt, JumpSide, PageIndicator, PageItem,
    PAGE_SIZE,
};
pub use query::SearchQuery;
