// SKZ Browser services
// Services provide the capabilities the managers are wired to: paging
// arithmetic, synthetic search, page embedding, and preference handling.

pub mod embedder;
pub mod result_pager;
pub mod search_provider;
pub mod settings_engine;
