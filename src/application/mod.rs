// Application layer - Backend seam, list engines and view-controllers
pub mod dashboard_view;
pub mod detail_fetcher;
pub mod filter_engine;
pub mod list_view;
pub mod maintenance_backend;
pub mod pagination;
pub mod room_search_view;
pub mod scheduled_view;
pub mod session;
pub mod upcoming_view;
pub mod view_state;

#[cfg(test)]
pub(crate) mod test_support;
