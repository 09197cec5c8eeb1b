pub mod home;
pub mod not_found;
pub mod search_results;
