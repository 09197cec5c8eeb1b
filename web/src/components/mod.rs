pub mod bag_counter;
pub mod category_forms;
pub mod category_tabs;
pub mod empty_state;
pub mod how_it_works;
pub mod location_autocomplete;
pub mod navbar;
pub mod search_widget;
pub mod services_carousel;
pub mod time_slot_select;

// Re-export commonly used types
pub use how_it_works::HowItWorks;
pub use navbar::Navbar;
pub use search_widget::SearchWidget;
pub use services_carousel::ServicesCarousel;
