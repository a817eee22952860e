pub mod book_card;
pub mod catalog_grid;
pub mod loading_screen;
pub mod notification_modal;
pub mod storefront_panel;
