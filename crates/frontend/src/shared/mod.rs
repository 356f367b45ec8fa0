pub mod amount_in_words;
pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod export;
pub mod icons;
pub mod in_flight;
pub mod list_utils;
pub mod modal;
pub mod notifications;
pub mod pdf;
pub mod resource;
