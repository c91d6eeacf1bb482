pub mod header;
pub mod note_panel;
pub mod quote_banner;
pub mod word_card;
