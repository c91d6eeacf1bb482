pub mod components;
pub mod layout;
pub mod note_input;
pub mod theme;
