// Reusable components live here.

pub mod devotional_table;
pub mod editor_modal;
pub mod loading_spinner;
pub mod pagination;
pub mod toast;
