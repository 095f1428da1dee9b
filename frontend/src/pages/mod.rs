pub mod devotionals;
pub mod not_found;

pub use devotionals::DevotionalsPage;
