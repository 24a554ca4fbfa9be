mod load_result;
pub mod models;
mod validation;

pub use load_result::LoadResult;
pub use models::*;
pub use validation::validate_username;
