pub mod position;
pub mod record;
pub mod search_result;
