pub mod document;
pub mod record;
pub mod row;
pub mod table;
