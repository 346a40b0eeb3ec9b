pub mod slot;
pub mod table;
