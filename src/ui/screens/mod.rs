pub(crate) mod entry;
pub(crate) mod summary;
pub(crate) mod table;
