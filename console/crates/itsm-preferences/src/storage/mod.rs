pub(crate) mod file_storage;
pub(crate) mod memory_storage;
pub(crate) mod preference_storage;
