pub mod org_catalog;
pub mod org_entry;
