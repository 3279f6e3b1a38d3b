pub mod fixture;
pub mod fixture_datetime;
pub mod fixture_model;
pub mod fixture_record;
