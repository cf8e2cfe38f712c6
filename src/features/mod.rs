pub mod addresses;
pub mod regions;
