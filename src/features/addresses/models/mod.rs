mod payload;
mod scheme;

pub use payload::{extract_identifier, extract_name, AddressLevel};
pub use scheme::IdentifierScheme;
