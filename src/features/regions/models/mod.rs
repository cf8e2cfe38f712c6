mod district;
mod province;
mod regency;
mod village;

pub use district::District;
pub use province::Province;
pub use regency::Regency;
pub use village::Village;
