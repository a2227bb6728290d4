//! Temperature sensor drivers

pub mod die;
pub mod ntc100k;

pub use die::DieSensor;
pub use ntc100k::Ntc100kSensor;
