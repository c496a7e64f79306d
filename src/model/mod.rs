// src/model/mod.rs
mod event;
mod fixed_params;
mod general;
mod record;

pub use event::KeyEvent;
pub use fixed_params::FixedParams;
pub use general::{GeneralInfo, SupplierInfo};
pub use record::SorRecord;
