pub mod department_pin;

pub use department_pin::{hash_pin, verify_pin};
