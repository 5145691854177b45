//! Database access layer

pub mod departments;
pub mod employee_roles;
pub mod employee_shifts;
pub mod employees;
pub mod leave;
pub mod pool;
pub mod qualifications;
pub mod roles;
pub mod salary;
pub mod shifts;
pub mod unit_of_work;
pub mod update;

pub use pool::{create_pool, run_migrations};
pub use unit_of_work::UnitOfWork;
pub use update::{PartialUpdate, UpdateOutcome};
