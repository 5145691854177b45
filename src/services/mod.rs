//! Multi-statement workflows. Each one runs inside a single [`UnitOfWork`].
//!
//! [`UnitOfWork`]: crate::db::UnitOfWork

pub mod assignments;
pub mod deletion;
pub mod onboarding;
pub mod profile;

#[cfg(test)]
pub(crate) mod test_support;
