pub mod metrics;
pub mod metrics_key;
pub mod request_id;

pub use self::metrics::metrics_middleware;
pub use metrics_key::require_metrics_key;
pub use request_id::request_id_middleware;
