pub mod use_push_route;
pub mod use_simulated_request;
pub mod use_title;

pub use use_push_route::use_push_route;
pub use use_simulated_request::{SimulatedRequest, use_simulated_request};
pub use use_title::use_title;
