pub mod domain;

pub use domain::deployment::Deployment;
pub use domain::task::{project_name, TaskRequest};
