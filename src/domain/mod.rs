// Domain layer - Records as the prediction service reports them
pub mod dashboard;
mod lenient;
pub mod maintenance;
pub mod service_status;

pub(crate) use lenient::elements;
