mod build;
mod execute;
mod types;

pub(super) use build::{build_plan, load_and_apply_config};
pub(super) use execute::execute_plan;
