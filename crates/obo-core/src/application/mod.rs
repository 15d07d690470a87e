/// In-process host runtime for driving a single component
pub mod local_runtime;
