use obo_core::CoreError;
use obo_graph::OboError;

/// Map a loader error onto the error kind reported to the host
pub fn to_core_error(err: OboError) -> CoreError {
    match err {
        OboError::InvalidInput(msg) => CoreError::InvalidInput(msg),
        err @ OboError::Parse { .. } => CoreError::ParseFailure(err.to_string()),
        OboError::Io(e) => CoreError::IOError(e.to_string()),
    }
}
