//!
//! Standard library of components for the OBO Reader
//!
//! Provides the `OboReader` component together with the table builders that
//! flatten a parsed ontology graph into a nodes table and an edges table.
//!

use obo_core::{ComponentExecutor, CoreError};

pub mod components;
pub mod config;
pub mod error;
pub mod tables;

pub use components::OboReader;
pub use config::{ColumnDetection, OboReaderConfig};
pub use tables::{build_output_tables, ColumnSelectionPolicy, OutputTables, Table};

/// Factory module for creating standard library components
pub mod factory {
    use super::*;

    /// Creates a component instance based on the component type.
    pub fn create_component(component_type: &str) -> Result<Box<dyn ComponentExecutor>, CoreError> {
        match component_type {
            "OboReader" => Ok(Box::new(OboReader::new())),
            _ => Err(CoreError::ComponentError(format!("Unknown component type: {}", component_type))),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::factory::create_component;
    use obo_core::{ComponentExecutorBase, CoreError};

    #[test]
    fn test_create_component() {
        let component = create_component("OboReader").unwrap();
        assert_eq!(component.component_type(), "OboReader");

        // Unknown component should return an error
        match create_component("Unknown") {
            Err(CoreError::ComponentError(msg)) => assert_eq!(msg, "Unknown component type: Unknown"),
            _ => panic!("Expected ComponentError"),
        }
    }
}
