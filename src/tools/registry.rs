//! Tool registry
//!
//! Built once at startup and read-only afterwards.

use std::sync::Arc;

use crate::clock::TimeProvider;
use crate::error::ToolError;
use crate::tools::{CurrentTimeTool, Tool, ToolDescriptor};

/// Registered tools, in registration order
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Start building a registry
    pub fn builder() -> ToolRegistryBuilder {
        ToolRegistryBuilder::default()
    }

    /// Registry holding the tools this server ships with
    pub fn standard(clock: Arc<dyn TimeProvider>) -> Self {
        Self {
            tools: vec![Arc::new(CurrentTimeTool::new(clock))],
        }
    }

    /// Find a tool by name
    pub fn lookup(&self, name: &str) -> Result<&Arc<dyn Tool>, ToolError> {
        self.tools
            .iter()
            .find(|tool| tool.descriptor().name == name)
            .ok_or_else(|| ToolError::UnknownTool {
                name: name.to_string(),
            })
    }

    /// Descriptors of every registered tool
    pub fn descriptors(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.tools.iter().map(|tool| tool.descriptor())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.descriptors().map(|d| &d.name))
            .finish()
    }
}

/// Builder enforcing unique tool names
#[derive(Default)]
pub struct ToolRegistryBuilder {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistryBuilder {
    /// Add a tool; fails if the name is already taken
    pub fn register(mut self, tool: Arc<dyn Tool>) -> Result<Self, ToolError> {
        let name = &tool.descriptor().name;
        if self.tools.iter().any(|t| &t.descriptor().name == name) {
            return Err(ToolError::DuplicateTool { name: name.clone() });
        }
        self.tools.push(tool);
        Ok(self)
    }

    pub fn build(self) -> ToolRegistry {
        ToolRegistry { tools: self.tools }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::clock::SystemClock;
    use crate::tools::{empty_input_schema, ToolOutput};

    struct EchoTool {
        descriptor: ToolDescriptor,
    }

    impl EchoTool {
        fn named(name: &str) -> Arc<dyn Tool> {
            Arc::new(Self {
                descriptor: ToolDescriptor::new(name, "echo", empty_input_schema()),
            })
        }
    }

    impl Tool for EchoTool {
        fn descriptor(&self) -> &ToolDescriptor {
            &self.descriptor
        }

        fn call(&self, arguments: &Value) -> Result<ToolOutput, ToolError> {
            Ok(ToolOutput {
                summary: arguments.to_string(),
                structured: arguments.clone(),
            })
        }
    }

    #[test]
    fn test_standard_registry_has_one_tool() {
        let registry = ToolRegistry::standard(Arc::new(SystemClock::default()));
        assert_eq!(registry.len(), 1);
        let names: Vec<_> = registry.descriptors().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["get_current_time"]);
    }

    #[test]
    fn test_lookup_unknown_tool() {
        let registry = ToolRegistry::standard(Arc::new(SystemClock::default()));
        match registry.lookup("nonexistent_tool") {
            Err(ToolError::UnknownTool { name }) => assert_eq!(name, "nonexistent_tool"),
            other => panic!("expected UnknownTool, got {:?}", other.map(|t| t.descriptor().name.clone())),
        }
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let result = ToolRegistry::builder()
            .register(EchoTool::named("echo"))
            .and_then(|b| b.register(EchoTool::named("echo")));
        assert!(matches!(result, Err(ToolError::DuplicateTool { .. })));
    }

    #[test]
    fn test_registration_order_preserved() {
        let registry = ToolRegistry::builder()
            .register(EchoTool::named("b"))
            .unwrap()
            .register(EchoTool::named("a"))
            .unwrap()
            .build();
        let names: Vec<_> = registry.descriptors().map(|d| d.name.clone()).collect();
        assert_eq!(names, vec!["b", "a"]);

        let output = registry.lookup("a").unwrap().call(&json!({"x": 1})).unwrap();
        assert_eq!(output.structured, json!({"x": 1}));
    }

    #[test]
    fn test_empty_registry() {
        let registry = ToolRegistry::builder().build();
        assert!(registry.is_empty());
        assert!(registry.lookup("get_current_time").is_err());
    }
}
