//! The `get_current_time` tool

use std::sync::Arc;

use serde_json::Value;

use crate::clock::TimeProvider;
use crate::error::ToolError;
use crate::tools::{empty_input_schema, Tool, ToolDescriptor, ToolOutput};

/// Identifier of the current time tool
pub const CURRENT_TIME_TOOL: &str = "get_current_time";

const DESCRIPTION: &str = "Get the current date and time. Use this when the user asks what time it is, what the date is, or for the current time.";

/// Reports the current date and time
pub struct CurrentTimeTool {
    descriptor: ToolDescriptor,
    clock: Arc<dyn TimeProvider>,
}

impl CurrentTimeTool {
    pub fn new(clock: Arc<dyn TimeProvider>) -> Self {
        Self {
            descriptor: ToolDescriptor::new(CURRENT_TIME_TOOL, DESCRIPTION, empty_input_schema()),
            clock,
        }
    }
}

impl Tool for CurrentTimeTool {
    fn descriptor(&self) -> &ToolDescriptor {
        &self.descriptor
    }

    // Arguments are ignored.
    fn call(&self, _arguments: &Value) -> Result<ToolOutput, ToolError> {
        let snapshot = self.clock.now();
        let summary = format!(
            "The current time is: {}\n\nTimestamp: {}",
            snapshot.current_time, snapshot.timestamp
        );
        let structured = serde_json::to_value(&snapshot).map_err(|e| ToolError::HandlerFailure {
            message: e.to_string(),
        })?;

        Ok(ToolOutput {
            summary,
            structured,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use chrono_tz::Tz;
    use serde_json::json;

    use super::*;
    use crate::clock::TimeSnapshot;

    struct FixedClock(TimeSnapshot);

    impl TimeProvider for FixedClock {
        fn now(&self) -> TimeSnapshot {
            self.0.clone()
        }
    }

    fn fixed_tool() -> CurrentTimeTool {
        let instant = Utc.with_ymd_and_hms(2024, 3, 5, 7, 8, 9).unwrap();
        CurrentTimeTool::new(Arc::new(FixedClock(TimeSnapshot::at(instant, Tz::UTC))))
    }

    #[test]
    fn test_descriptor() {
        let tool = fixed_tool();
        let descriptor = tool.descriptor();
        assert_eq!(descriptor.name, "get_current_time");
        assert!(descriptor.description.contains("what time it is"));
        assert_eq!(descriptor.input_schema["type"], "object");
        assert!(descriptor.input_schema["properties"].as_object().unwrap().is_empty());
    }

    #[test]
    fn test_call_summary_embeds_both_representations() {
        let output = fixed_tool().call(&Value::Null).unwrap();
        assert_eq!(
            output.summary,
            "The current time is: Tuesday, March 5, 2024 at 07:08:09 AM UTC\n\nTimestamp: 2024-03-05T07:08:09.000Z"
        );
    }

    #[test]
    fn test_call_structured_output() {
        let output = fixed_tool().call(&json!({ "timezone": "ignored" })).unwrap();
        assert_eq!(
            output.structured,
            json!({
                "current_time": "Tuesday, March 5, 2024 at 07:08:09 AM UTC",
                "timestamp": "2024-03-05T07:08:09.000Z"
            })
        );
    }
}
