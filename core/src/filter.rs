use crate::hook_input::InvocationRecord;

/// Early-exit gate: only invocations of the target tool go further.
#[derive(Debug, Clone, Copy)]
pub struct ToolFilter<'a> {
    target: &'a str,
}

impl<'a> ToolFilter<'a> {
    pub fn new(target: &'a str) -> Self {
        Self { target }
    }

    pub fn matches(&self, record: &InvocationRecord) -> bool {
        record.tool_name() == Some(self.target)
    }
}
