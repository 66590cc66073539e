use crate::compiler::FlowAssembler;
use crate::error::ConversionError;

/// A trait for source models that can be turned into a flow graph.
///
/// This is the extension point that keeps the compiler independent of the source format. The
/// XML metadata model in [`crate::source`] implements it; any other format only needs to feed
/// its elements to the assembler in declaration order.
///
/// # Example
///
/// ```rust
/// use flowviz::prelude::*;
/// use flowviz::error::ConversionError;
/// use std::result::Result;
///
/// struct Pipeline {
///     steps: Vec<String>,
/// }
///
/// impl IntoFlow for Pipeline {
///     fn into_flow(self, assembler: &mut FlowAssembler) -> Result<(), ConversionError> {
///         // Elements are collected as they are added, so add them fully wired.
///         let mut start = FlowElement::new(START_NAME, ElementType::Start).with_label("Start");
///         start.connector = self.steps.first().cloned();
///         assembler.add_element(start);
///
///         for (i, step) in self.steps.iter().enumerate() {
///             let mut element = FlowElement::new(step.clone(), ElementType::Step);
///             element.connector = self.steps.get(i + 1).cloned();
///             assembler.add_element(element);
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait IntoFlow {
    /// Consumes the source and feeds its header, elements and variables to the assembler.
    fn into_flow(self, assembler: &mut FlowAssembler) -> Result<(), ConversionError>;
}
