//! Variable group contract.

use crate::variable::Declaration;

/// A set of overridable declarations scoped to one selector.
///
/// Implementations enumerate every declaration they own, in a fixed order, whether or not a
/// value is set. The emitter drops unset values, so the enumeration order is the output order.
pub trait CssVariableGroup {
    /// Selector the declarations apply to, such as `:root` or `.btn`.
    fn selector(&self) -> &str;

    /// All declarations of the group in declaration order.
    fn declarations(&self) -> Vec<Declaration>;

    /// Whether at least one declaration carries a value.
    fn has_values(&self) -> bool {
        self.declarations()
            .iter()
            .any(|declaration| declaration.effective_value().is_some())
    }
}
