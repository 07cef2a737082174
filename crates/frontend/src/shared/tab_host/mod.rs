//! Tab host core - ordered registry of tabs plus the selection state.
//!
//! Содержит:
//! - `registry` - `TabDescriptor` и `ViewRegistry` (статичны на всё время жизни хоста)
//! - `host` - `TabHost`: выбранный индекс и вычисление props активного view
//! - `error` - ошибки конфигурации и выбора таба
//!
//! The core is framework-agnostic: reactive wrappers live next to the
//! components that use it.

mod error;
mod host;
mod registry;

pub use error::{ConfigError, RangeError};
pub use host::TabHost;
pub use registry::{TabDescriptor, ViewRegistry};

/// Resolution rule of a view identity: computes the view's input from the
/// ambient context.
///
/// Implementations must be pure. The context may be absent (not loaded yet)
/// and every call returns a fresh value.
pub trait ResolveProps {
    type Context;
    type Props;

    fn resolve(&self, ctx: Option<&Self::Context>) -> Self::Props;
}
