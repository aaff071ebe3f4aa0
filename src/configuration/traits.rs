use miette::Result;

/// An authored (deserialized) configuration section that can be turned
/// into its read-only, resolved form.
pub trait ResolvableConfiguration {
    type Resolved;

    /// Resolve the section into its `Resolved` type.
    ///
    /// Resolution normalizes the authored data (e.g. empty labels become absent ones).
    /// It does not check anything the external generator is responsible for,
    /// such as URL syntax or whether a target page exists.
    fn resolve(self) -> Result<Self::Resolved>;
}


/// Same as [`ResolvableConfiguration`], but resolution needs some additional
/// context (for example, the path the configuration was loaded from).
pub trait ResolvableConfigurationWithContext {
    type Context;
    type Resolved;

    /// Resolve the section into its `Resolved` type using `context`.
    fn resolve(self, context: Self::Context) -> Result<Self::Resolved>;
}
