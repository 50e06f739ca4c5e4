//! Remote method metadata.
//!
//! [`MethodAttributes`] is the metadata a service author attaches to a method: an optional remote
//! name overriding the declared one, and flags keeping the method out of method listings.

/// Metadata of a remote method.
///
/// All fields are optional. The default attributes expose the method under its declared name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MethodAttributes<'a> {
    name: Option<&'a str>,
    hidden: bool,
    introspection: Option<bool>,
    description: Option<&'a str>,
}

impl<'a> MethodAttributes<'a> {
    /// Creates attributes with no name override and no flags set.
    pub const fn new() -> Self {
        Self {
            name: None,
            hidden: false,
            introspection: None,
            description: None,
        }
    }

    /// Sets the remote name. An empty name is the same as no name.
    pub const fn with_name(mut self, name: &'a str) -> Self {
        self.name = Some(name);
        self
    }

    /// Sets whether the method is hidden from method listings.
    pub const fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Sets whether the method is an introspection method, e.g. `system.listMethods`.
    pub const fn with_introspection(mut self, introspection: bool) -> Self {
        self.introspection = Some(introspection);
        self
    }

    /// Sets the help text of the method.
    pub const fn with_description(mut self, description: &'a str) -> Self {
        self.description = Some(description);
        self
    }

    /// The remote name override, if any.
    pub fn name(&self) -> Option<&'a str> {
        self.name
    }

    /// Whether the method is hidden.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Whether the method is an introspection method, if known.
    pub fn is_introspection(&self) -> Option<bool> {
        self.introspection
    }

    /// The help text of the method, if any.
    pub fn description(&self) -> Option<&'a str> {
        self.description
    }
}

/// The remote name of a method.
///
/// The name override of `attributes` if set and not empty, `declared` otherwise.
pub fn resolve_name<'a>(attributes: Option<&MethodAttributes<'a>>, declared: &'a str) -> &'a str {
    attributes
        .and_then(MethodAttributes::name)
        .filter(|name| !name.is_empty())
        .unwrap_or(declared)
}

/// Whether a method should be listed.
///
/// Hidden and introspection methods are not. A method without attributes is.
pub fn is_visible(attributes: Option<&MethodAttributes<'_>>) -> bool {
    match attributes {
        Some(attributes) => !(attributes.hidden || attributes.introspection == Some(true)),
        None => true,
    }
}
