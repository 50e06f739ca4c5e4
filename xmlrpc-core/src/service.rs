//! Service method tables.
//!
//! A [`ServiceInfo`] is built from the [`MethodDefinition`]s of a service. It holds what remote
//! callers get to know about the service: the remote name of each method, whether it's listed and
//! the wire types of its parameters and return value. These are what the introspection methods
//! (`system.listMethods`, `system.methodSignature` and `system.methodHelp`) report.

use alloc::{collections::BTreeSet, string::ToString, vec::Vec};
use serde::Serialize;

use crate::{
    classify,
    descriptor::{List, Member, TypeDescriptor, TypeRef},
    error::Position,
    method::{self, MethodAttributes},
    Error, Result, WireType,
};

/// A method parameter: a name and a type.
pub type Parameter<'a> = Member<'a>;

/// The definition of a service method, as declared by the host.
#[derive(Debug, Clone)]
pub struct MethodDefinition<'a> {
    name: &'a str,
    attributes: Option<MethodAttributes<'a>>,
    params: List<'a, Parameter<'a>>,
    returns: TypeRef<'a>,
}

impl<'a> MethodDefinition<'a> {
    /// Creates a new method definition with the given declared name, borrowed parameters and
    /// return type.
    pub const fn new(
        name: &'a str,
        params: &'a [&'a Parameter<'a>],
        returns: &'a TypeDescriptor<'a>,
    ) -> Self {
        Self {
            name,
            attributes: None,
            params: List::Borrowed(params),
            returns: TypeRef::borrowed(returns),
        }
    }

    /// Creates a new method definition with owned parameters and return type.
    pub fn new_owned(
        name: &'a str,
        params: Vec<Parameter<'a>>,
        returns: TypeDescriptor<'a>,
    ) -> Self {
        Self {
            name,
            attributes: None,
            params: List::from(params),
            returns: TypeRef::new(returns),
        }
    }

    /// Sets the method attributes.
    pub fn with_attributes(mut self, attributes: MethodAttributes<'a>) -> Self {
        self.attributes = Some(attributes);
        self
    }

    /// The declared name of the method.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The method attributes, if any.
    pub fn attributes(&self) -> Option<&MethodAttributes<'a>> {
        self.attributes.as_ref()
    }

    /// The parameters, in order.
    pub fn params(&self) -> impl Iterator<Item = &Parameter<'a>> {
        self.params.iter()
    }

    /// The return type.
    pub fn returns(&self) -> &TypeDescriptor<'a> {
        self.returns.inner()
    }
}

/// A method as exposed to remote callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodInfo<'a> {
    name: &'a str,
    #[serde(skip)]
    declared_name: &'a str,
    visible: bool,
    params: Vec<ParameterInfo<'a>>,
    returns: WireType,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

impl<'a> MethodInfo<'a> {
    /// The remote name.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The declared name.
    pub fn declared_name(&self) -> &'a str {
        self.declared_name
    }

    /// Whether the method is listed.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The parameters, in order.
    pub fn params(&self) -> &[ParameterInfo<'a>] {
        &self.params
    }

    /// The wire type of the return value.
    pub fn returns(&self) -> WireType {
        self.returns
    }

    /// The help text.
    pub fn description(&self) -> Option<&'a str> {
        self.description
    }

    /// The wire type names of the signature, return value first.
    pub fn signature(&self) -> Vec<&'static str> {
        core::iter::once(self.returns)
            .chain(self.params.iter().map(ParameterInfo::wire_type))
            .filter_map(WireType::name)
            .collect()
    }
}

/// A parameter of a [`MethodInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParameterInfo<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    wire_type: WireType,
}

impl<'a> ParameterInfo<'a> {
    /// The parameter name.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The wire type of the parameter.
    pub fn wire_type(&self) -> WireType {
        self.wire_type
    }
}

/// The method table of a service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServiceInfo<'a> {
    methods: Vec<MethodInfo<'a>>,
}

impl<'a> ServiceInfo<'a> {
    /// Builds the method table from method definitions.
    ///
    /// Hidden and introspection methods are part of the table, as they remain callable, but are
    /// not listed.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidType`] if a parameter or return type has no wire representation and
    /// [`Error::DuplicateMethod`] if two methods share a remote name.
    pub fn new<'d, I>(definitions: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'d MethodDefinition<'a>>,
        'a: 'd,
    {
        let mut names = BTreeSet::new();
        let methods = definitions
            .into_iter()
            .map(|definition| {
                let method = method_info(definition)?;
                if !names.insert(method.name) {
                    return Err(Error::DuplicateMethod(method.name.to_string()));
                }

                Ok(method)
            })
            .collect::<Result<_>>()?;

        Ok(Self { methods })
    }

    /// All methods, in definition order.
    pub fn methods(&self) -> &[MethodInfo<'a>] {
        &self.methods
    }

    /// The method with the given remote name.
    pub fn method(&self, name: &str) -> Option<&MethodInfo<'a>> {
        self.methods.iter().find(|method| method.name == name)
    }

    /// The remote names of the listed methods, as reported by `system.listMethods`.
    pub fn list_methods(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.methods
            .iter()
            .filter(|method| method.visible)
            .map(|method| method.name)
    }

    /// The signature of a method, as reported by `system.methodSignature`.
    pub fn signature(&self, name: &str) -> Option<Vec<&'static str>> {
        self.method(name).map(MethodInfo::signature)
    }

    /// The help text of a method, as reported by `system.methodHelp`.
    pub fn help(&self, name: &str) -> Option<&'a str> {
        self.method(name).and_then(MethodInfo::description)
    }
}

fn method_info<'a>(definition: &MethodDefinition<'a>) -> Result<MethodInfo<'a>> {
    let attributes = definition.attributes();
    let name = method::resolve_name(attributes, definition.name());
    let visible = method::is_visible(attributes);
    if !visible {
        debug!("Method `{}` is not listed", name);
    }

    let params = definition
        .params()
        .map(|param| {
            let wire_type = checked_wire_type(name, param.ty(), || {
                Position::Parameter(param.name().to_string())
            })?;

            Ok(ParameterInfo {
                name: param.name(),
                wire_type,
            })
        })
        .collect::<Result<_>>()?;
    let returns = checked_wire_type(name, definition.returns(), || Position::Return)?;

    Ok(MethodInfo {
        name,
        declared_name: definition.name(),
        visible,
        params,
        returns,
        description: attributes.and_then(MethodAttributes::description),
    })
}

fn checked_wire_type<F>(method: &str, ty: &TypeDescriptor<'_>, position: F) -> Result<WireType>
where
    F: FnOnce() -> Position,
{
    let wire_type = classify(ty);
    if wire_type.is_valid() {
        return Ok(wire_type);
    }

    warn!("Method `{}` uses a type with no wire representation", method);
    Err(Error::InvalidType {
        method: method.to_string(),
        position: position(),
        ty: ty.to_string(),
    })
}
