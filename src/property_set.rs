/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::ptr;

use crate::{
    property::{IndexedPropertyDefinition, PropertyDefinition, PropertyDefinitionFlags},
    schema::Schema,
    version::ExchangeVersion,
    xml::{XmlNamespace, XmlWriter},
    Error,
};

/// The set of properties a response includes before any additional ones.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/baseshape>
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BasePropertySet {
    /// Only the identifier of each entity.
    IdOnly,

    /// Every first-class property of each entity.
    #[default]
    FirstClassProperties,
}

impl BasePropertySet {
    pub fn as_str(self) -> &'static str {
        match self {
            BasePropertySet::IdOnly => "IdOnly",
            BasePropertySet::FirstClassProperties => "AllProperties",
        }
    }
}

/// An identifier for a property a request asks for.
#[derive(Clone, Copy, Debug)]
pub enum PropertyPath {
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/fielduri>
    Property(&'static PropertyDefinition),

    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/indexedfielduri>
    Indexed(&'static IndexedPropertyDefinition),
}

impl PropertyPath {
    fn version(&self) -> ExchangeVersion {
        match self {
            PropertyPath::Property(definition) => definition.version(),
            PropertyPath::Indexed(indexed) => indexed.version(),
        }
    }

    /// The definition holding the requested value.
    fn definition(&self) -> &'static PropertyDefinition {
        match self {
            PropertyPath::Property(definition) => definition,
            PropertyPath::Indexed(indexed) => indexed.dictionary(),
        }
    }

    pub fn write_path(&self, writer: &mut XmlWriter) -> Result<(), Error> {
        match self {
            PropertyPath::Property(definition) => definition.write_path(writer),
            PropertyPath::Indexed(indexed) => indexed.write_path(writer),
        }
    }
}

impl From<&'static PropertyDefinition> for PropertyPath {
    fn from(value: &'static PropertyDefinition) -> Self {
        PropertyPath::Property(value)
    }
}

impl From<&'static IndexedPropertyDefinition> for PropertyPath {
    fn from(value: &'static IndexedPropertyDefinition) -> Self {
        PropertyPath::Indexed(value)
    }
}

/// The properties to load for the entities returned by a request.
#[derive(Clone, Debug, Default)]
pub struct PropertySet {
    base: BasePropertySet,
    additional: Vec<PropertyPath>,
}

impl PropertySet {
    pub fn new(base: BasePropertySet) -> Self {
        Self {
            base,
            additional: Vec::new(),
        }
    }

    pub fn id_only() -> Self {
        Self::new(BasePropertySet::IdOnly)
    }

    pub fn first_class_properties() -> Self {
        Self::new(BasePropertySet::FirstClassProperties)
    }

    /// Adds a property to the set, returning the set.
    pub fn with(mut self, path: impl Into<PropertyPath>) -> Self {
        self.add(path);
        self
    }

    pub fn add(&mut self, path: impl Into<PropertyPath>) {
        self.additional.push(path.into());
    }

    pub fn base(&self) -> BasePropertySet {
        self.base
    }

    pub fn additional(&self) -> &[PropertyPath] {
        &self.additional
    }

    /// Checks the set can be sent to a server speaking `version`. When
    /// `summary` is set, the set is for a find request, which only returns
    /// summary properties.
    pub fn validate(&self, version: ExchangeVersion, summary: bool) -> Result<(), Error> {
        for path in &self.additional {
            let definition = path.definition();

            if version < path.version() {
                return Err(Error::PropertyVersionMismatch {
                    property: definition.name(),
                    required: path.version(),
                    requested: version,
                });
            }

            // Indexed entries are requested by their own URI, so the
            // dictionary's flags do not apply to them.
            if let PropertyPath::Property(definition) = path {
                if definition.uri().is_none() {
                    return Err(Error::PropertyNotRequestable(definition.name()));
                }

                if summary && !definition.has_flag(PropertyDefinitionFlags::CAN_FIND) {
                    return Err(Error::NonSummaryPropertyCannotBeUsed(definition.name()));
                }
            }
        }

        Ok(())
    }

    /// The definitions of `schema` a response to this set should contain.
    pub fn requested_properties(
        &self,
        schema: &Schema,
        summary: bool,
    ) -> Vec<&'static PropertyDefinition> {
        let mut requested = vec![schema.id_property()];

        if self.base == BasePropertySet::FirstClassProperties {
            let base = if summary {
                schema.first_class_summary_properties()
            } else {
                schema.first_class_properties()
            };
            push_unique(&mut requested, base.iter().copied());
        }

        push_unique(
            &mut requested,
            self.additional
                .iter()
                .map(PropertyPath::definition)
                .filter(|definition| schema.contains(definition)),
        );

        requested
    }

    /// Writes the set as the shape element of a request, e.g. `ItemShape`.
    pub fn write_xml(&self, writer: &mut XmlWriter, shape_element: &str) -> Result<(), Error> {
        writer.write_start(XmlNamespace::Messages, shape_element, &[])?;
        writer.write_text_element(XmlNamespace::Types, "BaseShape", self.base.as_str())?;

        if !self.additional.is_empty() {
            writer.write_start(XmlNamespace::Types, "AdditionalProperties", &[])?;
            for path in &self.additional {
                path.write_path(writer)?;
            }
            writer.write_end(XmlNamespace::Types, "AdditionalProperties")?;
        }

        writer.write_end(XmlNamespace::Messages, shape_element)
    }
}

fn push_unique(
    requested: &mut Vec<&'static PropertyDefinition>,
    definitions: impl Iterator<Item = &'static PropertyDefinition>,
) {
    for definition in definitions {
        if !requested
            .iter()
            .any(|existing| ptr::eq(*existing, definition))
        {
            requested.push(definition);
        }
    }
}
