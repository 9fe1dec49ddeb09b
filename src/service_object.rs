/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Entity instances.
//!
//! A [`ServiceObject`] holds the values of an entity's properties as loaded
//! from a response or assigned by the caller, and enforces what its schema
//! allows to be read and written. [`Item`] and [`Folder`] are typed views of
//! it for the two entity kinds requests operate on.

use std::{
    collections::HashMap,
    ops::{Deref, DerefMut},
    sync::Arc,
};

use serde_json::Value;

use crate::{
    complex::StringDictionary,
    id::{FolderId, ItemId},
    json::{typed_object, ToJson},
    property::{IndexedPropertyDefinition, PropertyDefinition, PropertyDefinitionFlags},
    schema::{EntityKind, Schema},
    value::PropertyValue,
    version::ExchangeVersion,
    xml::{XmlElement, XmlNamespace, XmlWriter},
    Error,
};

/// The property values of one entity.
#[derive(Clone, Debug)]
pub struct ServiceObject {
    schema: Arc<Schema>,

    /// Values by element name. `None` marks a property loaded as null.
    values: HashMap<&'static str, Option<PropertyValue>>,

    changed: Vec<&'static PropertyDefinition>,
}

impl ServiceObject {
    /// Creates an entity which doesn't exist on the server yet.
    pub fn new(schema: Arc<Schema>) -> Self {
        Self {
            schema,
            values: HashMap::new(),
            changed: Vec::new(),
        }
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Whether the entity has no server-assigned identifier yet.
    pub fn is_new(&self) -> bool {
        !matches!(
            self.values.get(self.schema.id_property().xml_element_name()),
            Some(Some(_))
        )
    }

    /// Properties assigned since the entity was last loaded, in the order they
    /// were first changed.
    pub fn changed_properties(&self) -> &[&'static PropertyDefinition] {
        &self.changed
    }

    fn check_schema(&self, definition: &PropertyDefinition) -> Result<(), Error> {
        if self.schema.contains(definition) {
            Ok(())
        } else {
            Err(Error::InvalidPropertyForSchema {
                property: definition.name(),
                schema: self.schema.name(),
            })
        }
    }

    fn check_readable(&self, definition: &PropertyDefinition) -> Result<(), Error> {
        self.check_schema(definition)?;

        if !self.is_new() && !self.values.contains_key(definition.xml_element_name()) {
            return Err(Error::MustLoadOrAssignPropertyBeforeAccess(
                definition.name(),
            ));
        }

        Ok(())
    }

    fn check_writable(&self, definition: &PropertyDefinition) -> Result<(), Error> {
        self.check_schema(definition)?;

        if self.is_new() {
            if !definition.has_flag(PropertyDefinitionFlags::CAN_SET) {
                return Err(Error::PropertyIsReadOnly(definition.name()));
            }
        } else if !definition.has_flag(PropertyDefinitionFlags::CAN_UPDATE) {
            return Err(Error::PropertyCannotBeUpdated(definition.name()));
        }

        Ok(())
    }

    fn mark_changed(&mut self, definition: &'static PropertyDefinition) {
        if !self
            .changed
            .iter()
            .any(|changed| std::ptr::eq(*changed, definition))
        {
            self.changed.push(definition);
        }
    }

    /// The value of a property, or `None` if it is null or was never
    /// assigned on a new entity.
    pub fn get(&self, definition: &PropertyDefinition) -> Result<Option<&PropertyValue>, Error> {
        self.check_readable(definition)?;

        Ok(self
            .values
            .get(definition.xml_element_name())
            .and_then(Option::as_ref))
    }

    /// Mutable access to a complex value, creating an empty one for
    /// properties which instantiate on read.
    pub fn complex_mut<T: 'static>(
        &mut self,
        definition: &'static PropertyDefinition,
    ) -> Result<Option<&mut T>, Error> {
        self.check_readable(definition)?;
        self.check_writable(definition)?;

        let element = definition.xml_element_name();
        if !matches!(self.values.get(element), Some(Some(_))) {
            if !definition.has_flag(PropertyDefinitionFlags::AUTO_INSTANTIATE_ON_READ) {
                return Ok(None);
            }

            let value = definition
                .instantiate()
                .ok_or_else(|| Error::InvalidPropertyValue {
                    property: definition.name(),
                    reason: "not a complex property".to_string(),
                })?;
            if value.downcast_ref::<T>().is_none() {
                return Err(Error::InvalidPropertyValue {
                    property: definition.name(),
                    reason: "value is not of the requested type".to_string(),
                });
            }

            self.values
                .insert(element, Some(PropertyValue::Complex(value)));
        }

        self.mark_changed(definition);

        match self.values.get_mut(element) {
            Some(Some(PropertyValue::Complex(value))) => value
                .downcast_mut::<T>()
                .map(Some)
                .ok_or_else(|| Error::InvalidPropertyValue {
                    property: definition.name(),
                    reason: "value is not of the requested type".to_string(),
                }),
            _ => Err(Error::InvalidPropertyValue {
                property: definition.name(),
                reason: "not a complex property".to_string(),
            }),
        }
    }

    /// Assigns a property.
    pub fn set(
        &mut self,
        definition: &'static PropertyDefinition,
        value: impl Into<PropertyValue>,
    ) -> Result<(), Error> {
        self.check_writable(definition)?;

        let value = definition.coerce(value.into())?;
        self.values
            .insert(definition.xml_element_name(), Some(value));
        self.mark_changed(definition);

        Ok(())
    }

    /// Removes a property's value. On an existing entity this deletes the
    /// value on the server when the entity is next updated.
    pub fn clear(&mut self, definition: &'static PropertyDefinition) -> Result<(), Error> {
        self.check_schema(definition)?;

        if self.is_new() {
            self.values.remove(definition.xml_element_name());
            self.changed
                .retain(|changed| !std::ptr::eq(*changed, definition));
            return Ok(());
        }

        if !definition.has_flag(PropertyDefinitionFlags::CAN_DELETE) {
            return Err(Error::PropertyCannotBeDeleted(definition.name()));
        }

        self.values.insert(definition.xml_element_name(), None);
        self.mark_changed(definition);

        Ok(())
    }

    fn check_indexed(&self, indexed: &IndexedPropertyDefinition) -> Result<(), Error> {
        if self.schema.contains_indexed(indexed) {
            Ok(())
        } else {
            Err(Error::InvalidPropertyForSchema {
                property: indexed.index(),
                schema: self.schema.name(),
            })
        }
    }

    /// The value of one entry of a dictionary property.
    pub fn indexed_value(&self, indexed: &IndexedPropertyDefinition) -> Result<Option<&str>, Error> {
        self.check_indexed(indexed)?;

        let value = self
            .get(indexed.dictionary())?
            .and_then(PropertyValue::as_complex::<StringDictionary>)
            .and_then(|dictionary| dictionary.get(indexed.index()));

        Ok(value)
    }

    /// Assigns one entry of a dictionary property.
    pub fn set_indexed_value(
        &mut self,
        indexed: &'static IndexedPropertyDefinition,
        value: impl Into<String>,
    ) -> Result<(), Error> {
        self.check_indexed(indexed)?;
        self.check_writable(indexed.dictionary())?;

        let dictionary = self
            .complex_mut::<StringDictionary>(indexed.dictionary())?
            .ok_or_else(|| Error::InvalidPropertyValue {
                property: indexed.dictionary().name(),
                reason: "dictionary is not instantiated on read".to_string(),
            })?;
        dictionary.set(indexed.index(), value);

        Ok(())
    }

    /// Loads property values from the entity's element in a response.
    ///
    /// Requested properties absent from the element are recorded as null, so
    /// that reading them doesn't fail.
    pub fn load_from_xml(
        &mut self,
        element: &XmlElement,
        requested: &[&'static PropertyDefinition],
    ) -> Result<(), Error> {
        for child in &element.children {
            let Some(definition) = self.schema.try_get_property_definition(&child.name) else {
                log::debug!(
                    "skipping element `{}` unknown to schema `{}`",
                    child.name,
                    self.schema.name()
                );
                continue;
            };

            let key = definition.xml_element_name();
            if definition.has_flag(PropertyDefinitionFlags::REUSE_INSTANCE) {
                if let Some(Some(PropertyValue::Complex(existing))) = self.values.get_mut(key) {
                    existing.load_from_xml(child)?;
                    continue;
                }
            }

            let value = definition.read_value(child)?;
            self.values.insert(key, Some(value));
        }

        for definition in requested {
            if self.schema.contains(definition) {
                self.values
                    .entry(definition.xml_element_name())
                    .or_insert(None);
            }
        }

        self.changed.clear();

        Ok(())
    }

    /// Writes the entity's element with every assigned property the caller
    /// may set, in registration order.
    pub fn write_to_xml(
        &self,
        writer: &mut XmlWriter,
        version: ExchangeVersion,
    ) -> Result<(), Error> {
        let element = self.schema.xml_element_name();
        writer.write_start(XmlNamespace::Types, element, &[])?;

        for definition in self.schema.properties() {
            if !definition.has_flag(PropertyDefinitionFlags::CAN_SET) {
                continue;
            }

            let Some(Some(value)) = self.values.get(definition.xml_element_name()) else {
                continue;
            };

            if definition.is_superseded_for(version) {
                log::debug!(
                    "not writing `{}`, which {version} replaces with other properties",
                    definition.name()
                );
                continue;
            }

            if !definition.is_supported_by(version) {
                return Err(Error::PropertyVersionMismatch {
                    property: definition.name(),
                    required: definition.version(),
                    requested: version,
                });
            }

            definition.write_value(writer, value)?;
        }

        writer.write_end(XmlNamespace::Types, element)
    }
}

impl ToJson for ServiceObject {
    fn to_json(&self) -> Value {
        let mut object = typed_object(self.schema.xml_element_name());
        for definition in self.schema.properties() {
            if let Some(Some(value)) = self.values.get(definition.xml_element_name()) {
                object.insert(definition.xml_element_name().to_string(), value.to_json());
            }
        }

        Value::Object(object)
    }
}

fn check_kind(schema: &Schema, kind: EntityKind) -> Result<(), Error> {
    if schema.kind() == kind {
        Ok(())
    } else {
        Err(Error::WrongEntityKind {
            schema: schema.name(),
            expected: kind.as_str(),
        })
    }
}

macro_rules! entity {
    ($(#[$attr:meta])* $name:ident, $kind:expr, $id:ty) => {
        $(#[$attr])*
        #[derive(Clone, Debug)]
        pub struct $name(ServiceObject);

        impl $name {
            /// Creates an entity which doesn't exist on the server yet.
            pub fn new(schema: Arc<Schema>) -> Result<Self, Error> {
                check_kind(&schema, $kind)?;
                Ok(Self(ServiceObject::new(schema)))
            }

            /// Loads an entity from its element in a response.
            pub fn from_xml(
                schema: Arc<Schema>,
                element: &XmlElement,
                requested: &[&'static PropertyDefinition],
            ) -> Result<Self, Error> {
                let mut entity = Self::new(schema)?;
                entity.0.load_from_xml(element, requested)?;
                Ok(entity)
            }

            /// The server-assigned identifier, if the entity has one.
            pub fn id(&self) -> Option<&$id> {
                self.0
                    .values
                    .get(self.0.schema.id_property().xml_element_name())
                    .and_then(Option::as_ref)
                    .and_then(PropertyValue::as_complex::<$id>)
            }

            pub fn into_inner(self) -> ServiceObject {
                self.0
            }
        }

        impl Deref for $name {
            type Target = ServiceObject;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }

        impl ToJson for $name {
            fn to_json(&self) -> Value {
                self.0.to_json()
            }
        }
    };
}

entity!(
    /// An item: a message, calendar item, contact, task, ...
    Item,
    EntityKind::Item,
    ItemId
);

entity!(
    /// A folder of any type.
    Folder,
    EntityKind::Folder,
    FolderId
);
