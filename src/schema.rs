/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Entity schemas and the registry tying them together.
//!
//! An entity type is described statically by an [`EntitySchema`]: the
//! ordered list of [`PropertyGroup`]s it includes, base groups first. Building
//! a [`Schema`] from it walks the groups in order and sorts each registration
//! into the lists requests and responses work from. The order registrations
//! appear in is the order properties are serialized in, so groups list them
//! in the order of the EWS `types.xsd` definitions.

use std::{collections::HashMap, ptr, sync::Arc};

use crate::{
    property::{IndexedPropertyDefinition, PropertyDefinition, PropertyDefinitionFlags},
    Error,
};

/// The broad category of an entity type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Item,
    Folder,
    Conversation,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Item => "item",
            EntityKind::Folder => "folder",
            EntityKind::Conversation => "conversation",
        }
    }
}

/// How a property takes part in a schema.
#[derive(Clone, Copy, Debug)]
pub enum Registration {
    /// A property callers can see and use.
    Property(&'static PropertyDefinition),

    /// A property the schema handles but does not expose to callers.
    Internal(&'static PropertyDefinition),

    /// An entry of a dictionary property.
    Indexed(&'static IndexedPropertyDefinition),
}

/// An ordered set of registrations shared by one or more entity schemas.
#[derive(Debug)]
pub struct PropertyGroup {
    pub name: &'static str,
    pub registrations: &'static [Registration],

    /// Definitions owned by this group without being registered in any
    /// schema. They still take part in the field URI consistency check.
    pub declared: &'static [&'static PropertyDefinition],
}

impl PropertyGroup {
    fn definitions(&self) -> impl Iterator<Item = &'static PropertyDefinition> + '_ {
        let registered = self.registrations.iter().filter_map(|registration| match registration {
            Registration::Property(definition) | Registration::Internal(definition) => {
                Some(*definition)
            }
            Registration::Indexed(indexed) => Some(indexed.dictionary()),
        });

        registered.chain(self.declared.iter().copied())
    }

    fn indexed_definitions(&self) -> impl Iterator<Item = &'static IndexedPropertyDefinition> + '_ {
        self.registrations
            .iter()
            .filter_map(|registration| match registration {
                Registration::Indexed(indexed) => Some(*indexed),
                _ => None,
            })
    }
}

/// The static description of an entity type.
#[derive(Debug)]
pub struct EntitySchema {
    pub name: &'static str,

    /// The element entities of this type are serialized as, e.g.
    /// `CalendarItem`.
    pub xml_element_name: &'static str,

    pub kind: EntityKind,

    /// The property holding the server-assigned identifier.
    pub id_property: &'static PropertyDefinition,

    /// Included property groups, base groups first.
    pub groups: &'static [&'static PropertyGroup],
}

/// The properties of one entity type, sorted by audience.
#[derive(Debug)]
pub struct Schema {
    name: &'static str,
    xml_element_name: &'static str,
    kind: EntityKind,
    id_property: &'static PropertyDefinition,

    by_element_name: HashMap<&'static str, &'static PropertyDefinition>,
    all: Vec<&'static PropertyDefinition>,
    visible: Vec<&'static PropertyDefinition>,
    first_class: Vec<&'static PropertyDefinition>,
    first_class_summary: Vec<&'static PropertyDefinition>,
    indexed: Vec<&'static IndexedPropertyDefinition>,
}

impl Schema {
    /// Builds the schema of an entity type by registering the properties of
    /// each of its groups in turn.
    pub fn new(description: &EntitySchema) -> Result<Self, Error> {
        let mut schema = Self {
            name: description.name,
            xml_element_name: description.xml_element_name,
            kind: description.kind,
            id_property: description.id_property,
            by_element_name: HashMap::new(),
            all: Vec::new(),
            visible: Vec::new(),
            first_class: Vec::new(),
            first_class_summary: Vec::new(),
            indexed: Vec::new(),
        };

        for group in description.groups {
            for registration in group.registrations {
                match *registration {
                    Registration::Property(definition) => schema.register_property(definition)?,
                    Registration::Internal(definition) => {
                        schema.register_internal_property(definition)?
                    }
                    Registration::Indexed(indexed) => schema.register_indexed_property(indexed),
                }
            }
        }

        if !schema.contains(schema.id_property) {
            return Err(Error::InvalidPropertyForSchema {
                property: schema.id_property.name(),
                schema: schema.name,
            });
        }

        Ok(schema)
    }

    fn register_property(&mut self, definition: &'static PropertyDefinition) -> Result<(), Error> {
        self.register_internal_property(definition)?;
        self.visible.push(definition);

        Ok(())
    }

    fn register_internal_property(
        &mut self,
        definition: &'static PropertyDefinition,
    ) -> Result<(), Error> {
        let element = definition.xml_element_name();
        if self.by_element_name.insert(element, definition).is_some() {
            return Err(Error::DuplicatePropertyName {
                schema: self.name,
                element,
            });
        }

        self.all.push(definition);

        if !definition.has_flag(PropertyDefinitionFlags::MUST_BE_EXPLICITLY_LOADED) {
            self.first_class.push(definition);
        }

        if definition.has_flag(PropertyDefinitionFlags::CAN_FIND) {
            self.first_class_summary.push(definition);
        }

        Ok(())
    }

    fn register_indexed_property(&mut self, indexed: &'static IndexedPropertyDefinition) {
        self.indexed.push(indexed);
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn xml_element_name(&self) -> &'static str {
        self.xml_element_name
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn id_property(&self) -> &'static PropertyDefinition {
        self.id_property
    }

    /// Finds the property serialized as the given element.
    pub fn try_get_property_definition(
        &self,
        xml_element_name: &str,
    ) -> Option<&'static PropertyDefinition> {
        self.by_element_name.get(xml_element_name).copied()
    }

    /// Whether this exact definition is registered in the schema.
    pub fn contains(&self, definition: &PropertyDefinition) -> bool {
        self.all
            .iter()
            .any(|candidate| ptr::eq(*candidate, definition))
    }

    pub fn contains_indexed(&self, indexed: &IndexedPropertyDefinition) -> bool {
        self.indexed
            .iter()
            .any(|candidate| ptr::eq(*candidate, indexed))
    }

    /// Every registered property, in registration order.
    pub fn properties(&self) -> &[&'static PropertyDefinition] {
        &self.all
    }

    pub fn visible_properties(&self) -> &[&'static PropertyDefinition] {
        &self.visible
    }

    /// Properties returned by default when loading an entity.
    pub fn first_class_properties(&self) -> &[&'static PropertyDefinition] {
        &self.first_class
    }

    /// Properties returned by default when finding entities.
    pub fn first_class_summary_properties(&self) -> &[&'static PropertyDefinition] {
        &self.first_class_summary
    }

    pub fn indexed_properties(&self) -> &[&'static IndexedPropertyDefinition] {
        &self.indexed
    }
}

/// Every known schema, plus the lookup of definitions by field URI.
#[derive(Debug)]
pub struct SchemaRegistry {
    schemas: Vec<Arc<Schema>>,
    by_uri: HashMap<&'static str, &'static PropertyDefinition>,
    /// Indexed definitions by field URI, then by field index.
    by_indexed_uri: HashMap<&'static str, HashMap<&'static str, &'static IndexedPropertyDefinition>>,
}

impl SchemaRegistry {
    /// Builds the schemas of the given entity types and checks that no two
    /// distinct definitions claim the same wire identity.
    pub fn build(descriptions: &[&EntitySchema]) -> Result<Self, Error> {
        let mut registry = Self {
            schemas: Vec::with_capacity(descriptions.len()),
            by_uri: HashMap::new(),
            by_indexed_uri: HashMap::new(),
        };

        for description in descriptions {
            for group in description.groups {
                for definition in group.definitions() {
                    registry.add_definition(definition)?;
                }

                for indexed in group.indexed_definitions() {
                    registry.add_indexed_definition(indexed)?;
                }
            }

            registry.schemas.push(Arc::new(Schema::new(description)?));
        }

        log::debug!(
            "built {} schemas with {} field URIs and {} indexed fields",
            registry.schemas.len(),
            registry.by_uri.len(),
            registry.by_indexed_uri.values().map(HashMap::len).sum::<usize>()
        );

        Ok(registry)
    }

    /// The registry of every entity type this crate knows about.
    pub fn standard() -> Result<Self, Error> {
        Self::build(crate::schemas::STANDARD_SCHEMAS)
    }

    fn add_definition(&mut self, definition: &'static PropertyDefinition) -> Result<(), Error> {
        let Some(uri) = definition.uri() else {
            return Ok(());
        };

        match self.by_uri.get(uri) {
            Some(existing) if ptr::eq(*existing, definition) => Ok(()),
            Some(existing) => Err(Error::DuplicateFieldUri {
                uri,
                first: existing.name(),
                second: definition.name(),
            }),
            None => {
                self.by_uri.insert(uri, definition);
                Ok(())
            }
        }
    }

    fn add_indexed_definition(
        &mut self,
        indexed: &'static IndexedPropertyDefinition,
    ) -> Result<(), Error> {
        let entries = self.by_indexed_uri.entry(indexed.uri()).or_default();

        match entries.get(indexed.index()) {
            Some(existing) if ptr::eq(*existing, indexed) => Ok(()),
            Some(_) => Err(Error::DuplicateIndexedProperty {
                uri: indexed.uri(),
                index: indexed.index(),
            }),
            None => {
                entries.insert(indexed.index(), indexed);
                Ok(())
            }
        }
    }

    pub fn schemas(&self) -> &[Arc<Schema>] {
        &self.schemas
    }

    /// Finds a schema by name, e.g. `AppointmentSchema`.
    pub fn schema(&self, name: &str) -> Option<Arc<Schema>> {
        self.schemas
            .iter()
            .find(|schema| schema.name() == name)
            .cloned()
    }

    /// Finds the schema of entities serialized as the given element.
    pub fn schema_for_element(&self, xml_element_name: &str) -> Option<Arc<Schema>> {
        self.schemas
            .iter()
            .find(|schema| schema.xml_element_name() == xml_element_name)
            .cloned()
    }

    pub fn find_property_by_uri(&self, uri: &str) -> Option<&'static PropertyDefinition> {
        self.by_uri.get(uri).copied()
    }

    pub fn find_indexed_property(
        &self,
        uri: &str,
        index: &str,
    ) -> Option<&'static IndexedPropertyDefinition> {
        self.by_indexed_uri.get(uri)?.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{flags, version::ExchangeVersion};

    static ITEM_ID: PropertyDefinition = PropertyDefinition::string(
        "ItemId",
        "item:ItemId",
        flags!(CAN_FIND),
        ExchangeVersion::Exchange2007_SP1,
    );

    static SUBJECT: PropertyDefinition = PropertyDefinition::string(
        "Subject",
        "item:Subject",
        flags!(CAN_SET, CAN_UPDATE, CAN_FIND),
        ExchangeVersion::Exchange2007_SP1,
    );

    static MIME: PropertyDefinition = PropertyDefinition::string(
        "MimeContent",
        "item:MimeContent",
        flags!(CAN_SET, MUST_BE_EXPLICITLY_LOADED),
        ExchangeVersion::Exchange2007_SP1,
    );

    static HIDDEN: PropertyDefinition = PropertyDefinition::string(
        "Hidden",
        "item:Hidden",
        flags!(CAN_SET),
        ExchangeVersion::Exchange2007_SP1,
    );

    // Same URI as SUBJECT, but a different definition.
    static IMPOSTOR: PropertyDefinition = PropertyDefinition::string(
        "Title",
        "item:Subject",
        flags!(CAN_SET),
        ExchangeVersion::Exchange2007_SP1,
    );

    static PHONES: PropertyDefinition = PropertyDefinition::string(
        "PhoneNumbers",
        "contacts:PhoneNumbers",
        flags!(CAN_SET),
        ExchangeVersion::Exchange2007_SP1,
    );

    static BUSINESS_PHONE: IndexedPropertyDefinition = IndexedPropertyDefinition::new(
        "contacts:PhoneNumber",
        "BusinessPhone",
        &PHONES,
        ExchangeVersion::Exchange2007_SP1,
    );

    static OTHER_BUSINESS_PHONE: IndexedPropertyDefinition = IndexedPropertyDefinition::new(
        "contacts:PhoneNumber",
        "BusinessPhone",
        &PHONES,
        ExchangeVersion::Exchange2007_SP1,
    );

    static BASE: PropertyGroup = PropertyGroup {
        name: "Base",
        registrations: &[
            Registration::Property(&MIME),
            Registration::Property(&ITEM_ID),
            Registration::Property(&SUBJECT),
            Registration::Internal(&HIDDEN),
            Registration::Indexed(&BUSINESS_PHONE),
        ],
        declared: &[],
    };

    static BASE_SCHEMA: EntitySchema = EntitySchema {
        name: "BaseSchema",
        xml_element_name: "Base",
        kind: EntityKind::Item,
        id_property: &ITEM_ID,
        groups: &[&BASE],
    };

    #[test]
    fn registrations_are_sorted_by_audience() {
        let schema = Schema::new(&BASE_SCHEMA).expect("schema should build");

        let names = |list: &[&'static PropertyDefinition]| {
            list.iter().map(|definition| definition.name()).collect::<Vec<_>>()
        };

        assert_eq!(
            names(schema.properties()),
            ["MimeContent", "ItemId", "Subject", "Hidden"]
        );
        assert_eq!(
            names(schema.visible_properties()),
            ["MimeContent", "ItemId", "Subject"]
        );
        assert_eq!(
            names(schema.first_class_properties()),
            ["ItemId", "Subject", "Hidden"]
        );
        assert_eq!(
            names(schema.first_class_summary_properties()),
            ["ItemId", "Subject"]
        );
        assert_eq!(schema.indexed_properties().len(), 1);

        assert!(schema.try_get_property_definition("MimeContent").is_some());
        assert!(schema.try_get_property_definition("Body").is_none());
        assert!(schema.contains(&SUBJECT));
        assert!(!schema.contains(&IMPOSTOR));
        assert!(schema.contains_indexed(&BUSINESS_PHONE));
    }

    #[test]
    fn duplicate_element_names_are_rejected() {
        static TWICE: PropertyGroup = PropertyGroup {
            name: "Twice",
            registrations: &[
                Registration::Property(&ITEM_ID),
                Registration::Property(&SUBJECT),
            ],
            declared: &[],
        };

        static SCHEMA: EntitySchema = EntitySchema {
            name: "TwiceSchema",
            xml_element_name: "Twice",
            kind: EntityKind::Item,
            id_property: &ITEM_ID,
            groups: &[&BASE, &TWICE],
        };

        let err = Schema::new(&SCHEMA).expect_err("element registered twice should fail");
        assert!(matches!(
            err,
            Error::DuplicatePropertyName {
                schema: "TwiceSchema",
                element: "ItemId"
            }
        ));
        assert!(err.is_internal());
    }

    #[test]
    fn shared_definitions_are_not_collisions() {
        static DERIVED: PropertyGroup = PropertyGroup {
            name: "Derived",
            registrations: &[],
            declared: &[&SUBJECT],
        };

        static DERIVED_SCHEMA: EntitySchema = EntitySchema {
            name: "DerivedSchema",
            xml_element_name: "Derived",
            kind: EntityKind::Item,
            id_property: &ITEM_ID,
            groups: &[&BASE, &DERIVED],
        };

        let registry = SchemaRegistry::build(&[&BASE_SCHEMA, &DERIVED_SCHEMA])
            .expect("reference-equal definitions should be accepted");

        let found = registry
            .find_property_by_uri("item:Subject")
            .expect("subject should be registered");
        assert!(ptr::eq(found, &SUBJECT));

        let phone = registry
            .find_indexed_property("contacts:PhoneNumber", "BusinessPhone")
            .expect("indexed property should be registered");
        assert!(ptr::eq(phone, &BUSINESS_PHONE));
        assert!(registry
            .find_indexed_property("contacts:PhoneNumber", "HomePhone")
            .is_none());
        assert!(registry
            .find_indexed_property("contacts:EmailAddress", "BusinessPhone")
            .is_none());
        assert!(registry.find_property_by_uri("contacts:PhoneNumbers").is_some());

        assert_eq!(
            registry
                .schema_for_element("Derived")
                .map(|schema| schema.name()),
            Some("DerivedSchema")
        );
    }

    #[test]
    fn colliding_field_uris_are_rejected() {
        static COLLIDING: PropertyGroup = PropertyGroup {
            name: "Colliding",
            registrations: &[Registration::Property(&IMPOSTOR)],
            declared: &[],
        };

        static COLLIDING_SCHEMA: EntitySchema = EntitySchema {
            name: "CollidingSchema",
            xml_element_name: "Colliding",
            kind: EntityKind::Item,
            id_property: &IMPOSTOR,
            groups: &[&COLLIDING],
        };

        let err = SchemaRegistry::build(&[&BASE_SCHEMA, &COLLIDING_SCHEMA])
            .expect_err("distinct definitions sharing a URI should fail");
        assert!(matches!(
            err,
            Error::DuplicateFieldUri {
                uri: "item:Subject",
                first: "Subject",
                second: "Title"
            }
        ));
        assert!(err.is_internal());
    }

    #[test]
    fn colliding_indexed_fields_are_rejected() {
        static COLLIDING: PropertyGroup = PropertyGroup {
            name: "Colliding",
            registrations: &[Registration::Indexed(&OTHER_BUSINESS_PHONE)],
            declared: &[],
        };

        static COLLIDING_SCHEMA: EntitySchema = EntitySchema {
            name: "CollidingSchema",
            xml_element_name: "Colliding",
            kind: EntityKind::Item,
            id_property: &ITEM_ID,
            groups: &[&BASE, &COLLIDING],
        };

        let err = SchemaRegistry::build(&[&COLLIDING_SCHEMA])
            .expect_err("distinct indexed definitions sharing a key should fail");
        assert!(matches!(
            err,
            Error::DuplicateIndexedProperty {
                uri: "contacts:PhoneNumber",
                index: "BusinessPhone"
            }
        ));
    }

    #[test]
    fn missing_id_property_is_rejected() {
        static NO_ID: EntitySchema = EntitySchema {
            name: "NoIdSchema",
            xml_element_name: "NoId",
            kind: EntityKind::Item,
            id_property: &IMPOSTOR,
            groups: &[&BASE],
        };

        assert!(matches!(
            Schema::new(&NO_ID),
            Err(Error::InvalidPropertyForSchema { .. })
        ));
    }
}
