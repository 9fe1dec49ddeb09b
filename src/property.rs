/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Descriptors for the addressable fields of EWS entities.
//!
//! A [`PropertyDefinition`] is declared once as a `static` and referenced from
//! every schema that registers it. Two schemas registering the same `static`
//! share the definition; two different `static`s claiming the same field URI
//! are a defect, detected when a [`SchemaRegistry`] is built.
//!
//! [`SchemaRegistry`]: crate::SchemaRegistry

use std::fmt;

use bitflags::bitflags;

use crate::{
    value::{ComplexFactory, ComplexProperty, DateTime, PropertyValue},
    version::ExchangeVersion,
    xml::{XmlElement, XmlNamespace, XmlWriter},
    Error,
};

bitflags! {
    /// What callers and requests may do with a property.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PropertyDefinitionFlags: u8 {
        /// The property can be set when creating an entity.
        const CAN_SET = 1 << 0;

        /// The property can be changed on an existing entity.
        const CAN_UPDATE = 1 << 1;

        /// The property can be removed from an existing entity.
        const CAN_DELETE = 1 << 2;

        /// The property can be returned by find requests.
        const CAN_FIND = 1 << 3;

        /// The property is only returned when explicitly requested.
        const MUST_BE_EXPLICITLY_LOADED = 1 << 4;

        /// Reading an unset complex value creates an empty instance.
        const AUTO_INSTANTIATE_ON_READ = 1 << 5;

        /// Loading the property updates the existing complex value in place.
        const REUSE_INSTANCE = 1 << 6;
    }
}

/// Builds a [`PropertyDefinitionFlags`] value in a `const` context.
///
/// ```
/// use ews_schema::{flags, PropertyDefinitionFlags};
///
/// const SETTABLE: PropertyDefinitionFlags = flags!(CAN_SET, CAN_UPDATE);
/// assert!(SETTABLE.contains(PropertyDefinitionFlags::CAN_UPDATE));
/// ```
#[macro_export]
macro_rules! flags {
    () => {
        $crate::PropertyDefinitionFlags::empty()
    };
    ($( $flag:ident ),+ $(,)?) => {
        $crate::PropertyDefinitionFlags::empty()
            $( .union($crate::PropertyDefinitionFlags::$flag) )+
    };
}

/// The type of value a property holds.
#[derive(Clone, Copy)]
pub enum PropertyKind {
    String,
    Boolean,
    Integer,
    Double,
    DateTime,

    /// A value restricted to the given wire strings.
    Enum(&'static [&'static str]),

    /// A nested value, created empty by the factory.
    Complex(ComplexFactory),
}

impl fmt::Debug for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKind::String => f.write_str("String"),
            PropertyKind::Boolean => f.write_str("Boolean"),
            PropertyKind::Integer => f.write_str("Integer"),
            PropertyKind::Double => f.write_str("Double"),
            PropertyKind::DateTime => f.write_str("DateTime"),
            PropertyKind::Enum(values) => f.debug_tuple("Enum").field(values).finish(),
            PropertyKind::Complex(_) => f.write_str("Complex"),
        }
    }
}

/// The description of one field of an EWS entity.
#[derive(Debug)]
pub struct PropertyDefinition {
    name: &'static str,
    xml_element_name: &'static str,
    uri: Option<&'static str>,
    flags: PropertyDefinitionFlags,
    version: ExchangeVersion,
    superseded_after: Option<ExchangeVersion>,
    nullable: bool,
    kind: PropertyKind,
}

impl PropertyDefinition {
    /// Declares a property. Its name defaults to its element name and it is
    /// nullable unless it holds a boolean, integer or double.
    pub const fn new(
        xml_element_name: &'static str,
        uri: &'static str,
        kind: PropertyKind,
        flags: PropertyDefinitionFlags,
        version: ExchangeVersion,
    ) -> Self {
        let nullable = !matches!(
            kind,
            PropertyKind::Boolean | PropertyKind::Integer | PropertyKind::Double
        );

        Self {
            name: xml_element_name,
            xml_element_name,
            uri: Some(uri),
            flags,
            version,
            superseded_after: None,
            nullable,
            kind,
        }
    }

    pub const fn string(
        xml_element_name: &'static str,
        uri: &'static str,
        flags: PropertyDefinitionFlags,
        version: ExchangeVersion,
    ) -> Self {
        Self::new(xml_element_name, uri, PropertyKind::String, flags, version)
    }

    pub const fn boolean(
        xml_element_name: &'static str,
        uri: &'static str,
        flags: PropertyDefinitionFlags,
        version: ExchangeVersion,
    ) -> Self {
        Self::new(xml_element_name, uri, PropertyKind::Boolean, flags, version)
    }

    pub const fn integer(
        xml_element_name: &'static str,
        uri: &'static str,
        flags: PropertyDefinitionFlags,
        version: ExchangeVersion,
    ) -> Self {
        Self::new(xml_element_name, uri, PropertyKind::Integer, flags, version)
    }

    pub const fn double(
        xml_element_name: &'static str,
        uri: &'static str,
        flags: PropertyDefinitionFlags,
        version: ExchangeVersion,
    ) -> Self {
        Self::new(xml_element_name, uri, PropertyKind::Double, flags, version)
    }

    pub const fn date_time(
        xml_element_name: &'static str,
        uri: &'static str,
        flags: PropertyDefinitionFlags,
        version: ExchangeVersion,
    ) -> Self {
        Self::new(xml_element_name, uri, PropertyKind::DateTime, flags, version)
    }

    pub const fn generic_enum(
        xml_element_name: &'static str,
        uri: &'static str,
        values: &'static [&'static str],
        flags: PropertyDefinitionFlags,
        version: ExchangeVersion,
    ) -> Self {
        Self::new(xml_element_name, uri, PropertyKind::Enum(values), flags, version)
    }

    pub const fn complex(
        xml_element_name: &'static str,
        uri: &'static str,
        factory: ComplexFactory,
        flags: PropertyDefinitionFlags,
        version: ExchangeVersion,
    ) -> Self {
        Self::new(xml_element_name, uri, PropertyKind::Complex(factory), flags, version)
    }

    /// Sets the public name of a property whose element name differs from it.
    pub const fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Removes the field URI. Such properties cannot be requested and are not
    /// part of the global URI lookup.
    pub const fn without_uri(mut self) -> Self {
        self.uri = None;
        self
    }

    pub const fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Marks the property as replaced by others on servers newer than
    /// `version`. It is still read from any server, but only written to
    /// servers up to `version`.
    pub const fn superseded_after(mut self, version: ExchangeVersion) -> Self {
        self.superseded_after = Some(version);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn xml_element_name(&self) -> &'static str {
        self.xml_element_name
    }

    pub fn uri(&self) -> Option<&'static str> {
        self.uri
    }

    pub fn flags(&self) -> PropertyDefinitionFlags {
        self.flags
    }

    pub fn has_flag(&self, flag: PropertyDefinitionFlags) -> bool {
        self.flags.contains(flag)
    }

    /// The oldest server version supporting this property.
    pub fn version(&self) -> ExchangeVersion {
        self.version
    }

    pub fn is_supported_by(&self, version: ExchangeVersion) -> bool {
        version >= self.version
    }

    /// Whether servers speaking `version` expect replacement properties
    /// instead of this one.
    pub fn is_superseded_for(&self, version: ExchangeVersion) -> bool {
        matches!(self.superseded_after, Some(last) if version > last)
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn kind(&self) -> PropertyKind {
        self.kind
    }

    /// Creates an empty value for complex properties.
    pub fn instantiate(&self) -> Option<Box<dyn ComplexProperty>> {
        match self.kind {
            PropertyKind::Complex(factory) => Some(factory()),
            _ => None,
        }
    }

    /// Checks that `value` fits this property, normalizing strings given for
    /// enum properties into their static wire value.
    pub fn coerce(&self, value: PropertyValue) -> Result<PropertyValue, Error> {
        let mismatch = |value: &PropertyValue| Error::InvalidPropertyValue {
            property: self.name,
            reason: format!("expected {:?} value, got {}", self.kind, value.kind_name()),
        };

        match (self.kind, value) {
            (PropertyKind::String, value @ PropertyValue::String(_))
            | (PropertyKind::Boolean, value @ PropertyValue::Boolean(_))
            | (PropertyKind::Integer, value @ PropertyValue::Integer(_))
            | (PropertyKind::Double, value @ PropertyValue::Double(_))
            | (PropertyKind::DateTime, value @ PropertyValue::DateTime(_)) => Ok(value),

            (PropertyKind::Double, PropertyValue::Integer(value)) => {
                Ok(PropertyValue::Double(f64::from(value)))
            }

            (PropertyKind::Enum(values), PropertyValue::Enum(value)) => {
                self.enum_value(values, value).map(PropertyValue::Enum)
            }
            (PropertyKind::Enum(values), PropertyValue::String(value)) => {
                self.enum_value(values, &value).map(PropertyValue::Enum)
            }

            (PropertyKind::Complex(factory), PropertyValue::Complex(value)) => {
                // The factory's product tells us which concrete type belongs
                // to this property.
                if factory().as_any().type_id() == value.as_any().type_id() {
                    Ok(PropertyValue::Complex(value))
                } else {
                    Err(Error::InvalidPropertyValue {
                        property: self.name,
                        reason: format!("unexpected complex value {value:?}"),
                    })
                }
            }

            (_, value) => Err(mismatch(&value)),
        }
    }

    fn enum_value(&self, values: &'static [&'static str], value: &str) -> Result<&'static str, Error> {
        values
            .iter()
            .copied()
            .find(|candidate| *candidate == value)
            .ok_or_else(|| Error::InvalidPropertyValue {
                property: self.name,
                reason: format!("`{value}` is not one of {values:?}"),
            })
    }

    /// Reads this property's value from its element in a response.
    pub fn read_value(&self, element: &XmlElement) -> Result<PropertyValue, Error> {
        let text = element.text.as_str();
        let invalid = |reason: String| Error::InvalidPropertyValue {
            property: self.name,
            reason,
        };

        let value = match self.kind {
            PropertyKind::String => PropertyValue::String(text.to_string()),
            PropertyKind::Boolean => match text {
                "true" | "1" => PropertyValue::Boolean(true),
                "false" | "0" => PropertyValue::Boolean(false),
                _ => return Err(invalid(format!("`{text}` is not a boolean"))),
            },
            PropertyKind::Integer => PropertyValue::Integer(
                text.parse()
                    .map_err(|_| invalid(format!("`{text}` is not an integer")))?,
            ),
            PropertyKind::Double => PropertyValue::Double(
                text.parse()
                    .map_err(|_| invalid(format!("`{text}` is not a number")))?,
            ),
            PropertyKind::DateTime => PropertyValue::DateTime(DateTime::parse(text)?),
            PropertyKind::Enum(values) => PropertyValue::Enum(self.enum_value(values, text)?),
            PropertyKind::Complex(factory) => {
                let mut value = factory();
                value.load_from_xml(element)?;
                PropertyValue::Complex(value)
            }
        };

        Ok(value)
    }

    /// Writes `value` as this property's element.
    pub fn write_value(&self, writer: &mut XmlWriter, value: &PropertyValue) -> Result<(), Error> {
        value.write_element(writer, self.xml_element_name)
    }

    /// Writes the path identifying this property in a request.
    pub fn write_path(&self, writer: &mut XmlWriter) -> Result<(), Error> {
        let uri = self.uri.ok_or(Error::PropertyNotRequestable(self.name))?;
        writer.write_empty(XmlNamespace::Types, "FieldURI", &[("FieldURI", uri)])
    }
}

/// A property addressed by a field URI plus an index label, such as one
/// specific phone number of a contact.
#[derive(Debug)]
pub struct IndexedPropertyDefinition {
    uri: &'static str,
    index: &'static str,
    version: ExchangeVersion,
    dictionary: &'static PropertyDefinition,
}

impl IndexedPropertyDefinition {
    /// Declares the entry `index` of the dictionary held by `dictionary`.
    pub const fn new(
        uri: &'static str,
        index: &'static str,
        dictionary: &'static PropertyDefinition,
        version: ExchangeVersion,
    ) -> Self {
        Self {
            uri,
            index,
            version,
            dictionary,
        }
    }

    pub fn uri(&self) -> &'static str {
        self.uri
    }

    pub fn index(&self) -> &'static str {
        self.index
    }

    pub fn version(&self) -> ExchangeVersion {
        self.version
    }

    pub fn is_supported_by(&self, version: ExchangeVersion) -> bool {
        version >= self.version
    }

    /// The dictionary property holding this entry's value.
    pub fn dictionary(&self) -> &'static PropertyDefinition {
        self.dictionary
    }

    pub fn write_path(&self, writer: &mut XmlWriter) -> Result<(), Error> {
        writer.write_empty(
            XmlNamespace::Types,
            "IndexedFieldURI",
            &[("FieldURI", self.uri), ("FieldIndex", self.index)],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complex::StringList;
    use crate::value::instantiate;

    static SUBJECT: PropertyDefinition = PropertyDefinition::string(
        "Subject",
        "item:Subject",
        flags!(CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
        ExchangeVersion::Exchange2007_SP1,
    );

    static IMPORTANCE: PropertyDefinition = PropertyDefinition::generic_enum(
        "Importance",
        "item:Importance",
        &["Low", "Normal", "High"],
        flags!(CAN_SET, CAN_UPDATE, CAN_FIND),
        ExchangeVersion::Exchange2007_SP1,
    );

    static CATEGORIES: PropertyDefinition = PropertyDefinition::complex(
        "Categories",
        "item:Categories",
        instantiate::<StringList>,
        flags!(AUTO_INSTANTIATE_ON_READ, CAN_SET),
        ExchangeVersion::Exchange2007_SP1,
    );

    static REMINDER: PropertyDefinition = PropertyDefinition::boolean(
        "ReminderIsSet",
        "item:ReminderIsSet",
        flags!(CAN_SET),
        ExchangeVersion::Exchange2010,
    )
    .named("IsReminderSet");

    #[test]
    fn flags_and_version_queries() {
        assert!(SUBJECT.has_flag(PropertyDefinitionFlags::CAN_FIND));
        assert!(!SUBJECT.has_flag(PropertyDefinitionFlags::MUST_BE_EXPLICITLY_LOADED));
        assert!(SUBJECT.has_flag(flags!(CAN_SET, CAN_UPDATE)));
        assert_eq!(flags!(), PropertyDefinitionFlags::empty());

        assert!(!REMINDER.is_supported_by(ExchangeVersion::Exchange2007_SP1));
        assert!(REMINDER.is_supported_by(ExchangeVersion::Exchange2013));
    }

    #[test]
    fn names_default_to_element_names() {
        assert_eq!(SUBJECT.name(), "Subject");
        assert_eq!(REMINDER.name(), "IsReminderSet");
        assert_eq!(REMINDER.xml_element_name(), "ReminderIsSet");
        assert!(SUBJECT.is_nullable());
        assert!(!REMINDER.is_nullable());
    }

    #[test]
    fn coerce_normalizes_enum_strings() {
        let value = IMPORTANCE
            .coerce(PropertyValue::from("High"))
            .expect("known enum value should be accepted");
        assert!(matches!(value, PropertyValue::Enum("High")));

        let err = IMPORTANCE
            .coerce(PropertyValue::from("Urgent"))
            .expect_err("unknown enum value should be rejected");
        assert!(matches!(err, Error::InvalidPropertyValue { property: "Importance", .. }));

        let err = SUBJECT
            .coerce(PropertyValue::from(3))
            .expect_err("integer should not fit a string property");
        assert!(matches!(err, Error::InvalidPropertyValue { property: "Subject", .. }));
    }

    #[test]
    fn coerce_checks_complex_types() {
        CATEGORIES
            .coerce(PropertyValue::complex(StringList::from(vec!["Red".to_string()])))
            .expect("string list should fit categories");

        let err = CATEGORIES
            .coerce(PropertyValue::complex(crate::complex::ItemBody::text("hi")))
            .expect_err("body should not fit categories");
        assert!(matches!(err, Error::InvalidPropertyValue { .. }));

        assert!(CATEGORIES.instantiate().is_some());
        assert!(SUBJECT.instantiate().is_none());
    }

    #[test]
    fn read_value_parses_by_kind() {
        let element = XmlElement {
            name: "ReminderIsSet".to_string(),
            text: "true".to_string(),
            ..Default::default()
        };
        let value = REMINDER.read_value(&element).expect("boolean should parse");
        assert_eq!(value.as_bool(), Some(true));

        let element = XmlElement {
            name: "ReminderIsSet".to_string(),
            text: "maybe".to_string(),
            ..Default::default()
        };
        assert!(REMINDER.read_value(&element).is_err());
    }

    #[test]
    fn paths_write_field_uris() {
        let mut writer = XmlWriter::new();
        SUBJECT.write_path(&mut writer).expect("path should be written");
        assert_eq!(
            writer.into_string().expect("output should be UTF-8"),
            r#"<t:FieldURI FieldURI="item:Subject"/>"#
        );

        static NO_URI: PropertyDefinition = PropertyDefinition::string(
            "ExtendedProperty",
            "unused",
            flags!(CAN_SET),
            ExchangeVersion::Exchange2007_SP1,
        )
        .without_uri();

        let mut writer = XmlWriter::new();
        let err = NO_URI
            .write_path(&mut writer)
            .expect_err("property without URI cannot be requested");
        assert!(matches!(err, Error::PropertyNotRequestable("ExtendedProperty")));
    }
}
