/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::{any::Any, fmt};

use serde_json::Value;
use time::{
    format_description::well_known::{Iso8601, Rfc3339},
    OffsetDateTime, PrimitiveDateTime,
};

use crate::{
    json::ToJson,
    xml::{XmlElement, XmlNamespace, XmlWriter},
    Error,
};

/// A point in time as exchanged with the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime(pub OffsetDateTime);

impl DateTime {
    /// Parses an `xs:dateTime` value.
    ///
    /// Values without an offset are interpreted as UTC, which is how Exchange
    /// reports date-only properties such as birthdays.
    pub fn parse(value: &str) -> Result<Self, Error> {
        match OffsetDateTime::parse(value, &Rfc3339) {
            Ok(date_time) => Ok(Self(date_time)),
            Err(_) => {
                let date_time = PrimitiveDateTime::parse(value, &Iso8601::DEFAULT)?;
                Ok(Self(date_time.assume_utc()))
            }
        }
    }

    /// Formats the value as an RFC 3339 string.
    pub fn to_wire_string(&self) -> Result<String, Error> {
        Ok(self.0.format(&Rfc3339)?)
    }
}

impl From<OffsetDateTime> for DateTime {
    fn from(value: OffsetDateTime) -> Self {
        Self(value)
    }
}

/// Creates an empty instance of a complex property value.
pub type ComplexFactory = fn() -> Box<dyn ComplexProperty>;

/// The factory for a complex type with a meaningful default.
pub fn instantiate<T>() -> Box<dyn ComplexProperty>
where
    T: ComplexProperty + Clone + Default + 'static,
{
    Box::new(T::default())
}

/// Object-safe plumbing shared by every complex property value.
///
/// Implemented automatically for any cloneable [`ComplexProperty`].
pub trait AnyComplexProperty {
    fn clone_boxed(&self) -> Box<dyn ComplexProperty>;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T> AnyComplexProperty for T
where
    T: ComplexProperty + Clone + 'static,
{
    fn clone_boxed(&self) -> Box<dyn ComplexProperty> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A property value made of nested elements rather than a single text node.
pub trait ComplexProperty: AnyComplexProperty + fmt::Debug + Send + Sync + ToJson {
    /// Writes the value as a `t:`-prefixed element with the given name.
    fn write_element(&self, writer: &mut XmlWriter, name: &str) -> Result<(), Error> {
        writer.write_start(XmlNamespace::Types, name, &[])?;
        self.write_content(writer)?;
        writer.write_end(XmlNamespace::Types, name)
    }

    /// Writes the nodes inside the property element.
    fn write_content(&self, writer: &mut XmlWriter) -> Result<(), Error>;

    /// Replaces the value with the contents of a property element.
    fn load_from_xml(&mut self, element: &XmlElement) -> Result<(), Error>;
}

impl dyn ComplexProperty {
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}

/// The value of a property on an entity.
#[derive(Debug)]
pub enum PropertyValue {
    String(String),
    Boolean(bool),
    Integer(i32),
    Double(f64),
    DateTime(DateTime),

    /// One of the wire values allowed by an enum property.
    Enum(&'static str),

    Complex(Box<dyn ComplexProperty>),
}

impl Clone for PropertyValue {
    fn clone(&self) -> Self {
        match self {
            PropertyValue::String(value) => PropertyValue::String(value.clone()),
            PropertyValue::Boolean(value) => PropertyValue::Boolean(*value),
            PropertyValue::Integer(value) => PropertyValue::Integer(*value),
            PropertyValue::Double(value) => PropertyValue::Double(*value),
            PropertyValue::DateTime(value) => PropertyValue::DateTime(*value),
            PropertyValue::Enum(value) => PropertyValue::Enum(*value),
            PropertyValue::Complex(value) => PropertyValue::Complex(value.clone_boxed()),
        }
    }
}

impl PropertyValue {
    pub fn complex<T>(value: T) -> Self
    where
        T: ComplexProperty + Clone + 'static,
    {
        PropertyValue::Complex(Box::new(value))
    }

    /// A short description of the kind of value, for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            PropertyValue::String(_) => "string",
            PropertyValue::Boolean(_) => "boolean",
            PropertyValue::Integer(_) => "integer",
            PropertyValue::Double(_) => "double",
            PropertyValue::DateTime(_) => "date-time",
            PropertyValue::Enum(_) => "enum",
            PropertyValue::Complex(_) => "complex",
        }
    }

    /// The text of string and enum values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(value) => Some(value.as_str()),
            PropertyValue::Enum(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i32> {
        match self {
            PropertyValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            PropertyValue::Double(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_date_time(&self) -> Option<DateTime> {
        match self {
            PropertyValue::DateTime(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_complex<T: 'static>(&self) -> Option<&T> {
        match self {
            PropertyValue::Complex(value) => value.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Writes the value as a `t:`-prefixed element with the given name.
    pub fn write_element(&self, writer: &mut XmlWriter, name: &str) -> Result<(), Error> {
        let text = match self {
            PropertyValue::String(value) => value.clone(),
            PropertyValue::Boolean(value) => value.to_string(),
            PropertyValue::Integer(value) => value.to_string(),
            PropertyValue::Double(value) => value.to_string(),
            PropertyValue::DateTime(value) => value.to_wire_string()?,
            PropertyValue::Enum(value) => (*value).to_string(),
            PropertyValue::Complex(value) => return value.write_element(writer, name),
        };

        writer.write_text_element(XmlNamespace::Types, name, &text)
    }
}

impl ToJson for PropertyValue {
    fn to_json(&self) -> Value {
        match self {
            PropertyValue::String(value) => Value::String(value.clone()),
            PropertyValue::Boolean(value) => Value::Bool(*value),
            PropertyValue::Integer(value) => Value::from(*value),
            PropertyValue::Double(value) => Value::from(*value),
            PropertyValue::DateTime(value) => match value.to_wire_string() {
                Ok(text) => Value::String(text),
                Err(err) => {
                    log::warn!("date/time {:?} has no RFC 3339 form: {err}", value.0);
                    Value::Null
                }
            },
            PropertyValue::Enum(value) => Value::String((*value).to_string()),
            PropertyValue::Complex(value) => value.to_json(),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::String(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Boolean(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        PropertyValue::Integer(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Double(value)
    }
}

impl From<DateTime> for PropertyValue {
    fn from(value: DateTime) -> Self {
        PropertyValue::DateTime(value)
    }
}

impl From<OffsetDateTime> for PropertyValue {
    fn from(value: OffsetDateTime) -> Self {
        PropertyValue::DateTime(DateTime(value))
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn date_times_parse_with_and_without_offset() {
        let with_offset = DateTime::parse("2024-03-01T09:30:00Z").expect("UTC value should parse");
        assert_eq!(with_offset.0, datetime!(2024-03-01 09:30:00 UTC));

        let shifted =
            DateTime::parse("2024-03-01T10:30:00+01:00").expect("offset value should parse");
        assert_eq!(shifted.0, with_offset.0, "both values name the same instant");

        let local = DateTime::parse("2024-03-01T09:30:00").expect("bare value should parse");
        assert_eq!(local.0, with_offset.0, "bare values are read as UTC");

        assert_eq!(
            with_offset.to_wire_string().expect("value should format"),
            "2024-03-01T09:30:00Z"
        );
    }

    #[test]
    fn unformattable_date_times_become_null_in_json() {
        let value = PropertyValue::DateTime(DateTime(datetime!(2024-03-01 09:30:00 +01:00:30)));
        assert!(DateTime(datetime!(2024-03-01 09:30:00 +01:00:30))
            .to_wire_string()
            .is_err());
        assert_eq!(value.to_json(), Value::Null);

        let value = PropertyValue::DateTime(DateTime(datetime!(2024-03-01 09:30:00 UTC)));
        assert_eq!(value.to_json(), Value::String("2024-03-01T09:30:00Z".into()));
    }

    #[test]
    fn simple_values_write_as_text_elements() {
        let mut writer = XmlWriter::new();
        PropertyValue::from(true)
            .write_element(&mut writer, "IsRead")
            .expect("boolean should be written");
        PropertyValue::from(15)
            .write_element(&mut writer, "ReminderMinutesBeforeStart")
            .expect("integer should be written");
        PropertyValue::Enum("High")
            .write_element(&mut writer, "Importance")
            .expect("enum should be written");

        assert_eq!(
            writer.into_string().expect("output should be UTF-8"),
            "<t:IsRead>true</t:IsRead><t:ReminderMinutesBeforeStart>15</t:ReminderMinutesBeforeStart><t:Importance>High</t:Importance>"
        );
    }

    #[test]
    fn accessors_only_match_their_kind() {
        let value = PropertyValue::from("subject");
        assert_eq!(value.as_str(), Some("subject"));
        assert_eq!(value.as_bool(), None);
        assert_eq!(value.kind_name(), "string");
        assert_eq!(PropertyValue::Enum("Normal").as_str(), Some("Normal"));
    }
}
