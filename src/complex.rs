/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Values of complex (nested) properties.

use serde_json::{Map, Value};

use crate::{
    json::{insert_optional, typed_object, ToJson},
    value::ComplexProperty,
    xml::{XmlElement, XmlNamespace, XmlWriter},
    Error,
};

/// The format of an item body.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/body>
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BodyType {
    #[default]
    Html,
    Text,
}

impl BodyType {
    pub fn as_str(self) -> &'static str {
        match self {
            BodyType::Html => "HTML",
            BodyType::Text => "Text",
        }
    }

    fn parse(value: &str) -> Result<Self, Error> {
        match value {
            "HTML" => Ok(BodyType::Html),
            "Text" => Ok(BodyType::Text),
            _ => Err(Error::UnexpectedResponse(format!(
                "unknown body type `{value}`"
            ))),
        }
    }
}

/// The body of an item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemBody {
    pub body_type: BodyType,
    pub text: String,
}

impl ItemBody {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            body_type: BodyType::Text,
            text: text.into(),
        }
    }

    pub fn html(text: impl Into<String>) -> Self {
        Self {
            body_type: BodyType::Html,
            text: text.into(),
        }
    }
}

impl ComplexProperty for ItemBody {
    fn write_element(&self, writer: &mut XmlWriter, name: &str) -> Result<(), Error> {
        writer.write_start(
            XmlNamespace::Types,
            name,
            &[("BodyType", self.body_type.as_str())],
        )?;
        self.write_content(writer)?;
        writer.write_end(XmlNamespace::Types, name)
    }

    fn write_content(&self, writer: &mut XmlWriter) -> Result<(), Error> {
        writer.write_text(&self.text)
    }

    fn load_from_xml(&mut self, element: &XmlElement) -> Result<(), Error> {
        self.body_type = match element.attribute("BodyType") {
            Some(body_type) => BodyType::parse(body_type)?,
            None => BodyType::default(),
        };
        self.text = element.text.clone();

        Ok(())
    }
}

impl ToJson for ItemBody {
    fn to_json(&self) -> Value {
        let mut object = typed_object("BodyContentType");
        object.insert("BodyType".to_string(), self.body_type.as_str().into());
        object.insert("Value".to_string(), self.text.clone().into());
        Value::Object(object)
    }
}

/// The MIME stream of an item, base64-encoded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MimeContent {
    pub character_set: Option<String>,
    pub content: String,
}

impl ComplexProperty for MimeContent {
    fn write_element(&self, writer: &mut XmlWriter, name: &str) -> Result<(), Error> {
        let attributes: Vec<(&str, &str)> = self
            .character_set
            .as_deref()
            .map(|charset| ("CharacterSet", charset))
            .into_iter()
            .collect();

        writer.write_start(XmlNamespace::Types, name, &attributes)?;
        self.write_content(writer)?;
        writer.write_end(XmlNamespace::Types, name)
    }

    fn write_content(&self, writer: &mut XmlWriter) -> Result<(), Error> {
        writer.write_text(&self.content)
    }

    fn load_from_xml(&mut self, element: &XmlElement) -> Result<(), Error> {
        self.character_set = element.attribute("CharacterSet").map(str::to_string);
        self.content = element.text.clone();

        Ok(())
    }
}

impl ToJson for MimeContent {
    fn to_json(&self) -> Value {
        let mut object = typed_object("MimeContentType");
        insert_optional(&mut object, "CharacterSet", self.character_set.as_deref());
        object.insert("Value".to_string(), self.content.clone().into());
        Value::Object(object)
    }
}

/// A mailbox, written as a `t:Mailbox` element.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/mailbox>
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmailAddress {
    pub name: Option<String>,
    pub address: Option<String>,
    pub routing_type: Option<String>,
    pub mailbox_type: Option<String>,
}

impl EmailAddress {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            address: Some(address.into()),
            ..Default::default()
        }
    }

    pub(crate) fn write_mailbox(&self, writer: &mut XmlWriter) -> Result<(), Error> {
        writer.write_start(XmlNamespace::Types, "Mailbox", &[])?;
        writer.write_optional_text_element(XmlNamespace::Types, "Name", self.name.as_deref())?;
        writer.write_optional_text_element(
            XmlNamespace::Types,
            "EmailAddress",
            self.address.as_deref(),
        )?;
        writer.write_optional_text_element(
            XmlNamespace::Types,
            "RoutingType",
            self.routing_type.as_deref(),
        )?;
        writer.write_optional_text_element(
            XmlNamespace::Types,
            "MailboxType",
            self.mailbox_type.as_deref(),
        )?;
        writer.write_end(XmlNamespace::Types, "Mailbox")
    }

    pub(crate) fn from_mailbox(mailbox: &XmlElement) -> Self {
        let text = |name: &str| mailbox.child_text(name).map(str::to_string);

        Self {
            name: text("Name"),
            address: text("EmailAddress"),
            routing_type: text("RoutingType"),
            mailbox_type: text("MailboxType"),
        }
    }
}

impl ComplexProperty for EmailAddress {
    fn write_content(&self, writer: &mut XmlWriter) -> Result<(), Error> {
        self.write_mailbox(writer)
    }

    fn load_from_xml(&mut self, element: &XmlElement) -> Result<(), Error> {
        let mailbox = if element.name == "Mailbox" {
            element
        } else {
            element.required_child("Mailbox")?
        };
        *self = Self::from_mailbox(mailbox);

        Ok(())
    }
}

impl ToJson for EmailAddress {
    fn to_json(&self) -> Value {
        let mut object = typed_object("EmailAddress");
        insert_optional(&mut object, "Name", self.name.as_deref());
        insert_optional(&mut object, "EmailAddress", self.address.as_deref());
        insert_optional(&mut object, "RoutingType", self.routing_type.as_deref());
        insert_optional(&mut object, "MailboxType", self.mailbox_type.as_deref());
        Value::Object(object)
    }
}

/// A list of mailboxes, such as the recipients of a message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmailAddressCollection(pub Vec<EmailAddress>);

impl EmailAddressCollection {
    pub fn push(&mut self, address: EmailAddress) {
        self.0.push(address);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EmailAddress> {
        self.0.iter()
    }
}

impl ComplexProperty for EmailAddressCollection {
    fn write_content(&self, writer: &mut XmlWriter) -> Result<(), Error> {
        for address in &self.0 {
            address.write_mailbox(writer)?;
        }

        Ok(())
    }

    fn load_from_xml(&mut self, element: &XmlElement) -> Result<(), Error> {
        self.0 = element
            .children_named("Mailbox")
            .map(EmailAddress::from_mailbox)
            .collect();

        Ok(())
    }
}

impl ToJson for EmailAddressCollection {
    fn to_json(&self) -> Value {
        self.0.as_slice().to_json()
    }
}

/// A meeting attendee.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/attendee>
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attendee {
    pub mailbox: EmailAddress,
    pub response_type: Option<String>,
}

/// The attendees of a meeting.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttendeeCollection(pub Vec<Attendee>);

impl AttendeeCollection {
    pub fn push(&mut self, mailbox: EmailAddress) {
        self.0.push(Attendee {
            mailbox,
            response_type: None,
        });
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl ComplexProperty for AttendeeCollection {
    fn write_content(&self, writer: &mut XmlWriter) -> Result<(), Error> {
        for attendee in &self.0 {
            writer.write_start(XmlNamespace::Types, "Attendee", &[])?;
            attendee.mailbox.write_mailbox(writer)?;
            writer.write_optional_text_element(
                XmlNamespace::Types,
                "ResponseType",
                attendee.response_type.as_deref(),
            )?;
            writer.write_end(XmlNamespace::Types, "Attendee")?;
        }

        Ok(())
    }

    fn load_from_xml(&mut self, element: &XmlElement) -> Result<(), Error> {
        self.0 = element
            .children_named("Attendee")
            .map(|attendee| {
                let mailbox = attendee.required_child("Mailbox")?;
                Ok(Attendee {
                    mailbox: EmailAddress::from_mailbox(mailbox),
                    response_type: attendee.child_text("ResponseType").map(str::to_string),
                })
            })
            .collect::<Result<_, Error>>()?;

        Ok(())
    }
}

impl ToJson for AttendeeCollection {
    fn to_json(&self) -> Value {
        Value::Array(
            self.0
                .iter()
                .map(|attendee| {
                    let mut object = typed_object("AttendeeType");
                    object.insert("Mailbox".to_string(), attendee.mailbox.to_json());
                    insert_optional(&mut object, "ResponseType", attendee.response_type.as_deref());
                    Value::Object(object)
                })
                .collect(),
        )
    }
}

/// A list of strings, such as the categories of an item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StringList(pub Vec<String>);

impl StringList {
    pub fn push(&mut self, value: impl Into<String>) {
        self.0.push(value.into());
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|candidate| candidate == value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for StringList {
    fn from(value: Vec<String>) -> Self {
        Self(value)
    }
}

impl ComplexProperty for StringList {
    fn write_content(&self, writer: &mut XmlWriter) -> Result<(), Error> {
        for value in &self.0 {
            writer.write_text_element(XmlNamespace::Types, "String", value)?;
        }

        Ok(())
    }

    fn load_from_xml(&mut self, element: &XmlElement) -> Result<(), Error> {
        self.0 = element
            .children_named("String")
            .map(|value| value.text.clone())
            .collect();

        Ok(())
    }
}

impl ToJson for StringList {
    fn to_json(&self) -> Value {
        Value::Array(self.0.iter().cloned().map(Value::String).collect())
    }
}

/// Keyed string entries backing indexed properties, such as the phone numbers
/// of a contact.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StringDictionary {
    entries: Vec<(String, String)>,
}

impl StringDictionary {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, value)| value.as_str())
    }

    /// Sets the entry for `key`, keeping the position of an existing entry.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(candidate, _)| candidate == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let position = self.entries.iter().position(|(candidate, _)| candidate == key)?;
        Some(self.entries.remove(position).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ComplexProperty for StringDictionary {
    fn write_content(&self, writer: &mut XmlWriter) -> Result<(), Error> {
        for (key, value) in &self.entries {
            writer.write_start(XmlNamespace::Types, "Entry", &[("Key", key.as_str())])?;
            writer.write_text(value)?;
            writer.write_end(XmlNamespace::Types, "Entry")?;
        }

        Ok(())
    }

    /// Merges the entries of the element into the dictionary. Entries not
    /// present in the element are kept.
    fn load_from_xml(&mut self, element: &XmlElement) -> Result<(), Error> {
        for entry in element.children_named("Entry") {
            let key = entry.required_attribute("Key")?;
            self.set(key, entry.text.clone());
        }

        Ok(())
    }
}

impl ToJson for StringDictionary {
    fn to_json(&self) -> Value {
        let entries = self
            .entries
            .iter()
            .map(|(key, value)| {
                let mut object = Map::new();
                object.insert("Key".to_string(), key.clone().into());
                object.insert("Value".to_string(), value.clone().into());
                Value::Object(object)
            })
            .collect();

        Value::Array(entries)
    }
}

/// The legacy time zone description of a meeting.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/meetingtimezone>
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MeetingTimeZone {
    pub name: Option<String>,

    /// An `xs:duration`, e.g. `PT8H`.
    pub base_offset: Option<String>,
}

impl ComplexProperty for MeetingTimeZone {
    fn write_element(&self, writer: &mut XmlWriter, name: &str) -> Result<(), Error> {
        let attributes: Vec<(&str, &str)> = self
            .name
            .as_deref()
            .map(|zone| ("TimeZoneName", zone))
            .into_iter()
            .collect();

        writer.write_start(XmlNamespace::Types, name, &attributes)?;
        self.write_content(writer)?;
        writer.write_end(XmlNamespace::Types, name)
    }

    fn write_content(&self, writer: &mut XmlWriter) -> Result<(), Error> {
        writer.write_optional_text_element(
            XmlNamespace::Types,
            "BaseOffset",
            self.base_offset.as_deref(),
        )
    }

    fn load_from_xml(&mut self, element: &XmlElement) -> Result<(), Error> {
        self.name = element.attribute("TimeZoneName").map(str::to_string);
        self.base_offset = element.child_text("BaseOffset").map(str::to_string);

        Ok(())
    }
}

impl ToJson for MeetingTimeZone {
    fn to_json(&self) -> Value {
        let mut object = typed_object("TimeZoneType");
        insert_optional(&mut object, "TimeZoneName", self.name.as_deref());
        insert_optional(&mut object, "BaseOffset", self.base_offset.as_deref());
        Value::Object(object)
    }
}

/// A reference to a server-known time zone.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/starttimezone>
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimeZoneDefinition {
    pub id: String,
    pub name: Option<String>,
}

impl ComplexProperty for TimeZoneDefinition {
    fn write_element(&self, writer: &mut XmlWriter, name: &str) -> Result<(), Error> {
        let mut attributes = vec![("Id", self.id.as_str())];
        if let Some(zone_name) = self.name.as_deref() {
            attributes.push(("Name", zone_name));
        }

        writer.write_empty(XmlNamespace::Types, name, &attributes)
    }

    fn write_content(&self, _writer: &mut XmlWriter) -> Result<(), Error> {
        Ok(())
    }

    fn load_from_xml(&mut self, element: &XmlElement) -> Result<(), Error> {
        self.id = element.required_attribute("Id")?.to_string();
        self.name = element.attribute("Name").map(str::to_string);

        Ok(())
    }
}

impl ToJson for TimeZoneDefinition {
    fn to_json(&self) -> Value {
        let mut object = typed_object("TimeZoneDefinitionType");
        object.insert("Id".to_string(), self.id.clone().into());
        insert_optional(&mut object, "Name", self.name.as_deref());
        Value::Object(object)
    }
}
