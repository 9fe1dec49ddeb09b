/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Server-assigned identifiers of items, folders and conversations.

use serde_json::Value;

use crate::{
    complex::EmailAddress,
    json::{insert_optional, typed_object, ToJson},
    value::ComplexProperty,
    xml::{WriteXml, XmlElement, XmlNamespace, XmlWriter},
    Error,
};

macro_rules! service_id {
    ($(#[$attr:meta])* $name:ident, $element:literal) => {
        $(#[$attr])*
        #[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name {
            pub id: String,
            pub change_key: Option<String>,
        }

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self {
                    id: id.into(),
                    change_key: None,
                }
            }

            pub fn with_change_key(mut self, change_key: impl Into<String>) -> Self {
                self.change_key = Some(change_key.into());
                self
            }

            /// Whether the identifier was assigned by a server.
            pub fn is_valid(&self) -> bool {
                !self.id.is_empty()
            }

            fn attributes(&self) -> Vec<(&str, &str)> {
                let mut attributes = vec![("Id", self.id.as_str())];
                if let Some(change_key) = self.change_key.as_deref() {
                    attributes.push(("ChangeKey", change_key));
                }

                attributes
            }
        }

        impl WriteXml for $name {
            fn write_xml(&self, writer: &mut XmlWriter) -> Result<(), Error> {
                self.write_element(writer, $element)
            }
        }

        impl ComplexProperty for $name {
            fn write_element(&self, writer: &mut XmlWriter, name: &str) -> Result<(), Error> {
                writer.write_empty(XmlNamespace::Types, name, &self.attributes())
            }

            fn write_content(&self, _writer: &mut XmlWriter) -> Result<(), Error> {
                Ok(())
            }

            fn load_from_xml(&mut self, element: &XmlElement) -> Result<(), Error> {
                self.id = element.required_attribute("Id")?.to_string();
                self.change_key = element.attribute("ChangeKey").map(str::to_string);

                Ok(())
            }
        }

        impl ToJson for $name {
            fn to_json(&self) -> Value {
                let mut object = typed_object($element);
                object.insert("Id".to_string(), self.id.clone().into());
                insert_optional(&mut object, "ChangeKey", self.change_key.as_deref());
                Value::Object(object)
            }
        }
    };
}

service_id!(
    /// The unique identifier of an item.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/itemid>
    ItemId,
    "ItemId"
);

service_id!(
    /// The unique identifier of a folder.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/folderid>
    FolderId,
    "FolderId"
);

service_id!(
    /// The identifier of a conversation.
    ConversationId,
    "ConversationId"
);

/// An identifier for referencing a folder by name, e.g. "inbox" or
/// "junkemail", optionally in another user's mailbox.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/distinguishedfolderid>
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistinguishedFolderId {
    pub id: String,
    pub change_key: Option<String>,
    pub mailbox: Option<EmailAddress>,
}

impl DistinguishedFolderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            change_key: None,
            mailbox: None,
        }
    }

    pub fn in_mailbox(mut self, mailbox: EmailAddress) -> Self {
        self.mailbox = Some(mailbox);
        self
    }
}

impl WriteXml for DistinguishedFolderId {
    fn write_xml(&self, writer: &mut XmlWriter) -> Result<(), Error> {
        let mut attributes = vec![("Id", self.id.as_str())];
        if let Some(change_key) = self.change_key.as_deref() {
            attributes.push(("ChangeKey", change_key));
        }

        match &self.mailbox {
            Some(mailbox) => {
                writer.write_start(XmlNamespace::Types, "DistinguishedFolderId", &attributes)?;
                mailbox.write_mailbox(writer)?;
                writer.write_end(XmlNamespace::Types, "DistinguishedFolderId")
            }
            None => writer.write_empty(XmlNamespace::Types, "DistinguishedFolderId", &attributes),
        }
    }
}

impl ToJson for DistinguishedFolderId {
    fn to_json(&self) -> Value {
        let mut object = typed_object("DistinguishedFolderId");
        object.insert("Id".to_string(), self.id.clone().into());
        insert_optional(&mut object, "ChangeKey", self.change_key.as_deref());
        if let Some(mailbox) = &self.mailbox {
            object.insert("Mailbox".to_string(), mailbox.to_json());
        }

        Value::Object(object)
    }
}

/// An identifier for a folder, either by its server id or by name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BaseFolderId {
    Folder(FolderId),
    Distinguished(DistinguishedFolderId),
}

impl From<FolderId> for BaseFolderId {
    fn from(value: FolderId) -> Self {
        BaseFolderId::Folder(value)
    }
}

impl From<DistinguishedFolderId> for BaseFolderId {
    fn from(value: DistinguishedFolderId) -> Self {
        BaseFolderId::Distinguished(value)
    }
}

impl WriteXml for BaseFolderId {
    fn write_xml(&self, writer: &mut XmlWriter) -> Result<(), Error> {
        match self {
            BaseFolderId::Folder(id) => id.write_xml(writer),
            BaseFolderId::Distinguished(id) => id.write_xml(writer),
        }
    }
}

impl ToJson for BaseFolderId {
    fn to_json(&self) -> Value {
        match self {
            BaseFolderId::Folder(id) => id.to_json(),
            BaseFolderId::Distinguished(id) => id.to_json(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_serialized_content, parse_element};

    #[test]
    fn serialize_item_id() {
        let id = ItemId::new("AAMkAD=").with_change_key("CQAAAB");
        assert_serialized_content(
            |writer| id.write_xml(writer),
            r#"<t:ItemId Id="AAMkAD=" ChangeKey="CQAAAB"/>"#,
        );

        assert_eq!(
            id.to_json(),
            serde_json::json!({
                "__type": "ItemId:#Exchange",
                "Id": "AAMkAD=",
                "ChangeKey": "CQAAAB",
            })
        );
    }

    #[test]
    fn parent_folder_id_uses_property_element() {
        let element = parse_element(r#"<ParentFolderId Id="AQMkAD=" ChangeKey="AQAAAB"/>"#);
        let mut id = FolderId::default();
        id.load_from_xml(&element).expect("folder id should load");
        assert_eq!(id, FolderId::new("AQMkAD=").with_change_key("AQAAAB"));

        assert_serialized_content(
            |writer| id.write_element(writer, "ParentFolderId"),
            r#"<t:ParentFolderId Id="AQMkAD=" ChangeKey="AQAAAB"/>"#,
        );
    }

    #[test]
    fn id_without_attribute_is_rejected() {
        let element = parse_element("<ItemId/>");
        let mut id = ItemId::default();
        assert!(matches!(
            id.load_from_xml(&element),
            Err(Error::UnexpectedResponse(_))
        ));
        assert!(!id.is_valid());
    }

    #[test]
    fn serialize_distinguished_folder_ids() {
        let inbox = BaseFolderId::from(DistinguishedFolderId::new("inbox"));
        assert_serialized_content(
            |writer| inbox.write_xml(writer),
            r#"<t:DistinguishedFolderId Id="inbox"/>"#,
        );

        let shared = DistinguishedFolderId::new("calendar")
            .in_mailbox(EmailAddress::new("Alice Test", "alice@test.com"));
        assert_serialized_content(
            |writer| shared.write_xml(writer),
            r#"<t:DistinguishedFolderId Id="calendar"><t:Mailbox><t:Name>Alice Test</t:Name><t:EmailAddress>alice@test.com</t:EmailAddress></t:Mailbox></t:DistinguishedFolderId>"#,
        );
    }
}
