/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Identifiers given to requests either directly or through a loaded entity.
//!
//! An operation acting on items or folders can be handed a raw identifier or
//! an entity previously returned by the server. Both forms serialize to the
//! same identifier element; the entity form additionally lets the caller get
//! the entity back, e.g. to apply the response to it.

use serde_json::Value;

use crate::{
    id::{BaseFolderId, FolderId, ItemId},
    json::ToJson,
    service_object::{Folder, Item},
    xml::{WriteXml, XmlNamespace, XmlWriter},
    Error,
};

/// An item identifier, or an existing item and its identifier.
#[derive(Clone, Debug)]
pub enum ItemIdWrapper<'a> {
    Id(ItemId),

    /// The identifier is captured when the wrapper is created.
    Item { item: &'a Item, id: ItemId },
}

impl<'a> ItemIdWrapper<'a> {
    /// Wraps an item, which must have been saved to the server.
    pub fn from_item(item: &'a Item) -> Result<Self, Error> {
        let id = item
            .id()
            .filter(|id| id.is_valid())
            .cloned()
            .ok_or(Error::ServiceObjectIsNew { entity: "item" })?;

        Ok(ItemIdWrapper::Item { item, id })
    }

    pub fn id(&self) -> &ItemId {
        match self {
            ItemIdWrapper::Id(id) | ItemIdWrapper::Item { id, .. } => id,
        }
    }

    /// The wrapped item, if the wrapper was created from one.
    pub fn item(&self) -> Option<&'a Item> {
        match self {
            ItemIdWrapper::Id(_) => None,
            ItemIdWrapper::Item { item, .. } => Some(*item),
        }
    }
}

impl From<ItemId> for ItemIdWrapper<'_> {
    fn from(value: ItemId) -> Self {
        ItemIdWrapper::Id(value)
    }
}

impl WriteXml for ItemIdWrapper<'_> {
    fn write_xml(&self, writer: &mut XmlWriter) -> Result<(), Error> {
        self.id().write_xml(writer)
    }
}

impl ToJson for ItemIdWrapper<'_> {
    fn to_json(&self) -> Value {
        self.id().to_json()
    }
}

/// A folder identifier, or an existing folder and its identifier.
#[derive(Clone, Debug)]
pub enum FolderIdWrapper<'a> {
    Id(BaseFolderId),

    /// The identifier is captured when the wrapper is created.
    Folder { folder: &'a Folder, id: FolderId },
}

impl<'a> FolderIdWrapper<'a> {
    /// Wraps a folder, which must have been saved to the server.
    pub fn from_folder(folder: &'a Folder) -> Result<Self, Error> {
        let id = folder
            .id()
            .filter(|id| id.is_valid())
            .cloned()
            .ok_or(Error::ServiceObjectIsNew { entity: "folder" })?;

        Ok(FolderIdWrapper::Folder { folder, id })
    }

    /// The wrapped folder, if the wrapper was created from one.
    pub fn folder(&self) -> Option<&'a Folder> {
        match self {
            FolderIdWrapper::Id(_) => None,
            FolderIdWrapper::Folder { folder, .. } => Some(*folder),
        }
    }
}

impl From<BaseFolderId> for FolderIdWrapper<'_> {
    fn from(value: BaseFolderId) -> Self {
        FolderIdWrapper::Id(value)
    }
}

impl From<FolderId> for FolderIdWrapper<'_> {
    fn from(value: FolderId) -> Self {
        FolderIdWrapper::Id(BaseFolderId::Folder(value))
    }
}

impl WriteXml for FolderIdWrapper<'_> {
    fn write_xml(&self, writer: &mut XmlWriter) -> Result<(), Error> {
        match self {
            FolderIdWrapper::Id(id) => id.write_xml(writer),
            FolderIdWrapper::Folder { id, .. } => id.write_xml(writer),
        }
    }
}

impl ToJson for FolderIdWrapper<'_> {
    fn to_json(&self) -> Value {
        match self {
            FolderIdWrapper::Id(id) => id.to_json(),
            FolderIdWrapper::Folder { id, .. } => id.to_json(),
        }
    }
}

macro_rules! wrapper_list {
    ($(#[$attr:meta])* $name:ident, $wrapper:ident) => {
        $(#[$attr])*
        #[derive(Clone, Debug, Default)]
        pub struct $name<'a> {
            wrappers: Vec<$wrapper<'a>>,
        }

        impl<'a> $name<'a> {
            pub fn new() -> Self {
                Self::default()
            }

            pub fn push(&mut self, wrapper: $wrapper<'a>) {
                self.wrappers.push(wrapper);
            }

            pub fn len(&self) -> usize {
                self.wrappers.len()
            }

            pub fn is_empty(&self) -> bool {
                self.wrappers.is_empty()
            }

            pub fn get(&self, index: usize) -> Option<&$wrapper<'a>> {
                self.wrappers.get(index)
            }

            pub fn iter(&self) -> impl Iterator<Item = &$wrapper<'a>> {
                self.wrappers.iter()
            }

            /// Writes the identifiers inside an element with the given name.
            /// An empty list writes nothing at all.
            pub fn write_xml(
                &self,
                writer: &mut XmlWriter,
                ns: XmlNamespace,
                element_name: &str,
            ) -> Result<(), Error> {
                if self.wrappers.is_empty() {
                    return Ok(());
                }

                writer.write_start(ns, element_name, &[])?;
                for wrapper in &self.wrappers {
                    wrapper.write_xml(writer)?;
                }
                writer.write_end(ns, element_name)
            }
        }

        impl ToJson for $name<'_> {
            fn to_json(&self) -> Value {
                self.wrappers.as_slice().to_json()
            }
        }
    };
}

wrapper_list!(
    /// The items an operation acts on.
    ItemIdWrapperList,
    ItemIdWrapper
);

wrapper_list!(
    /// The folders an operation acts on.
    FolderIdWrapperList,
    FolderIdWrapper
);

impl<'a> ItemIdWrapperList<'a> {
    pub fn add_id(&mut self, id: ItemId) {
        self.push(ItemIdWrapper::Id(id));
    }

    pub fn add_ids(&mut self, ids: impl IntoIterator<Item = ItemId>) {
        for id in ids {
            self.add_id(id);
        }
    }

    /// Adds an item, which must have been saved to the server.
    pub fn add_item(&mut self, item: &'a Item) -> Result<(), Error> {
        self.push(ItemIdWrapper::from_item(item)?);
        Ok(())
    }

    /// Adds items, failing on the first which hasn't been saved. Items
    /// before it are kept.
    pub fn add_items(&mut self, items: impl IntoIterator<Item = &'a Item>) -> Result<(), Error> {
        for item in items {
            self.add_item(item)?;
        }

        Ok(())
    }
}

impl<'a> FolderIdWrapperList<'a> {
    pub fn add_id(&mut self, id: impl Into<BaseFolderId>) {
        self.push(FolderIdWrapper::Id(id.into()));
    }

    /// Adds a folder, which must have been saved to the server.
    pub fn add_folder(&mut self, folder: &'a Folder) -> Result<(), Error> {
        self.push(FolderIdWrapper::from_folder(folder)?);
        Ok(())
    }

    pub fn add_folders(
        &mut self,
        folders: impl IntoIterator<Item = &'a Folder>,
    ) -> Result<(), Error> {
        for folder in folders {
            self.add_folder(folder)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        id::DistinguishedFolderId,
        schema::SchemaRegistry,
        test_utils::{assert_serialized_content, parse_element},
    };

    fn registry() -> SchemaRegistry {
        SchemaRegistry::standard().expect("standard schemas should be consistent")
    }

    fn saved_message(registry: &SchemaRegistry) -> Item {
        let schema = registry
            .schema("EmailMessageSchema")
            .expect("message schema should be registered");
        let element = parse_element(
            r#"<Message><ItemId Id="AAMkAD=" ChangeKey="CQAAAB"/><Subject>Hi</Subject></Message>"#,
        );

        Item::from_xml(schema, &element, &[]).expect("message should load")
    }

    #[test]
    fn id_and_item_wrappers_write_the_same_id() {
        let registry = registry();
        let message = saved_message(&registry);

        let from_id = ItemIdWrapper::from(ItemId::new("AAMkAD=").with_change_key("CQAAAB"));
        let from_item = ItemIdWrapper::from_item(&message).expect("saved item should be wrapped");

        assert!(from_id.item().is_none());
        assert!(from_item
            .item()
            .is_some_and(|item| std::ptr::eq(item, &message)));

        let expected = r#"<t:ItemId Id="AAMkAD=" ChangeKey="CQAAAB"/>"#;
        assert_serialized_content(|writer| from_id.write_xml(writer), expected);
        assert_serialized_content(|writer| from_item.write_xml(writer), expected);
        assert_eq!(from_id.to_json(), from_item.to_json());
    }

    #[test]
    fn unsaved_entities_cannot_be_wrapped() {
        let registry = registry();

        let draft = Item::new(
            registry
                .schema("EmailMessageSchema")
                .expect("message schema should be registered"),
        )
        .expect("message schema is for items");
        let err = ItemIdWrapper::from_item(&draft).expect_err("draft has no id");
        assert!(matches!(err, Error::ServiceObjectIsNew { entity: "item" }));
        assert!(err.is_internal());

        let folder = Folder::new(
            registry
                .schema("FolderSchema")
                .expect("folder schema should be registered"),
        )
        .expect("folder schema is for folders");
        let mut list = FolderIdWrapperList::new();
        assert!(list.add_folder(&folder).is_err());
        assert!(list.is_empty());
    }

    #[test]
    fn lists_mix_ids_and_items() {
        let registry = registry();
        let message = saved_message(&registry);

        let mut list = ItemIdWrapperList::new();
        list.add_id(ItemId::new("AAMkAC="));
        list.add_items([&message]).expect("saved item should be added");
        assert_eq!(list.len(), 2);
        assert!(list.get(1).and_then(ItemIdWrapper::item).is_some());

        assert_serialized_content(
            |writer| list.write_xml(writer, XmlNamespace::Messages, "ItemIds"),
            r#"<m:ItemIds><t:ItemId Id="AAMkAC="/><t:ItemId Id="AAMkAD=" ChangeKey="CQAAAB"/></m:ItemIds>"#,
        );

        assert_eq!(
            list.to_json(),
            serde_json::json!([
                { "__type": "ItemId:#Exchange", "Id": "AAMkAC=" },
                { "__type": "ItemId:#Exchange", "Id": "AAMkAD=", "ChangeKey": "CQAAAB" },
            ])
        );
    }

    #[test]
    fn empty_lists_write_nothing() {
        let items = ItemIdWrapperList::new();
        assert_serialized_content(
            |writer| items.write_xml(writer, XmlNamespace::Messages, "ItemIds"),
            "",
        );

        let folders = FolderIdWrapperList::new();
        assert_serialized_content(
            |writer| folders.write_xml(writer, XmlNamespace::Messages, "FolderIds"),
            "",
        );
        assert_eq!(folders.to_json(), serde_json::json!([]));
    }

    #[test]
    fn folder_lists_accept_distinguished_ids() {
        let registry = registry();
        let schema = registry
            .schema("CalendarFolderSchema")
            .expect("calendar folder schema should be registered");
        let element = parse_element(r#"<CalendarFolder><FolderId Id="AQMkAD="/></CalendarFolder>"#);
        let calendar = Folder::from_xml(schema, &element, &[]).expect("folder should load");

        let mut list = FolderIdWrapperList::new();
        list.add_id(DistinguishedFolderId::new("inbox"));
        list.add_folders([&calendar]).expect("saved folder should be added");
        assert!(list.get(1).and_then(FolderIdWrapper::folder).is_some());

        assert_serialized_content(
            |writer| list.write_xml(writer, XmlNamespace::Messages, "FolderIds"),
            r#"<m:FolderIds><t:DistinguishedFolderId Id="inbox"/><t:FolderId Id="AQMkAD="/></m:FolderIds>"#,
        );
    }
}
