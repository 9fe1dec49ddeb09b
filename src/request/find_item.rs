/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::Deserialize;

use crate::{
    property_set::PropertySet,
    request::{
        parse_items, parse_response_messages, required_payload, MessagePayload,
        MessagesResponse, ResponseMessage, ServiceRequest,
    },
    schema::SchemaRegistry,
    service_object::Item,
    version::ExchangeVersion,
    wrapper::FolderIdWrapperList,
    xml::{XmlElement, XmlNamespace, XmlWriter},
    Error,
};

/// Defines whether the search finds items in folders or the folders' dumpsters.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/finditem#traversal-attribute>
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ItemTraversal {
    #[default]
    Shallow,

    /// Items in a folder's dumpster.
    SoftDeleted,

    /// Associated items, i.e. hidden ones such as rules or views.
    Associated,
}

impl ItemTraversal {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemTraversal::Shallow => "Shallow",
            ItemTraversal::SoftDeleted => "SoftDeleted",
            ItemTraversal::Associated => "Associated",
        }
    }
}

/// A request to find items in one or more folders.
///
/// Only summary properties can be returned by a search; the rest have to be
/// fetched with a [`GetItem`](super::GetItem) request.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/finditem>
#[derive(Debug)]
pub struct FindItem<'a> {
    pub registry: &'a SchemaRegistry,

    pub traversal: ItemTraversal,

    pub property_set: PropertySet,

    /// The largest number of items to return; all of them if `None`.
    pub max_entries_returned: Option<u32>,

    /// The position in the search results of the first item to return.
    pub offset: u32,

    pub parent_folder_ids: FolderIdWrapperList<'a>,
}

impl ServiceRequest for FindItem<'_> {
    type Response = Vec<ResponseMessage<FindItemResults>>;
    type ResponseBody = MessagesResponse<RootFolder>;

    const NAME: &'static str = "FindItem";
    const RESPONSE_NAME: &'static str = "FindItemResponse";

    fn validate(&self, version: ExchangeVersion) -> Result<(), Error> {
        if self.parent_folder_ids.is_empty() {
            return Err(Error::InvalidArgument {
                name: "parent_folder_ids",
                reason: "at least one folder must be searched",
            });
        }

        if self.max_entries_returned == Some(0) {
            return Err(Error::InvalidArgument {
                name: "max_entries_returned",
                reason: "page size must be positive",
            });
        }

        self.property_set.validate(version, true)
    }

    fn attributes(&self) -> Vec<(&'static str, &'static str)> {
        vec![("Traversal", self.traversal.as_str())]
    }

    fn write_elements(&self, writer: &mut XmlWriter, _: ExchangeVersion) -> Result<(), Error> {
        self.property_set.write_xml(writer, "ItemShape")?;

        let max_entries = self.max_entries_returned.map(|max| max.to_string());
        let offset = self.offset.to_string();
        let mut view = Vec::with_capacity(3);
        if let Some(max_entries) = &max_entries {
            view.push(("MaxEntriesReturned", max_entries.as_str()));
        }
        view.push(("Offset", offset.as_str()));
        view.push(("BasePoint", "Beginning"));
        writer.write_empty(XmlNamespace::Messages, "IndexedPageItemView", &view)?;

        self.parent_folder_ids
            .write_xml(writer, XmlNamespace::Messages, "ParentFolderIds")
    }

    fn parse_response(&self, body: Self::ResponseBody) -> Result<Self::Response, Error> {
        parse_response_messages(body, |root_folder| {
            let root_folder = required_payload(root_folder)?;
            let items = parse_items(self.registry, &root_folder.items, |schema| {
                self.property_set.requested_properties(schema, true)
            })?;

            Ok(FindItemResults {
                items,
                total_items_in_view: root_folder.total_items_in_view,
                includes_last_item_in_range: root_folder.includes_last_item_in_range,
                indexed_paging_offset: root_folder.indexed_paging_offset,
            })
        })
    }
}

/// The paging state and the items of one searched folder, as sent by the
/// server.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/rootfolder-finditemresponsemessage>
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RootFolder {
    #[serde(rename = "@TotalItemsInView")]
    total_items_in_view: Option<usize>,

    #[serde(rename = "@IncludesLastItemInRange")]
    includes_last_item_in_range: Option<bool>,

    #[serde(rename = "@IndexedPagingOffset")]
    indexed_paging_offset: Option<usize>,

    items: XmlElement,
}

impl MessagePayload for RootFolder {
    const ELEMENT_NAME: Option<&'static str> = Some("RootFolder");
}

/// The items found in one of the searched folders.
#[derive(Debug)]
pub struct FindItemResults {
    pub items: Vec<Item>,

    /// The number of items matching the search, across all pages.
    pub total_items_in_view: Option<usize>,

    /// Whether no further page has to be requested.
    pub includes_last_item_in_range: Option<bool>,

    /// The offset to request the next page with.
    pub indexed_paging_offset: Option<usize>,
}
