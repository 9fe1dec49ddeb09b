/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use crate::{
    property_set::PropertySet,
    request::{
        parse_items, parse_response_messages, required_payload, ItemsElement, MessagesResponse,
        ResponseMessage, ServiceRequest,
    },
    schema::SchemaRegistry,
    service_object::Item,
    version::ExchangeVersion,
    wrapper::ItemIdWrapperList,
    xml::{XmlNamespace, XmlWriter},
    Error,
};

/// A request for the properties of one or more Exchange items, e.g. messages,
/// calendar events, or contacts.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/getitem>
#[derive(Debug)]
pub struct GetItem<'a> {
    /// The schemas returned items are loaded with.
    pub registry: &'a SchemaRegistry,

    /// The properties to include in the response for each item.
    pub property_set: PropertySet,

    /// The items which should be fetched.
    pub item_ids: ItemIdWrapperList<'a>,
}

impl ServiceRequest for GetItem<'_> {
    type Response = Vec<ResponseMessage<Vec<Item>>>;
    type ResponseBody = MessagesResponse<ItemsElement>;

    const NAME: &'static str = "GetItem";
    const RESPONSE_NAME: &'static str = "GetItemResponse";

    fn validate(&self, version: ExchangeVersion) -> Result<(), Error> {
        if self.item_ids.is_empty() {
            return Err(Error::InvalidArgument {
                name: "item_ids",
                reason: "at least one item must be requested",
            });
        }

        self.property_set.validate(version, false)
    }

    fn write_elements(&self, writer: &mut XmlWriter, _: ExchangeVersion) -> Result<(), Error> {
        self.property_set.write_xml(writer, "ItemShape")?;
        self.item_ids
            .write_xml(writer, XmlNamespace::Messages, "ItemIds")
    }

    fn parse_response(&self, body: Self::ResponseBody) -> Result<Self::Response, Error> {
        parse_response_messages(body, |items| {
            let items = required_payload(items)?;
            parse_items(self.registry, &items.0, |schema| {
                self.property_set.requested_properties(schema, false)
            })
        })
    }
}
