/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use crate::{
    id::ItemId,
    request::{
        parse_response_messages, ItemsElement, MessagesResponse, ResponseMessage, ServiceRequest,
    },
    service_object::Item,
    value::ComplexProperty,
    version::ExchangeVersion,
    wrapper::FolderIdWrapper,
    xml::{WriteXml, XmlNamespace, XmlWriter},
    Error,
};

/// The action an Exchange server will take upon creating a `Message` item.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/createitem#messagedisposition-attribute>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageDisposition {
    SaveOnly,
    SendOnly,
    SendAndSaveCopy,
}

impl MessageDisposition {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageDisposition::SaveOnly => "SaveOnly",
            MessageDisposition::SendOnly => "SendOnly",
            MessageDisposition::SendAndSaveCopy => "SendAndSaveCopy",
        }
    }
}

/// Whether meeting requests are sent to attendees when creating a calendar
/// item.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/createitem#sendmeetinginvitations-attribute>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendMeetingInvitations {
    SendToNone,
    SendOnlyToAll,
    SendToAllAndSaveCopy,
}

impl SendMeetingInvitations {
    pub fn as_str(self) -> &'static str {
        match self {
            SendMeetingInvitations::SendToNone => "SendToNone",
            SendMeetingInvitations::SendOnlyToAll => "SendOnlyToAll",
            SendMeetingInvitations::SendToAllAndSaveCopy => "SendToAllAndSaveCopy",
        }
    }
}

/// A request to create (and optionally send) one or more Exchange items.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/createitem>
#[derive(Debug)]
pub struct CreateItem<'a> {
    /// The action the server will take upon creating messages.
    ///
    /// Required when creating messages, otherwise it has no effect.
    pub message_disposition: Option<MessageDisposition>,

    /// Required when creating calendar items, otherwise it has no effect.
    pub send_meeting_invitations: Option<SendMeetingInvitations>,

    /// The folder to save created items in; the default folder for their type
    /// if `None`.
    pub saved_item_folder_id: Option<FolderIdWrapper<'a>>,

    /// The items to create, none of which may exist on the server yet.
    pub items: Vec<&'a Item>,
}

impl ServiceRequest for CreateItem<'_> {
    type Response = Vec<ResponseMessage<Vec<ItemId>>>;
    type ResponseBody = MessagesResponse<ItemsElement>;

    const NAME: &'static str = "CreateItem";
    const RESPONSE_NAME: &'static str = "CreateItemResponse";

    fn validate(&self, _: ExchangeVersion) -> Result<(), Error> {
        if self.items.is_empty() {
            return Err(Error::InvalidArgument {
                name: "items",
                reason: "at least one item must be created",
            });
        }

        if self.items.iter().any(|item| !item.is_new()) {
            return Err(Error::InvalidArgument {
                name: "items",
                reason: "items must not exist on the server yet",
            });
        }

        Ok(())
    }

    fn attributes(&self) -> Vec<(&'static str, &'static str)> {
        let mut attributes = Vec::new();
        if let Some(disposition) = self.message_disposition {
            attributes.push(("MessageDisposition", disposition.as_str()));
        }
        if let Some(invitations) = self.send_meeting_invitations {
            attributes.push(("SendMeetingInvitations", invitations.as_str()));
        }

        attributes
    }

    fn write_elements(&self, writer: &mut XmlWriter, version: ExchangeVersion) -> Result<(), Error> {
        if let Some(folder_id) = &self.saved_item_folder_id {
            writer.write_start(XmlNamespace::Messages, "SavedItemFolderId", &[])?;
            folder_id.write_xml(writer)?;
            writer.write_end(XmlNamespace::Messages, "SavedItemFolderId")?;
        }

        writer.write_start(XmlNamespace::Messages, "Items", &[])?;
        for item in &self.items {
            item.write_to_xml(writer, version)?;
        }
        writer.write_end(XmlNamespace::Messages, "Items")
    }

    /// Reads the identifiers of the created items. Items which were sent
    /// without saving a copy have none.
    fn parse_response(&self, body: Self::ResponseBody) -> Result<Self::Response, Error> {
        parse_response_messages(body, |items| {
            let Some(items) = items else {
                return Ok(Vec::new());
            };

            items
                .0
                .children
                .iter()
                .filter_map(|item| item.child("ItemId"))
                .map(|element| {
                    let mut id = ItemId::default();
                    id.load_from_xml(element)?;
                    Ok(id)
                })
                .collect()
        })
    }
}
