/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use crate::{
    request::{parse_response_messages, MessagesResponse, ResponseMessage, ServiceRequest},
    version::ExchangeVersion,
    wrapper::ItemIdWrapperList,
    xml::{XmlNamespace, XmlWriter},
    Error,
};

/// The method the server uses to delete items.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/deleteitem#deletetype-attribute>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteType {
    /// Permanently delete the items.
    HardDelete,

    /// Move the items to the dumpster.
    SoftDelete,

    MoveToDeletedItems,
}

impl DeleteType {
    pub fn as_str(self) -> &'static str {
        match self {
            DeleteType::HardDelete => "HardDelete",
            DeleteType::SoftDelete => "SoftDelete",
            DeleteType::MoveToDeletedItems => "MoveToDeletedItems",
        }
    }
}

/// Whether to send meeting cancellations when deleting a calendar item.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/deleteitem#sendmeetingcancellations-attribute>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendMeetingCancellations {
    SendToNone,
    SendOnlyToAll,
    SendToAllAndSaveCopy,
}

impl SendMeetingCancellations {
    pub fn as_str(self) -> &'static str {
        match self {
            SendMeetingCancellations::SendToNone => "SendToNone",
            SendMeetingCancellations::SendOnlyToAll => "SendOnlyToAll",
            SendMeetingCancellations::SendToAllAndSaveCopy => "SendToAllAndSaveCopy",
        }
    }
}

/// Which tasks should be impacted when deleting a task item.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/deleteitem#affectedtaskoccurrences-attribute>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AffectedTaskOccurrences {
    AllOccurrences,
    SpecifiedOccurrenceOnly,
}

impl AffectedTaskOccurrences {
    pub fn as_str(self) -> &'static str {
        match self {
            AffectedTaskOccurrences::AllOccurrences => "AllOccurrences",
            AffectedTaskOccurrences::SpecifiedOccurrenceOnly => "SpecifiedOccurrenceOnly",
        }
    }
}

/// A request to delete one or more Exchange items.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/deleteitem>
#[derive(Debug)]
pub struct DeleteItem<'a> {
    pub delete_type: DeleteType,

    /// Required when deleting calendar items, otherwise it has no effect.
    pub send_meeting_cancellations: Option<SendMeetingCancellations>,

    /// Required when deleting task items, otherwise it has no effect.
    pub affected_task_occurrences: Option<AffectedTaskOccurrences>,

    pub item_ids: ItemIdWrapperList<'a>,
}

impl ServiceRequest for DeleteItem<'_> {
    type Response = Vec<ResponseMessage<()>>;
    type ResponseBody = MessagesResponse<()>;

    const NAME: &'static str = "DeleteItem";
    const RESPONSE_NAME: &'static str = "DeleteItemResponse";

    fn validate(&self, _: ExchangeVersion) -> Result<(), Error> {
        if self.item_ids.is_empty() {
            return Err(Error::InvalidArgument {
                name: "item_ids",
                reason: "at least one item must be deleted",
            });
        }

        Ok(())
    }

    fn attributes(&self) -> Vec<(&'static str, &'static str)> {
        let mut attributes = vec![("DeleteType", self.delete_type.as_str())];
        if let Some(cancellations) = self.send_meeting_cancellations {
            attributes.push(("SendMeetingCancellations", cancellations.as_str()));
        }
        if let Some(occurrences) = self.affected_task_occurrences {
            attributes.push(("AffectedTaskOccurrences", occurrences.as_str()));
        }

        attributes
    }

    fn write_elements(&self, writer: &mut XmlWriter, _: ExchangeVersion) -> Result<(), Error> {
        self.item_ids
            .write_xml(writer, XmlNamespace::Messages, "ItemIds")
    }

    fn parse_response(&self, body: Self::ResponseBody) -> Result<Self::Response, Error> {
        parse_response_messages(body, |_| Ok(()))
    }
}
