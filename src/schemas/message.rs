/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Email messages, and the meeting messages built on them.
//!
//! See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/message-ex15websvcsotherref>

use crate::{
    complex::{EmailAddress, EmailAddressCollection},
    flags,
    id::ItemId,
    property::PropertyDefinition,
    schema::{EntityKind, EntitySchema, PropertyGroup, Registration},
    value::instantiate,
    version::ExchangeVersion::{Exchange2007_SP1, Exchange2013},
};

use super::{appointment, item};

pub static SENDER: PropertyDefinition = PropertyDefinition::complex(
    "Sender",
    "message:Sender",
    instantiate::<EmailAddress>,
    flags!(CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
);

pub static TO_RECIPIENTS: PropertyDefinition = PropertyDefinition::complex(
    "ToRecipients",
    "message:ToRecipients",
    instantiate::<EmailAddressCollection>,
    flags!(AUTO_INSTANTIATE_ON_READ, CAN_SET, CAN_UPDATE, CAN_DELETE),
    Exchange2007_SP1,
);

pub static CC_RECIPIENTS: PropertyDefinition = PropertyDefinition::complex(
    "CcRecipients",
    "message:CcRecipients",
    instantiate::<EmailAddressCollection>,
    flags!(AUTO_INSTANTIATE_ON_READ, CAN_SET, CAN_UPDATE, CAN_DELETE),
    Exchange2007_SP1,
);

pub static BCC_RECIPIENTS: PropertyDefinition = PropertyDefinition::complex(
    "BccRecipients",
    "message:BccRecipients",
    instantiate::<EmailAddressCollection>,
    flags!(AUTO_INSTANTIATE_ON_READ, CAN_SET, CAN_UPDATE, CAN_DELETE),
    Exchange2007_SP1,
);

pub static IS_READ_RECEIPT_REQUESTED: PropertyDefinition = PropertyDefinition::boolean(
    "IsReadReceiptRequested",
    "message:IsReadReceiptRequested",
    flags!(CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
);

pub static IS_DELIVERY_RECEIPT_REQUESTED: PropertyDefinition = PropertyDefinition::boolean(
    "IsDeliveryReceiptRequested",
    "message:IsDeliveryReceiptRequested",
    flags!(CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
);

pub static CONVERSATION_INDEX: PropertyDefinition = PropertyDefinition::string(
    "ConversationIndex",
    "message:ConversationIndex",
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

pub static CONVERSATION_TOPIC: PropertyDefinition = PropertyDefinition::string(
    "ConversationTopic",
    "message:ConversationTopic",
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

pub static FROM: PropertyDefinition = PropertyDefinition::complex(
    "From",
    "message:From",
    instantiate::<EmailAddress>,
    flags!(CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
);

pub static INTERNET_MESSAGE_ID: PropertyDefinition = PropertyDefinition::string(
    "InternetMessageId",
    "message:InternetMessageId",
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

pub static IS_READ: PropertyDefinition = PropertyDefinition::boolean(
    "IsRead",
    "message:IsRead",
    flags!(CAN_SET, CAN_UPDATE, CAN_FIND),
    Exchange2007_SP1,
);

pub static IS_RESPONSE_REQUESTED: PropertyDefinition = PropertyDefinition::boolean(
    "IsResponseRequested",
    "message:IsResponseRequested",
    flags!(CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
);

pub static REFERENCES: PropertyDefinition = PropertyDefinition::string(
    "References",
    "message:References",
    flags!(CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
);

pub static REPLY_TO: PropertyDefinition = PropertyDefinition::complex(
    "ReplyTo",
    "message:ReplyTo",
    instantiate::<EmailAddressCollection>,
    flags!(AUTO_INSTANTIATE_ON_READ, CAN_SET, CAN_UPDATE, CAN_DELETE),
    Exchange2007_SP1,
);

pub static RECEIVED_BY: PropertyDefinition = PropertyDefinition::complex(
    "ReceivedBy",
    "message:ReceivedBy",
    instantiate::<EmailAddress>,
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

pub static RECEIVED_REPRESENTING: PropertyDefinition = PropertyDefinition::complex(
    "ReceivedRepresenting",
    "message:ReceivedRepresenting",
    instantiate::<EmailAddress>,
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

pub static EMAIL_MESSAGE_PROPERTIES: PropertyGroup = PropertyGroup {
    name: "EmailMessage",
    registrations: &[
        Registration::Property(&SENDER),
        Registration::Property(&TO_RECIPIENTS),
        Registration::Property(&CC_RECIPIENTS),
        Registration::Property(&BCC_RECIPIENTS),
        Registration::Property(&IS_READ_RECEIPT_REQUESTED),
        Registration::Property(&IS_DELIVERY_RECEIPT_REQUESTED),
        Registration::Property(&CONVERSATION_INDEX),
        Registration::Property(&CONVERSATION_TOPIC),
        Registration::Property(&FROM),
        Registration::Property(&INTERNET_MESSAGE_ID),
        Registration::Property(&IS_READ),
        Registration::Property(&IS_RESPONSE_REQUESTED),
        Registration::Property(&REFERENCES),
        Registration::Property(&REPLY_TO),
        Registration::Property(&RECEIVED_BY),
        Registration::Property(&RECEIVED_REPRESENTING),
    ],
    declared: &[],
};

pub static EMAIL_MESSAGE_SCHEMA: EntitySchema = EntitySchema {
    name: "EmailMessageSchema",
    xml_element_name: "Message",
    kind: EntityKind::Item,
    id_property: &item::ID,
    groups: &[&item::ITEM_PROPERTIES, &EMAIL_MESSAGE_PROPERTIES],
};

pub static ASSOCIATED_APPOINTMENT_ID: PropertyDefinition = PropertyDefinition::complex(
    "AssociatedCalendarItemId",
    "meeting:AssociatedCalendarItemId",
    instantiate::<ItemId>,
    flags!(CAN_FIND),
    Exchange2007_SP1,
)
.named("AssociatedAppointmentId");

pub static IS_DELEGATED: PropertyDefinition = PropertyDefinition::boolean(
    "IsDelegated",
    "meeting:IsDelegated",
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

pub static IS_OUT_OF_DATE: PropertyDefinition = PropertyDefinition::boolean(
    "IsOutOfDate",
    "meeting:IsOutOfDate",
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

pub static HAS_BEEN_PROCESSED: PropertyDefinition = PropertyDefinition::boolean(
    "HasBeenProcessed",
    "meeting:HasBeenProcessed",
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

pub static RESPONSE_TYPE: PropertyDefinition = PropertyDefinition::generic_enum(
    "ResponseType",
    "meeting:ResponseType",
    appointment::RESPONSE_TYPES,
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

pub static IS_ORGANIZER: PropertyDefinition = PropertyDefinition::boolean(
    "IsOrganizer",
    "cal:IsOrganizer",
    flags!(CAN_FIND),
    Exchange2013,
);

pub static MEETING_MESSAGE_PROPERTIES: PropertyGroup = PropertyGroup {
    name: "MeetingMessage",
    registrations: &[
        Registration::Property(&ASSOCIATED_APPOINTMENT_ID),
        Registration::Property(&IS_DELEGATED),
        Registration::Property(&IS_OUT_OF_DATE),
        Registration::Property(&HAS_BEEN_PROCESSED),
        Registration::Property(&RESPONSE_TYPE),
        Registration::Property(&appointment::ICAL_UID),
        Registration::Property(&appointment::ICAL_RECURRENCE_ID),
        Registration::Property(&appointment::ICAL_DATE_TIME_STAMP),
        Registration::Property(&IS_ORGANIZER),
    ],
    declared: &[],
};

pub static MEETING_MESSAGE_SCHEMA: EntitySchema = EntitySchema {
    name: "MeetingMessageSchema",
    xml_element_name: "MeetingMessage",
    kind: EntityKind::Item,
    id_property: &item::ID,
    groups: &[
        &item::ITEM_PROPERTIES,
        &EMAIL_MESSAGE_PROPERTIES,
        &MEETING_MESSAGE_PROPERTIES,
    ],
};

pub static MEETING_REQUEST_TYPE: PropertyDefinition = PropertyDefinition::generic_enum(
    "MeetingRequestType",
    "meetingRequest:MeetingRequestType",
    &[
        "None",
        "FullUpdate",
        "InformationalUpdate",
        "NewMeetingRequest",
        "Outdated",
        "SilentUpdate",
        "PrincipalWantsCopy",
    ],
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

pub static INTENDED_FREE_BUSY_STATUS: PropertyDefinition = PropertyDefinition::generic_enum(
    "IntendedFreeBusyStatus",
    "meetingRequest:IntendedFreeBusyStatus",
    appointment::FREE_BUSY_STATUSES,
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

/// A meeting request carries the calendar item it proposes. The definitions
/// are shared with calendar items rather than redeclared.
pub static MEETING_REQUEST_PROPERTIES: PropertyGroup = PropertyGroup {
    name: "MeetingRequest",
    registrations: &[
        Registration::Property(&MEETING_REQUEST_TYPE),
        Registration::Property(&INTENDED_FREE_BUSY_STATUS),
        Registration::Property(&appointment::START),
        Registration::Property(&appointment::END),
        Registration::Property(&appointment::ORIGINAL_START),
        Registration::Property(&appointment::IS_ALL_DAY_EVENT),
        Registration::Property(&appointment::LEGACY_FREE_BUSY_STATUS),
        Registration::Property(&appointment::LOCATION),
        Registration::Property(&appointment::WHEN),
        Registration::Property(&appointment::IS_MEETING),
        Registration::Property(&appointment::IS_CANCELLED),
        Registration::Property(&appointment::IS_RECURRING),
        Registration::Property(&appointment::MEETING_REQUEST_WAS_SENT),
        Registration::Property(&appointment::APPOINTMENT_TYPE),
        Registration::Property(&appointment::MY_RESPONSE_TYPE),
        Registration::Property(&appointment::ORGANIZER),
        Registration::Property(&appointment::REQUIRED_ATTENDEES),
        Registration::Property(&appointment::OPTIONAL_ATTENDEES),
        Registration::Property(&appointment::RESOURCES),
        Registration::Property(&appointment::CONFLICTING_MEETING_COUNT),
        Registration::Property(&appointment::ADJACENT_MEETING_COUNT),
        Registration::Property(&appointment::DURATION),
        Registration::Property(&appointment::TIME_ZONE),
        Registration::Property(&appointment::APPOINTMENT_REPLY_TIME),
        Registration::Property(&appointment::APPOINTMENT_SEQUENCE_NUMBER),
        Registration::Property(&appointment::APPOINTMENT_STATE),
        Registration::Internal(&appointment::MEETING_TIME_ZONE),
        Registration::Property(&appointment::START_TIME_ZONE),
        Registration::Property(&appointment::END_TIME_ZONE),
        Registration::Property(&appointment::CONFERENCE_TYPE),
        Registration::Property(&appointment::ALLOW_NEW_TIME_PROPOSAL),
        Registration::Property(&appointment::IS_ONLINE_MEETING),
        Registration::Property(&appointment::MEETING_WORKSPACE_URL),
        Registration::Property(&appointment::NET_SHOW_URL),
    ],
    declared: &[],
};

pub static MEETING_REQUEST_SCHEMA: EntitySchema = EntitySchema {
    name: "MeetingRequestSchema",
    xml_element_name: "MeetingRequest",
    kind: EntityKind::Item,
    id_property: &item::ID,
    groups: &[
        &item::ITEM_PROPERTIES,
        &EMAIL_MESSAGE_PROPERTIES,
        &MEETING_MESSAGE_PROPERTIES,
        &MEETING_REQUEST_PROPERTIES,
    ],
};
