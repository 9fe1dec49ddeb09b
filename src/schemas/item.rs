/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Properties shared by every item.
//!
//! See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/item>

use crate::{
    complex::{ItemBody, MimeContent, StringList},
    flags,
    id::{ConversationId, FolderId, ItemId},
    property::PropertyDefinition,
    schema::{EntityKind, EntitySchema, PropertyGroup, Registration},
    value::instantiate,
    version::ExchangeVersion::{Exchange2007_SP1, Exchange2010, Exchange2010_SP2, Exchange2013},
};

pub static MIME_CONTENT: PropertyDefinition = PropertyDefinition::complex(
    "MimeContent",
    "item:MimeContent",
    instantiate::<MimeContent>,
    flags!(CAN_SET, CAN_UPDATE, MUST_BE_EXPLICITLY_LOADED),
    Exchange2007_SP1,
);

pub static ID: PropertyDefinition = PropertyDefinition::complex(
    "ItemId",
    "item:ItemId",
    instantiate::<ItemId>,
    flags!(CAN_FIND),
    Exchange2007_SP1,
)
.named("Id");

pub static PARENT_FOLDER_ID: PropertyDefinition = PropertyDefinition::complex(
    "ParentFolderId",
    "item:ParentFolderId",
    instantiate::<FolderId>,
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

pub static ITEM_CLASS: PropertyDefinition = PropertyDefinition::string(
    "ItemClass",
    "item:ItemClass",
    flags!(CAN_SET, CAN_UPDATE, CAN_FIND),
    Exchange2007_SP1,
);

pub static SUBJECT: PropertyDefinition = PropertyDefinition::string(
    "Subject",
    "item:Subject",
    flags!(CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
);

pub static SENSITIVITY: PropertyDefinition = PropertyDefinition::generic_enum(
    "Sensitivity",
    "item:Sensitivity",
    &["Normal", "Personal", "Private", "Confidential"],
    flags!(CAN_SET, CAN_UPDATE, CAN_FIND),
    Exchange2007_SP1,
);

pub static BODY: PropertyDefinition = PropertyDefinition::complex(
    "Body",
    "item:Body",
    instantiate::<ItemBody>,
    flags!(CAN_SET, CAN_UPDATE, CAN_DELETE),
    Exchange2007_SP1,
);

pub static DATE_TIME_RECEIVED: PropertyDefinition = PropertyDefinition::date_time(
    "DateTimeReceived",
    "item:DateTimeReceived",
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

pub static SIZE: PropertyDefinition =
    PropertyDefinition::integer("Size", "item:Size", flags!(CAN_FIND), Exchange2007_SP1);

pub static CATEGORIES: PropertyDefinition = PropertyDefinition::complex(
    "Categories",
    "item:Categories",
    instantiate::<StringList>,
    flags!(AUTO_INSTANTIATE_ON_READ, CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
);

pub static IMPORTANCE: PropertyDefinition = PropertyDefinition::generic_enum(
    "Importance",
    "item:Importance",
    &["Low", "Normal", "High"],
    flags!(CAN_SET, CAN_UPDATE, CAN_FIND),
    Exchange2007_SP1,
);

pub static IN_REPLY_TO: PropertyDefinition = PropertyDefinition::string(
    "InReplyTo",
    "item:InReplyTo",
    flags!(CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
);

pub static IS_SUBMITTED: PropertyDefinition = PropertyDefinition::boolean(
    "IsSubmitted",
    "item:IsSubmitted",
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

pub static IS_DRAFT: PropertyDefinition =
    PropertyDefinition::boolean("IsDraft", "item:IsDraft", flags!(CAN_FIND), Exchange2007_SP1);

pub static IS_FROM_ME: PropertyDefinition = PropertyDefinition::boolean(
    "IsFromMe",
    "item:IsFromMe",
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

pub static IS_RESEND: PropertyDefinition = PropertyDefinition::boolean(
    "IsResend",
    "item:IsResend",
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

pub static IS_UNMODIFIED: PropertyDefinition = PropertyDefinition::boolean(
    "IsUnmodified",
    "item:IsUnmodified",
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

pub static DATE_TIME_SENT: PropertyDefinition = PropertyDefinition::date_time(
    "DateTimeSent",
    "item:DateTimeSent",
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

pub static DATE_TIME_CREATED: PropertyDefinition = PropertyDefinition::date_time(
    "DateTimeCreated",
    "item:DateTimeCreated",
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

pub static REMINDER_DUE_BY: PropertyDefinition = PropertyDefinition::date_time(
    "ReminderDueBy",
    "item:ReminderDueBy",
    flags!(CAN_SET, CAN_UPDATE, CAN_FIND),
    Exchange2007_SP1,
);

pub static IS_REMINDER_SET: PropertyDefinition = PropertyDefinition::boolean(
    "ReminderIsSet",
    "item:ReminderIsSet",
    flags!(CAN_SET, CAN_UPDATE, CAN_FIND),
    Exchange2007_SP1,
)
.named("IsReminderSet");

pub static REMINDER_MINUTES_BEFORE_START: PropertyDefinition = PropertyDefinition::integer(
    "ReminderMinutesBeforeStart",
    "item:ReminderMinutesBeforeStart",
    flags!(CAN_SET, CAN_UPDATE, CAN_FIND),
    Exchange2007_SP1,
);

pub static DISPLAY_CC: PropertyDefinition = PropertyDefinition::string(
    "DisplayCc",
    "item:DisplayCc",
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

pub static DISPLAY_TO: PropertyDefinition = PropertyDefinition::string(
    "DisplayTo",
    "item:DisplayTo",
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

pub static HAS_ATTACHMENTS: PropertyDefinition = PropertyDefinition::boolean(
    "HasAttachments",
    "item:HasAttachments",
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

/// Extended MAPI properties are addressed by property tag or set rather than
/// field URI, so this definition can't be requested directly.
pub static EXTENDED_PROPERTIES: PropertyDefinition = PropertyDefinition::string(
    "ExtendedProperty",
    "",
    flags!(CAN_SET, CAN_UPDATE, CAN_DELETE, MUST_BE_EXPLICITLY_LOADED),
    Exchange2007_SP1,
)
.without_uri()
.named("ExtendedProperties");

pub static CULTURE: PropertyDefinition = PropertyDefinition::string(
    "Culture",
    "item:Culture",
    flags!(CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
);

pub static LAST_MODIFIED_NAME: PropertyDefinition = PropertyDefinition::string(
    "LastModifiedName",
    "item:LastModifiedName",
    flags!(CAN_FIND),
    Exchange2010,
);

pub static LAST_MODIFIED_TIME: PropertyDefinition = PropertyDefinition::date_time(
    "LastModifiedTime",
    "item:LastModifiedTime",
    flags!(CAN_FIND),
    Exchange2010,
);

pub static IS_ASSOCIATED: PropertyDefinition = PropertyDefinition::boolean(
    "IsAssociated",
    "item:IsAssociated",
    flags!(CAN_FIND),
    Exchange2010,
);

pub static WEB_CLIENT_READ_FORM_QUERY_STRING: PropertyDefinition = PropertyDefinition::string(
    "WebClientReadFormQueryString",
    "item:WebClientReadFormQueryString",
    flags!(CAN_FIND),
    Exchange2010,
);

pub static WEB_CLIENT_EDIT_FORM_QUERY_STRING: PropertyDefinition = PropertyDefinition::string(
    "WebClientEditFormQueryString",
    "item:WebClientEditFormQueryString",
    flags!(CAN_FIND),
    Exchange2010,
);

pub static CONVERSATION_ID: PropertyDefinition = PropertyDefinition::complex(
    "ConversationId",
    "item:ConversationId",
    instantiate::<ConversationId>,
    flags!(CAN_FIND),
    Exchange2010,
);

pub static UNIQUE_BODY: PropertyDefinition = PropertyDefinition::complex(
    "UniqueBody",
    "item:UniqueBody",
    instantiate::<ItemBody>,
    flags!(MUST_BE_EXPLICITLY_LOADED),
    Exchange2010,
);

pub static STORE_ENTRY_ID: PropertyDefinition = PropertyDefinition::string(
    "StoreEntryId",
    "item:StoreEntryId",
    flags!(CAN_FIND),
    Exchange2010_SP2,
);

pub static INSTANCE_KEY: PropertyDefinition = PropertyDefinition::string(
    "InstanceKey",
    "item:InstanceKey",
    flags!(CAN_FIND),
    Exchange2013,
);

pub static NORMALIZED_BODY: PropertyDefinition = PropertyDefinition::complex(
    "NormalizedBody",
    "item:NormalizedBody",
    instantiate::<ItemBody>,
    flags!(MUST_BE_EXPLICITLY_LOADED),
    Exchange2013,
);

pub static TEXT_BODY: PropertyDefinition = PropertyDefinition::complex(
    "TextBody",
    "item:TextBody",
    instantiate::<ItemBody>,
    flags!(MUST_BE_EXPLICITLY_LOADED),
    Exchange2013,
);

pub static PREVIEW: PropertyDefinition =
    PropertyDefinition::string("Preview", "item:Preview", flags!(CAN_FIND), Exchange2013);

pub static ITEM_PROPERTIES: PropertyGroup = PropertyGroup {
    name: "Item",
    registrations: &[
        Registration::Property(&MIME_CONTENT),
        Registration::Property(&ID),
        Registration::Property(&PARENT_FOLDER_ID),
        Registration::Property(&ITEM_CLASS),
        Registration::Property(&SUBJECT),
        Registration::Property(&SENSITIVITY),
        Registration::Property(&BODY),
        Registration::Property(&DATE_TIME_RECEIVED),
        Registration::Property(&SIZE),
        Registration::Property(&CATEGORIES),
        Registration::Property(&IMPORTANCE),
        Registration::Property(&IN_REPLY_TO),
        Registration::Property(&IS_SUBMITTED),
        Registration::Property(&IS_DRAFT),
        Registration::Property(&IS_FROM_ME),
        Registration::Property(&IS_RESEND),
        Registration::Property(&IS_UNMODIFIED),
        Registration::Property(&DATE_TIME_SENT),
        Registration::Property(&DATE_TIME_CREATED),
        Registration::Property(&REMINDER_DUE_BY),
        Registration::Property(&IS_REMINDER_SET),
        Registration::Property(&REMINDER_MINUTES_BEFORE_START),
        Registration::Property(&DISPLAY_CC),
        Registration::Property(&DISPLAY_TO),
        Registration::Property(&HAS_ATTACHMENTS),
        Registration::Property(&CULTURE),
        Registration::Property(&LAST_MODIFIED_NAME),
        Registration::Property(&LAST_MODIFIED_TIME),
        Registration::Property(&IS_ASSOCIATED),
        Registration::Property(&WEB_CLIENT_READ_FORM_QUERY_STRING),
        Registration::Property(&WEB_CLIENT_EDIT_FORM_QUERY_STRING),
        Registration::Property(&CONVERSATION_ID),
        Registration::Property(&UNIQUE_BODY),
        Registration::Property(&STORE_ENTRY_ID),
        Registration::Property(&INSTANCE_KEY),
        Registration::Property(&NORMALIZED_BODY),
        Registration::Property(&TEXT_BODY),
        Registration::Property(&PREVIEW),
    ],
    declared: &[&EXTENDED_PROPERTIES],
};

pub static ITEM_SCHEMA: EntitySchema = EntitySchema {
    name: "ItemSchema",
    xml_element_name: "Item",
    kind: EntityKind::Item,
    id_property: &ID,
    groups: &[&ITEM_PROPERTIES],
};
