/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Conversations. Every property comes in a folder-scoped and a
//! mailbox-wide ("global") flavour.
//!
//! See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/conversation-ex15websvcsotherref>

use crate::{
    complex::StringList,
    flags,
    id::ConversationId,
    property::PropertyDefinition,
    schema::{EntityKind, EntitySchema, PropertyGroup, Registration},
    value::instantiate,
    version::ExchangeVersion::Exchange2010_SP1,
};

pub static ID: PropertyDefinition = PropertyDefinition::complex(
    "ConversationId",
    "conversation:ConversationId",
    instantiate::<ConversationId>,
    flags!(CAN_FIND),
    Exchange2010_SP1,
)
.named("Id");

pub static TOPIC: PropertyDefinition = PropertyDefinition::string(
    "ConversationTopic",
    "conversation:ConversationTopic",
    flags!(CAN_FIND),
    Exchange2010_SP1,
)
.named("Topic");

macro_rules! string_list {
    ($name:ident, $element:literal, $uri:literal) => {
        pub static $name: PropertyDefinition = PropertyDefinition::complex(
            $element,
            $uri,
            instantiate::<StringList>,
            flags!(CAN_FIND),
            Exchange2010_SP1,
        );
    };
}

string_list!(UNIQUE_RECIPIENTS, "UniqueRecipients", "conversation:UniqueRecipients");
string_list!(
    GLOBAL_UNIQUE_RECIPIENTS,
    "GlobalUniqueRecipients",
    "conversation:GlobalUniqueRecipients"
);
string_list!(UNIQUE_UNREAD_SENDERS, "UniqueUnreadSenders", "conversation:UniqueUnreadSenders");
string_list!(
    GLOBAL_UNIQUE_UNREAD_SENDERS,
    "GlobalUniqueUnreadSenders",
    "conversation:GlobalUniqueUnreadSenders"
);
string_list!(UNIQUE_SENDERS, "UniqueSenders", "conversation:UniqueSenders");
string_list!(
    GLOBAL_UNIQUE_SENDERS,
    "GlobalUniqueSenders",
    "conversation:GlobalUniqueSenders"
);

pub static LAST_DELIVERY_TIME: PropertyDefinition = PropertyDefinition::date_time(
    "LastDeliveryTime",
    "conversation:LastDeliveryTime",
    flags!(CAN_FIND),
    Exchange2010_SP1,
);

pub static GLOBAL_LAST_DELIVERY_TIME: PropertyDefinition = PropertyDefinition::date_time(
    "GlobalLastDeliveryTime",
    "conversation:GlobalLastDeliveryTime",
    flags!(CAN_FIND),
    Exchange2010_SP1,
);

string_list!(CATEGORIES, "Categories", "conversation:Categories");
string_list!(GLOBAL_CATEGORIES, "GlobalCategories", "conversation:GlobalCategories");

pub static HAS_ATTACHMENTS: PropertyDefinition = PropertyDefinition::boolean(
    "HasAttachments",
    "conversation:HasAttachments",
    flags!(CAN_FIND),
    Exchange2010_SP1,
);

pub static GLOBAL_HAS_ATTACHMENTS: PropertyDefinition = PropertyDefinition::boolean(
    "GlobalHasAttachments",
    "conversation:GlobalHasAttachments",
    flags!(CAN_FIND),
    Exchange2010_SP1,
);

pub static MESSAGE_COUNT: PropertyDefinition = PropertyDefinition::integer(
    "MessageCount",
    "conversation:MessageCount",
    flags!(CAN_FIND),
    Exchange2010_SP1,
);

pub static GLOBAL_MESSAGE_COUNT: PropertyDefinition = PropertyDefinition::integer(
    "GlobalMessageCount",
    "conversation:GlobalMessageCount",
    flags!(CAN_FIND),
    Exchange2010_SP1,
);

pub static UNREAD_COUNT: PropertyDefinition = PropertyDefinition::integer(
    "UnreadCount",
    "conversation:UnreadCount",
    flags!(CAN_FIND),
    Exchange2010_SP1,
);

pub static GLOBAL_UNREAD_COUNT: PropertyDefinition = PropertyDefinition::integer(
    "GlobalUnreadCount",
    "conversation:GlobalUnreadCount",
    flags!(CAN_FIND),
    Exchange2010_SP1,
);

pub static SIZE: PropertyDefinition = PropertyDefinition::integer(
    "Size",
    "conversation:Size",
    flags!(CAN_FIND),
    Exchange2010_SP1,
);

pub static GLOBAL_SIZE: PropertyDefinition = PropertyDefinition::integer(
    "GlobalSize",
    "conversation:GlobalSize",
    flags!(CAN_FIND),
    Exchange2010_SP1,
);

string_list!(ITEM_CLASSES, "ItemClasses", "conversation:ItemClasses");
string_list!(GLOBAL_ITEM_CLASSES, "GlobalItemClasses", "conversation:GlobalItemClasses");

pub static IMPORTANCE: PropertyDefinition = PropertyDefinition::generic_enum(
    "Importance",
    "conversation:Importance",
    &["Low", "Normal", "High"],
    flags!(CAN_FIND),
    Exchange2010_SP1,
);

pub static GLOBAL_IMPORTANCE: PropertyDefinition = PropertyDefinition::generic_enum(
    "GlobalImportance",
    "conversation:GlobalImportance",
    &["Low", "Normal", "High"],
    flags!(CAN_FIND),
    Exchange2010_SP1,
);

pub static CONVERSATION_PROPERTIES: PropertyGroup = PropertyGroup {
    name: "Conversation",
    registrations: &[
        Registration::Property(&ID),
        Registration::Property(&TOPIC),
        Registration::Property(&UNIQUE_RECIPIENTS),
        Registration::Property(&GLOBAL_UNIQUE_RECIPIENTS),
        Registration::Property(&UNIQUE_UNREAD_SENDERS),
        Registration::Property(&GLOBAL_UNIQUE_UNREAD_SENDERS),
        Registration::Property(&UNIQUE_SENDERS),
        Registration::Property(&GLOBAL_UNIQUE_SENDERS),
        Registration::Property(&LAST_DELIVERY_TIME),
        Registration::Property(&GLOBAL_LAST_DELIVERY_TIME),
        Registration::Property(&CATEGORIES),
        Registration::Property(&GLOBAL_CATEGORIES),
        Registration::Property(&HAS_ATTACHMENTS),
        Registration::Property(&GLOBAL_HAS_ATTACHMENTS),
        Registration::Property(&MESSAGE_COUNT),
        Registration::Property(&GLOBAL_MESSAGE_COUNT),
        Registration::Property(&UNREAD_COUNT),
        Registration::Property(&GLOBAL_UNREAD_COUNT),
        Registration::Property(&SIZE),
        Registration::Property(&GLOBAL_SIZE),
        Registration::Property(&ITEM_CLASSES),
        Registration::Property(&GLOBAL_ITEM_CLASSES),
        Registration::Property(&IMPORTANCE),
        Registration::Property(&GLOBAL_IMPORTANCE),
    ],
    declared: &[],
};

pub static CONVERSATION_SCHEMA: EntitySchema = EntitySchema {
    name: "ConversationSchema",
    xml_element_name: "Conversation",
    kind: EntityKind::Conversation,
    id_property: &ID,
    groups: &[&CONVERSATION_PROPERTIES],
};
