/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Folders. The specialized folder types share the generic folder's
//! properties and differ only in the element they are serialized as.
//!
//! See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/folder>

use crate::{
    flags,
    id::FolderId,
    property::PropertyDefinition,
    schema::{EntityKind, EntitySchema, PropertyGroup, Registration},
    value::instantiate,
    version::ExchangeVersion::{Exchange2007_SP1, Exchange2013},
};

use super::item;

pub static ID: PropertyDefinition = PropertyDefinition::complex(
    "FolderId",
    "folder:FolderId",
    instantiate::<FolderId>,
    flags!(CAN_FIND),
    Exchange2007_SP1,
)
.named("Id");

pub static PARENT_FOLDER_ID: PropertyDefinition = PropertyDefinition::complex(
    "ParentFolderId",
    "folder:ParentFolderId",
    instantiate::<FolderId>,
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

pub static FOLDER_CLASS: PropertyDefinition = PropertyDefinition::string(
    "FolderClass",
    "folder:FolderClass",
    flags!(CAN_SET, CAN_UPDATE, CAN_FIND),
    Exchange2007_SP1,
);

pub static DISPLAY_NAME: PropertyDefinition = PropertyDefinition::string(
    "DisplayName",
    "folder:DisplayName",
    flags!(CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
);

pub static TOTAL_COUNT: PropertyDefinition = PropertyDefinition::integer(
    "TotalCount",
    "folder:TotalCount",
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

pub static CHILD_FOLDER_COUNT: PropertyDefinition = PropertyDefinition::integer(
    "ChildFolderCount",
    "folder:ChildFolderCount",
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

pub static UNREAD_COUNT: PropertyDefinition = PropertyDefinition::integer(
    "UnreadCount",
    "folder:UnreadCount",
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

pub static WELL_KNOWN_FOLDER_NAME: PropertyDefinition = PropertyDefinition::string(
    "DistinguishedFolderId",
    "folder:DistinguishedFolderId",
    flags!(CAN_FIND),
    Exchange2013,
)
.named("WellKnownFolderName");

pub static FOLDER_PROPERTIES: PropertyGroup = PropertyGroup {
    name: "Folder",
    registrations: &[
        Registration::Property(&ID),
        Registration::Property(&PARENT_FOLDER_ID),
        Registration::Property(&FOLDER_CLASS),
        Registration::Property(&DISPLAY_NAME),
        Registration::Property(&TOTAL_COUNT),
        Registration::Property(&CHILD_FOLDER_COUNT),
        Registration::Property(&item::EXTENDED_PROPERTIES),
        Registration::Property(&UNREAD_COUNT),
        Registration::Property(&WELL_KNOWN_FOLDER_NAME),
    ],
    declared: &[],
};

macro_rules! folder_schema {
    ($name:ident, $schema_name:literal, $element:literal) => {
        pub static $name: EntitySchema = EntitySchema {
            name: $schema_name,
            xml_element_name: $element,
            kind: EntityKind::Folder,
            id_property: &ID,
            groups: &[&FOLDER_PROPERTIES],
        };
    };
}

folder_schema!(FOLDER_SCHEMA, "FolderSchema", "Folder");
folder_schema!(CALENDAR_FOLDER_SCHEMA, "CalendarFolderSchema", "CalendarFolder");
folder_schema!(CONTACTS_FOLDER_SCHEMA, "ContactsFolderSchema", "ContactsFolder");
folder_schema!(TASKS_FOLDER_SCHEMA, "TasksFolderSchema", "TasksFolder");
folder_schema!(SEARCH_FOLDER_SCHEMA, "SearchFolderSchema", "SearchFolder");
