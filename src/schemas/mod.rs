/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! The property definitions and schemas of the standard EWS entity types.
//!
//! Each module declares the definitions owned by one entity type, the
//! [`PropertyGroup`] registering them, and the [`EntitySchema`]s built from
//! that group and the groups it extends.
//!
//! [`PropertyGroup`]: crate::PropertyGroup

pub mod appointment;
pub mod contact;
pub mod conversation;
pub mod folder;
pub mod item;
pub mod message;
pub mod task;

use crate::schema::EntitySchema;

/// Every entity type known to [`SchemaRegistry::standard`].
///
/// [`SchemaRegistry::standard`]: crate::SchemaRegistry::standard
pub static STANDARD_SCHEMAS: &[&EntitySchema] = &[
    &item::ITEM_SCHEMA,
    &message::EMAIL_MESSAGE_SCHEMA,
    &message::MEETING_MESSAGE_SCHEMA,
    &message::MEETING_REQUEST_SCHEMA,
    &appointment::APPOINTMENT_SCHEMA,
    &contact::CONTACT_SCHEMA,
    &task::TASK_SCHEMA,
    &folder::FOLDER_SCHEMA,
    &folder::CALENDAR_FOLDER_SCHEMA,
    &folder::CONTACTS_FOLDER_SCHEMA,
    &folder::TASKS_FOLDER_SCHEMA,
    &folder::SEARCH_FOLDER_SCHEMA,
    &conversation::CONVERSATION_SCHEMA,
];

#[cfg(test)]
mod tests {
    use std::{ptr, sync::Arc, thread};

    use super::*;
    use crate::{
        property::{PropertyDefinition, PropertyDefinitionFlags},
        schema::{Schema, SchemaRegistry},
        version::ExchangeVersion,
    };

    fn registry() -> SchemaRegistry {
        SchemaRegistry::standard().expect("standard schemas should be consistent")
    }

    fn position(schema: &Schema, definition: &PropertyDefinition) -> usize {
        schema
            .properties()
            .iter()
            .position(|candidate| ptr::eq(*candidate, definition))
            .unwrap_or_else(|| panic!("{} should be registered", definition.name()))
    }

    #[test]
    fn every_standard_schema_builds() {
        let registry = registry();
        assert_eq!(registry.schemas().len(), STANDARD_SCHEMAS.len());

        for description in STANDARD_SCHEMAS {
            let schema = registry
                .schema(description.name)
                .expect("every described schema should be registered");
            assert_eq!(schema.xml_element_name(), description.xml_element_name);
            assert!(schema.contains(schema.id_property()));
        }
    }

    #[test]
    fn appointment_registration_order() {
        let schema = registry()
            .schema("AppointmentSchema")
            .expect("appointment schema should be registered");

        let start = position(&schema, &appointment::START);
        let end = position(&schema, &appointment::END);
        let original_start = position(&schema, &appointment::ORIGINAL_START);
        assert!(start < end);
        assert!(end < original_start);

        // Item properties come before calendar properties.
        assert!(position(&schema, &item::SUBJECT) < position(&schema, &appointment::ICAL_UID));

        let leading: Vec<_> = schema
            .properties()
            .iter()
            .take(5)
            .map(|definition| definition.name())
            .collect();
        assert_eq!(
            leading,
            ["MimeContent", "Id", "ParentFolderId", "ItemClass", "Subject"]
        );
    }

    #[test]
    fn explicitly_loaded_properties_are_not_first_class() {
        let schema = registry()
            .schema("ItemSchema")
            .expect("item schema should be registered");

        let mime = schema
            .try_get_property_definition("MimeContent")
            .expect("MIME content should be registered by element name");
        assert!(ptr::eq(mime, &item::MIME_CONTENT));
        assert!(mime.has_flag(PropertyDefinitionFlags::MUST_BE_EXPLICITLY_LOADED));

        assert!(!schema
            .first_class_properties()
            .iter()
            .any(|definition| ptr::eq(*definition, &item::MIME_CONTENT)));
        assert!(schema
            .first_class_properties()
            .iter()
            .any(|definition| ptr::eq(*definition, &item::SUBJECT)));
    }

    #[test]
    fn summary_lists_hold_exactly_the_findable_properties() {
        for schema in registry().schemas() {
            for definition in schema.properties() {
                let findable = definition.has_flag(PropertyDefinitionFlags::CAN_FIND);
                let listed = schema
                    .first_class_summary_properties()
                    .iter()
                    .any(|candidate| ptr::eq(*candidate, *definition));
                assert_eq!(
                    findable,
                    listed,
                    "{}.{} summary membership should follow CAN_FIND",
                    schema.name(),
                    definition.name()
                );
            }
        }
    }

    #[test]
    fn meeting_requests_share_calendar_definitions() {
        let registry = registry();
        let request = registry
            .schema_for_element("MeetingRequest")
            .expect("meeting request schema should be registered");
        let appointment = registry
            .schema_for_element("CalendarItem")
            .expect("appointment schema should be registered");

        for shared in [&appointment::START, &appointment::END, &appointment::ICAL_UID] {
            assert!(request.contains(shared));
            assert!(appointment.contains(shared));
        }

        assert!(ptr::eq(
            registry
                .find_property_by_uri("calendar:Start")
                .expect("start should be found by URI"),
            &appointment::START
        ));

        // The meeting time zone is handled by the schema without being
        // exposed to callers.
        assert!(request.contains(&appointment::MEETING_TIME_ZONE));
        assert!(!request
            .visible_properties()
            .iter()
            .any(|definition| ptr::eq(*definition, &appointment::MEETING_TIME_ZONE)));
    }

    #[test]
    fn properties_without_uri_are_not_looked_up() {
        let registry = registry();
        assert_eq!(item::EXTENDED_PROPERTIES.uri(), None);
        assert!(registry.find_property_by_uri("").is_none());

        let folder = registry
            .schema("FolderSchema")
            .expect("folder schema should be registered");
        assert!(folder.contains(&item::EXTENDED_PROPERTIES));
    }

    #[test]
    fn contact_phone_numbers_are_indexed() {
        let registry = registry();
        let phone = registry
            .find_indexed_property("contacts:PhoneNumber", "MobilePhone")
            .expect("mobile phone should be indexed");
        assert!(ptr::eq(phone, &contact::MOBILE_PHONE));
        assert!(ptr::eq(phone.dictionary(), &contact::PHONE_NUMBERS));

        let schema = registry
            .schema("ContactSchema")
            .expect("contact schema should be registered");
        assert_eq!(schema.indexed_properties().len(), 15);
        assert!(schema.contains_indexed(&contact::BUSINESS_PHONE));
    }

    #[test]
    fn versions_gate_newer_properties() {
        assert!(!item::PREVIEW.is_supported_by(ExchangeVersion::Exchange2010_SP2));
        assert!(item::PREVIEW.is_supported_by(ExchangeVersion::Exchange2013));
        assert!(conversation::TOPIC.is_supported_by(ExchangeVersion::Exchange2016));
    }

    #[test]
    fn registry_is_shared_across_threads() {
        let registry = Arc::new(registry());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    registry
                        .find_property_by_uri("item:Subject")
                        .map(|definition| definition.name())
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().expect("thread should not panic"), Some("Subject"));
        }
    }
}
