/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Calendar items.
//!
//! See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/calendaritem>

use crate::{
    complex::{AttendeeCollection, EmailAddress, MeetingTimeZone, TimeZoneDefinition},
    flags,
    property::PropertyDefinition,
    schema::{EntityKind, EntitySchema, PropertyGroup, Registration},
    value::instantiate,
    version::ExchangeVersion::{Exchange2007_SP1, Exchange2010},
};

use super::item;

pub(super) const FREE_BUSY_STATUSES: &[&str] =
    &["Free", "Tentative", "Busy", "OOF", "WorkingElsewhere", "NoData"];

pub(super) const RESPONSE_TYPES: &[&str] = &[
    "Unknown",
    "Organizer",
    "Tentative",
    "Accept",
    "Decline",
    "NoResponseReceived",
];

pub static ICAL_UID: PropertyDefinition = PropertyDefinition::string(
    "UID",
    "calendar:UID",
    flags!(CAN_SET, CAN_UPDATE, CAN_FIND),
    Exchange2007_SP1,
)
.named("ICalUid");

pub static ICAL_RECURRENCE_ID: PropertyDefinition = PropertyDefinition::date_time(
    "RecurrenceId",
    "calendar:RecurrenceId",
    flags!(CAN_FIND),
    Exchange2010,
)
.named("ICalRecurrenceId");

pub static ICAL_DATE_TIME_STAMP: PropertyDefinition = PropertyDefinition::date_time(
    "DateTimeStamp",
    "calendar:DateTimeStamp",
    flags!(CAN_FIND),
    Exchange2010,
)
.named("ICalDateTimeStamp");

pub static START: PropertyDefinition = PropertyDefinition::date_time(
    "Start",
    "calendar:Start",
    flags!(CAN_SET, CAN_UPDATE, CAN_FIND),
    Exchange2007_SP1,
);

pub static END: PropertyDefinition = PropertyDefinition::date_time(
    "End",
    "calendar:End",
    flags!(CAN_SET, CAN_UPDATE, CAN_FIND),
    Exchange2007_SP1,
);

pub static ORIGINAL_START: PropertyDefinition = PropertyDefinition::date_time(
    "OriginalStart",
    "calendar:OriginalStart",
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

pub static IS_ALL_DAY_EVENT: PropertyDefinition = PropertyDefinition::boolean(
    "IsAllDayEvent",
    "calendar:IsAllDayEvent",
    flags!(CAN_SET, CAN_UPDATE, CAN_FIND),
    Exchange2007_SP1,
);

pub static LEGACY_FREE_BUSY_STATUS: PropertyDefinition = PropertyDefinition::generic_enum(
    "LegacyFreeBusyStatus",
    "calendar:LegacyFreeBusyStatus",
    FREE_BUSY_STATUSES,
    flags!(CAN_SET, CAN_UPDATE, CAN_FIND),
    Exchange2007_SP1,
);

pub static LOCATION: PropertyDefinition = PropertyDefinition::string(
    "Location",
    "calendar:Location",
    flags!(CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
);

pub static WHEN: PropertyDefinition = PropertyDefinition::string(
    "When",
    "calendar:When",
    flags!(CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
);

pub static IS_MEETING: PropertyDefinition = PropertyDefinition::boolean(
    "IsMeeting",
    "calendar:IsMeeting",
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

pub static IS_CANCELLED: PropertyDefinition = PropertyDefinition::boolean(
    "IsCancelled",
    "calendar:IsCancelled",
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

pub static IS_RECURRING: PropertyDefinition = PropertyDefinition::boolean(
    "IsRecurring",
    "calendar:IsRecurring",
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

pub static MEETING_REQUEST_WAS_SENT: PropertyDefinition = PropertyDefinition::boolean(
    "MeetingRequestWasSent",
    "calendar:MeetingRequestWasSent",
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

pub static IS_RESPONSE_REQUESTED: PropertyDefinition = PropertyDefinition::boolean(
    "IsResponseRequested",
    "calendar:IsResponseRequested",
    flags!(CAN_SET, CAN_UPDATE, CAN_FIND),
    Exchange2007_SP1,
);

pub static APPOINTMENT_TYPE: PropertyDefinition = PropertyDefinition::generic_enum(
    "CalendarItemType",
    "calendar:CalendarItemType",
    &["Single", "Occurrence", "Exception", "RecurringMaster"],
    flags!(CAN_FIND),
    Exchange2007_SP1,
)
.named("AppointmentType");

pub static MY_RESPONSE_TYPE: PropertyDefinition = PropertyDefinition::generic_enum(
    "MyResponseType",
    "calendar:MyResponseType",
    RESPONSE_TYPES,
    flags!(CAN_SET, CAN_UPDATE, CAN_FIND),
    Exchange2007_SP1,
);

pub static ORGANIZER: PropertyDefinition = PropertyDefinition::complex(
    "Organizer",
    "calendar:Organizer",
    instantiate::<EmailAddress>,
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

pub static REQUIRED_ATTENDEES: PropertyDefinition = PropertyDefinition::complex(
    "RequiredAttendees",
    "calendar:RequiredAttendees",
    instantiate::<AttendeeCollection>,
    flags!(AUTO_INSTANTIATE_ON_READ, CAN_SET, CAN_UPDATE, CAN_DELETE),
    Exchange2007_SP1,
);

pub static OPTIONAL_ATTENDEES: PropertyDefinition = PropertyDefinition::complex(
    "OptionalAttendees",
    "calendar:OptionalAttendees",
    instantiate::<AttendeeCollection>,
    flags!(AUTO_INSTANTIATE_ON_READ, CAN_SET, CAN_UPDATE, CAN_DELETE),
    Exchange2007_SP1,
);

pub static RESOURCES: PropertyDefinition = PropertyDefinition::complex(
    "Resources",
    "calendar:Resources",
    instantiate::<AttendeeCollection>,
    flags!(AUTO_INSTANTIATE_ON_READ, CAN_SET, CAN_UPDATE, CAN_DELETE),
    Exchange2007_SP1,
);

pub static CONFLICTING_MEETING_COUNT: PropertyDefinition = PropertyDefinition::integer(
    "ConflictingMeetingCount",
    "calendar:ConflictingMeetingCount",
    flags!(),
    Exchange2007_SP1,
);

pub static ADJACENT_MEETING_COUNT: PropertyDefinition = PropertyDefinition::integer(
    "AdjacentMeetingCount",
    "calendar:AdjacentMeetingCount",
    flags!(),
    Exchange2007_SP1,
);

/// An `xs:duration`, e.g. `PT1H30M`.
pub static DURATION: PropertyDefinition = PropertyDefinition::string(
    "Duration",
    "calendar:Duration",
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

pub static TIME_ZONE: PropertyDefinition = PropertyDefinition::string(
    "TimeZone",
    "calendar:TimeZone",
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

pub static APPOINTMENT_REPLY_TIME: PropertyDefinition = PropertyDefinition::date_time(
    "AppointmentReplyTime",
    "calendar:AppointmentReplyTime",
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

pub static APPOINTMENT_SEQUENCE_NUMBER: PropertyDefinition = PropertyDefinition::integer(
    "AppointmentSequenceNumber",
    "calendar:AppointmentSequenceNumber",
    flags!(),
    Exchange2007_SP1,
);

pub static APPOINTMENT_STATE: PropertyDefinition = PropertyDefinition::integer(
    "AppointmentState",
    "calendar:AppointmentState",
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

/// Only written when targeting Exchange 2007; later versions use the start
/// and end time zones.
pub static MEETING_TIME_ZONE: PropertyDefinition = PropertyDefinition::complex(
    "MeetingTimeZone",
    "calendar:MeetingTimeZone",
    instantiate::<MeetingTimeZone>,
    flags!(CAN_SET, CAN_UPDATE),
    Exchange2007_SP1,
)
.superseded_after(Exchange2007_SP1);

pub static START_TIME_ZONE: PropertyDefinition = PropertyDefinition::complex(
    "StartTimeZone",
    "calendar:StartTimeZone",
    instantiate::<TimeZoneDefinition>,
    flags!(CAN_SET, CAN_UPDATE, CAN_FIND),
    Exchange2010,
);

pub static END_TIME_ZONE: PropertyDefinition = PropertyDefinition::complex(
    "EndTimeZone",
    "calendar:EndTimeZone",
    instantiate::<TimeZoneDefinition>,
    flags!(CAN_SET, CAN_UPDATE, CAN_FIND),
    Exchange2010,
);

pub static CONFERENCE_TYPE: PropertyDefinition = PropertyDefinition::integer(
    "ConferenceType",
    "calendar:ConferenceType",
    flags!(CAN_SET, CAN_UPDATE, CAN_FIND),
    Exchange2007_SP1,
);

pub static ALLOW_NEW_TIME_PROPOSAL: PropertyDefinition = PropertyDefinition::boolean(
    "AllowNewTimeProposal",
    "calendar:AllowNewTimeProposal",
    flags!(CAN_SET, CAN_UPDATE, CAN_FIND),
    Exchange2007_SP1,
);

pub static IS_ONLINE_MEETING: PropertyDefinition = PropertyDefinition::boolean(
    "IsOnlineMeeting",
    "calendar:IsOnlineMeeting",
    flags!(CAN_SET, CAN_UPDATE, CAN_FIND),
    Exchange2007_SP1,
);

pub static MEETING_WORKSPACE_URL: PropertyDefinition = PropertyDefinition::string(
    "MeetingWorkspaceUrl",
    "calendar:MeetingWorkspaceUrl",
    flags!(CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
);

pub static NET_SHOW_URL: PropertyDefinition = PropertyDefinition::string(
    "NetShowUrl",
    "calendar:NetShowUrl",
    flags!(CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
);

pub static APPOINTMENT_PROPERTIES: PropertyGroup = PropertyGroup {
    name: "Appointment",
    registrations: &[
        Registration::Property(&ICAL_UID),
        Registration::Property(&ICAL_RECURRENCE_ID),
        Registration::Property(&ICAL_DATE_TIME_STAMP),
        Registration::Property(&START),
        Registration::Property(&END),
        Registration::Property(&ORIGINAL_START),
        Registration::Property(&IS_ALL_DAY_EVENT),
        Registration::Property(&LEGACY_FREE_BUSY_STATUS),
        Registration::Property(&LOCATION),
        Registration::Property(&WHEN),
        Registration::Property(&IS_MEETING),
        Registration::Property(&IS_CANCELLED),
        Registration::Property(&IS_RECURRING),
        Registration::Property(&MEETING_REQUEST_WAS_SENT),
        Registration::Property(&IS_RESPONSE_REQUESTED),
        Registration::Property(&APPOINTMENT_TYPE),
        Registration::Property(&MY_RESPONSE_TYPE),
        Registration::Property(&ORGANIZER),
        Registration::Property(&REQUIRED_ATTENDEES),
        Registration::Property(&OPTIONAL_ATTENDEES),
        Registration::Property(&RESOURCES),
        Registration::Property(&CONFLICTING_MEETING_COUNT),
        Registration::Property(&ADJACENT_MEETING_COUNT),
        Registration::Property(&DURATION),
        Registration::Property(&TIME_ZONE),
        Registration::Property(&APPOINTMENT_REPLY_TIME),
        Registration::Property(&APPOINTMENT_SEQUENCE_NUMBER),
        Registration::Property(&APPOINTMENT_STATE),
        Registration::Internal(&MEETING_TIME_ZONE),
        Registration::Property(&START_TIME_ZONE),
        Registration::Property(&END_TIME_ZONE),
        Registration::Property(&CONFERENCE_TYPE),
        Registration::Property(&ALLOW_NEW_TIME_PROPOSAL),
        Registration::Property(&IS_ONLINE_MEETING),
        Registration::Property(&MEETING_WORKSPACE_URL),
        Registration::Property(&NET_SHOW_URL),
    ],
    declared: &[],
};

pub static APPOINTMENT_SCHEMA: EntitySchema = EntitySchema {
    name: "AppointmentSchema",
    xml_element_name: "CalendarItem",
    kind: EntityKind::Item,
    id_property: &item::ID,
    groups: &[&item::ITEM_PROPERTIES, &APPOINTMENT_PROPERTIES],
};
