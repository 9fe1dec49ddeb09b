/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Tasks.
//!
//! See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/task>

use crate::{
    complex::StringList,
    flags,
    property::PropertyDefinition,
    schema::{EntityKind, EntitySchema, PropertyGroup, Registration},
    value::instantiate,
    version::ExchangeVersion::Exchange2007_SP1,
};

use super::item;

pub static ACTUAL_WORK: PropertyDefinition = PropertyDefinition::integer(
    "ActualWork",
    "task:ActualWork",
    flags!(CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
)
.nullable(true);

pub static ASSIGNED_TIME: PropertyDefinition = PropertyDefinition::date_time(
    "AssignedTime",
    "task:AssignedTime",
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

pub static BILLING_INFORMATION: PropertyDefinition = PropertyDefinition::string(
    "BillingInformation",
    "task:BillingInformation",
    flags!(CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
);

pub static CHANGE_COUNT: PropertyDefinition = PropertyDefinition::integer(
    "ChangeCount",
    "task:ChangeCount",
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

pub static COMPANIES: PropertyDefinition = PropertyDefinition::complex(
    "Companies",
    "task:Companies",
    instantiate::<StringList>,
    flags!(AUTO_INSTANTIATE_ON_READ, CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
);

pub static COMPLETE_DATE: PropertyDefinition = PropertyDefinition::date_time(
    "CompleteDate",
    "task:CompleteDate",
    flags!(CAN_SET, CAN_UPDATE, CAN_FIND),
    Exchange2007_SP1,
);

pub static CONTACTS: PropertyDefinition = PropertyDefinition::complex(
    "Contacts",
    "task:Contacts",
    instantiate::<StringList>,
    flags!(AUTO_INSTANTIATE_ON_READ, CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
);

pub static DELEGATION_STATE: PropertyDefinition = PropertyDefinition::generic_enum(
    "DelegationState",
    "task:DelegationState",
    &["NoMatch", "OwnNew", "Owned", "Accepted", "Declined", "Max"],
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

pub static DELEGATOR: PropertyDefinition = PropertyDefinition::string(
    "Delegator",
    "task:Delegator",
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

pub static DUE_DATE: PropertyDefinition = PropertyDefinition::date_time(
    "DueDate",
    "task:DueDate",
    flags!(CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
);

pub static IS_ASSIGNMENT_EDITABLE: PropertyDefinition = PropertyDefinition::integer(
    "IsAssignmentEditable",
    "task:IsAssignmentEditable",
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

pub static IS_COMPLETE: PropertyDefinition = PropertyDefinition::boolean(
    "IsComplete",
    "task:IsComplete",
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

pub static IS_RECURRING: PropertyDefinition = PropertyDefinition::boolean(
    "IsRecurring",
    "task:IsRecurring",
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

pub static IS_TEAM_TASK: PropertyDefinition = PropertyDefinition::boolean(
    "IsTeamTask",
    "task:IsTeamTask",
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

pub static MILEAGE: PropertyDefinition = PropertyDefinition::string(
    "Mileage",
    "task:Mileage",
    flags!(CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
);

pub static OWNER: PropertyDefinition =
    PropertyDefinition::string("Owner", "task:Owner", flags!(CAN_FIND), Exchange2007_SP1);

pub static PERCENT_COMPLETE: PropertyDefinition = PropertyDefinition::double(
    "PercentComplete",
    "task:PercentComplete",
    flags!(CAN_SET, CAN_UPDATE, CAN_FIND),
    Exchange2007_SP1,
);

pub static START_DATE: PropertyDefinition = PropertyDefinition::date_time(
    "StartDate",
    "task:StartDate",
    flags!(CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
);

pub static STATUS: PropertyDefinition = PropertyDefinition::generic_enum(
    "Status",
    "task:Status",
    &[
        "NotStarted",
        "InProgress",
        "Completed",
        "WaitingOnOthers",
        "Deferred",
    ],
    flags!(CAN_SET, CAN_UPDATE, CAN_FIND),
    Exchange2007_SP1,
);

pub static STATUS_DESCRIPTION: PropertyDefinition = PropertyDefinition::string(
    "StatusDescription",
    "task:StatusDescription",
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

pub static TOTAL_WORK: PropertyDefinition = PropertyDefinition::integer(
    "TotalWork",
    "task:TotalWork",
    flags!(CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
)
.nullable(true);

pub static TASK_PROPERTIES: PropertyGroup = PropertyGroup {
    name: "Task",
    registrations: &[
        Registration::Property(&ACTUAL_WORK),
        Registration::Property(&ASSIGNED_TIME),
        Registration::Property(&BILLING_INFORMATION),
        Registration::Property(&CHANGE_COUNT),
        Registration::Property(&COMPANIES),
        Registration::Property(&COMPLETE_DATE),
        Registration::Property(&CONTACTS),
        Registration::Property(&DELEGATION_STATE),
        Registration::Property(&DELEGATOR),
        Registration::Property(&DUE_DATE),
        Registration::Property(&IS_ASSIGNMENT_EDITABLE),
        Registration::Property(&IS_COMPLETE),
        Registration::Property(&IS_RECURRING),
        Registration::Property(&IS_TEAM_TASK),
        Registration::Property(&MILEAGE),
        Registration::Property(&OWNER),
        Registration::Property(&PERCENT_COMPLETE),
        Registration::Property(&START_DATE),
        Registration::Property(&STATUS),
        Registration::Property(&STATUS_DESCRIPTION),
        Registration::Property(&TOTAL_WORK),
    ],
    declared: &[],
};

pub static TASK_SCHEMA: EntitySchema = EntitySchema {
    name: "TaskSchema",
    xml_element_name: "Task",
    kind: EntityKind::Item,
    id_property: &item::ID,
    groups: &[&item::ITEM_PROPERTIES, &TASK_PROPERTIES],
};
