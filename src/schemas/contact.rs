/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Contacts.
//!
//! Phone numbers, email addresses and IM addresses are dictionaries keyed by
//! label; each label is also exposed as an indexed property so it can be
//! requested or updated on its own.
//!
//! See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/contact>

use crate::{
    complex::{StringDictionary, StringList},
    flags,
    property::{IndexedPropertyDefinition, PropertyDefinition},
    schema::{EntityKind, EntitySchema, PropertyGroup, Registration},
    value::instantiate,
    version::ExchangeVersion::{Exchange2007_SP1, Exchange2010},
};

use super::item;

pub static FILE_AS: PropertyDefinition = PropertyDefinition::string(
    "FileAs",
    "contacts:FileAs",
    flags!(CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
);

pub static FILE_AS_MAPPING: PropertyDefinition = PropertyDefinition::generic_enum(
    "FileAsMapping",
    "contacts:FileAsMapping",
    &[
        "None",
        "LastCommaFirst",
        "FirstSpaceLast",
        "Company",
        "LastCommaFirstCompany",
        "CompanyLastFirst",
        "LastFirst",
        "LastFirstCompany",
        "CompanyLastCommaFirst",
    ],
    flags!(CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
);

pub static DISPLAY_NAME: PropertyDefinition = PropertyDefinition::string(
    "DisplayName",
    "contacts:DisplayName",
    flags!(CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
);

pub static GIVEN_NAME: PropertyDefinition = PropertyDefinition::string(
    "GivenName",
    "contacts:GivenName",
    flags!(CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
);

pub static INITIALS: PropertyDefinition = PropertyDefinition::string(
    "Initials",
    "contacts:Initials",
    flags!(CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
);

pub static MIDDLE_NAME: PropertyDefinition = PropertyDefinition::string(
    "MiddleName",
    "contacts:MiddleName",
    flags!(CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
);

pub static NICK_NAME: PropertyDefinition = PropertyDefinition::string(
    "Nickname",
    "contacts:Nickname",
    flags!(CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
)
.named("NickName");

pub static COMPANY_NAME: PropertyDefinition = PropertyDefinition::string(
    "CompanyName",
    "contacts:CompanyName",
    flags!(CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
);

pub static EMAIL_ADDRESSES: PropertyDefinition = PropertyDefinition::complex(
    "EmailAddresses",
    "contacts:EmailAddresses",
    instantiate::<StringDictionary>,
    flags!(AUTO_INSTANTIATE_ON_READ, REUSE_INSTANCE, CAN_SET, CAN_UPDATE, CAN_DELETE),
    Exchange2007_SP1,
);

pub static PHONE_NUMBERS: PropertyDefinition = PropertyDefinition::complex(
    "PhoneNumbers",
    "contacts:PhoneNumbers",
    instantiate::<StringDictionary>,
    flags!(AUTO_INSTANTIATE_ON_READ, REUSE_INSTANCE, CAN_SET, CAN_UPDATE, CAN_DELETE),
    Exchange2007_SP1,
);

pub static ASSISTANT_NAME: PropertyDefinition = PropertyDefinition::string(
    "AssistantName",
    "contacts:AssistantName",
    flags!(CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
);

pub static BIRTHDAY: PropertyDefinition = PropertyDefinition::date_time(
    "Birthday",
    "contacts:Birthday",
    flags!(CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
);

pub static BUSINESS_HOME_PAGE: PropertyDefinition = PropertyDefinition::string(
    "BusinessHomePage",
    "contacts:BusinessHomePage",
    flags!(CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
);

pub static CHILDREN: PropertyDefinition = PropertyDefinition::complex(
    "Children",
    "contacts:Children",
    instantiate::<StringList>,
    flags!(AUTO_INSTANTIATE_ON_READ, CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
);

pub static COMPANIES: PropertyDefinition = PropertyDefinition::complex(
    "Companies",
    "contacts:Companies",
    instantiate::<StringList>,
    flags!(AUTO_INSTANTIATE_ON_READ, CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
);

pub static CONTACT_SOURCE: PropertyDefinition = PropertyDefinition::generic_enum(
    "ContactSource",
    "contacts:ContactSource",
    &["ActiveDirectory", "Store"],
    flags!(CAN_FIND),
    Exchange2007_SP1,
);

pub static DEPARTMENT: PropertyDefinition = PropertyDefinition::string(
    "Department",
    "contacts:Department",
    flags!(CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
);

pub static GENERATION: PropertyDefinition = PropertyDefinition::string(
    "Generation",
    "contacts:Generation",
    flags!(CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
);

pub static IM_ADDRESSES: PropertyDefinition = PropertyDefinition::complex(
    "ImAddresses",
    "contacts:ImAddresses",
    instantiate::<StringDictionary>,
    flags!(AUTO_INSTANTIATE_ON_READ, REUSE_INSTANCE, CAN_SET, CAN_UPDATE, CAN_DELETE),
    Exchange2007_SP1,
);

pub static JOB_TITLE: PropertyDefinition = PropertyDefinition::string(
    "JobTitle",
    "contacts:JobTitle",
    flags!(CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
);

pub static MANAGER: PropertyDefinition = PropertyDefinition::string(
    "Manager",
    "contacts:Manager",
    flags!(CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
);

pub static MILEAGE: PropertyDefinition = PropertyDefinition::string(
    "Mileage",
    "contacts:Mileage",
    flags!(CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
);

pub static OFFICE_LOCATION: PropertyDefinition = PropertyDefinition::string(
    "OfficeLocation",
    "contacts:OfficeLocation",
    flags!(CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
);

pub static PROFESSION: PropertyDefinition = PropertyDefinition::string(
    "Profession",
    "contacts:Profession",
    flags!(CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
);

pub static SPOUSE_NAME: PropertyDefinition = PropertyDefinition::string(
    "SpouseName",
    "contacts:SpouseName",
    flags!(CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
);

pub static SURNAME: PropertyDefinition = PropertyDefinition::string(
    "Surname",
    "contacts:Surname",
    flags!(CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
);

pub static WEDDING_ANNIVERSARY: PropertyDefinition = PropertyDefinition::date_time(
    "WeddingAnniversary",
    "contacts:WeddingAnniversary",
    flags!(CAN_SET, CAN_UPDATE, CAN_DELETE, CAN_FIND),
    Exchange2007_SP1,
);

pub static HAS_PICTURE: PropertyDefinition = PropertyDefinition::boolean(
    "HasPicture",
    "contacts:HasPicture",
    flags!(CAN_FIND),
    Exchange2010,
);

macro_rules! indexed {
    ($name:ident, $uri:literal, $index:literal, $dictionary:expr) => {
        pub static $name: IndexedPropertyDefinition =
            IndexedPropertyDefinition::new($uri, $index, $dictionary, Exchange2007_SP1);
    };
}

indexed!(EMAIL_ADDRESS_1, "contacts:EmailAddress", "EmailAddress1", &EMAIL_ADDRESSES);
indexed!(EMAIL_ADDRESS_2, "contacts:EmailAddress", "EmailAddress2", &EMAIL_ADDRESSES);
indexed!(EMAIL_ADDRESS_3, "contacts:EmailAddress", "EmailAddress3", &EMAIL_ADDRESSES);

indexed!(BUSINESS_PHONE, "contacts:PhoneNumber", "BusinessPhone", &PHONE_NUMBERS);
indexed!(BUSINESS_PHONE_2, "contacts:PhoneNumber", "BusinessPhone2", &PHONE_NUMBERS);
indexed!(BUSINESS_FAX, "contacts:PhoneNumber", "BusinessFax", &PHONE_NUMBERS);
indexed!(HOME_PHONE, "contacts:PhoneNumber", "HomePhone", &PHONE_NUMBERS);
indexed!(HOME_PHONE_2, "contacts:PhoneNumber", "HomePhone2", &PHONE_NUMBERS);
indexed!(HOME_FAX, "contacts:PhoneNumber", "HomeFax", &PHONE_NUMBERS);
indexed!(MOBILE_PHONE, "contacts:PhoneNumber", "MobilePhone", &PHONE_NUMBERS);
indexed!(PAGER, "contacts:PhoneNumber", "Pager", &PHONE_NUMBERS);
indexed!(PRIMARY_PHONE, "contacts:PhoneNumber", "PrimaryPhone", &PHONE_NUMBERS);

indexed!(IM_ADDRESS_1, "contacts:ImAddress", "ImAddress1", &IM_ADDRESSES);
indexed!(IM_ADDRESS_2, "contacts:ImAddress", "ImAddress2", &IM_ADDRESSES);
indexed!(IM_ADDRESS_3, "contacts:ImAddress", "ImAddress3", &IM_ADDRESSES);

pub static CONTACT_PROPERTIES: PropertyGroup = PropertyGroup {
    name: "Contact",
    registrations: &[
        Registration::Property(&FILE_AS),
        Registration::Property(&FILE_AS_MAPPING),
        Registration::Property(&DISPLAY_NAME),
        Registration::Property(&GIVEN_NAME),
        Registration::Property(&INITIALS),
        Registration::Property(&MIDDLE_NAME),
        Registration::Property(&NICK_NAME),
        Registration::Property(&COMPANY_NAME),
        Registration::Property(&EMAIL_ADDRESSES),
        Registration::Property(&PHONE_NUMBERS),
        Registration::Property(&ASSISTANT_NAME),
        Registration::Property(&BIRTHDAY),
        Registration::Property(&BUSINESS_HOME_PAGE),
        Registration::Property(&CHILDREN),
        Registration::Property(&COMPANIES),
        Registration::Property(&CONTACT_SOURCE),
        Registration::Property(&DEPARTMENT),
        Registration::Property(&GENERATION),
        Registration::Property(&IM_ADDRESSES),
        Registration::Property(&JOB_TITLE),
        Registration::Property(&MANAGER),
        Registration::Property(&MILEAGE),
        Registration::Property(&OFFICE_LOCATION),
        Registration::Property(&PROFESSION),
        Registration::Property(&SPOUSE_NAME),
        Registration::Property(&SURNAME),
        Registration::Property(&WEDDING_ANNIVERSARY),
        Registration::Property(&HAS_PICTURE),
        Registration::Indexed(&EMAIL_ADDRESS_1),
        Registration::Indexed(&EMAIL_ADDRESS_2),
        Registration::Indexed(&EMAIL_ADDRESS_3),
        Registration::Indexed(&BUSINESS_PHONE),
        Registration::Indexed(&BUSINESS_PHONE_2),
        Registration::Indexed(&BUSINESS_FAX),
        Registration::Indexed(&HOME_PHONE),
        Registration::Indexed(&HOME_PHONE_2),
        Registration::Indexed(&HOME_FAX),
        Registration::Indexed(&MOBILE_PHONE),
        Registration::Indexed(&PAGER),
        Registration::Indexed(&PRIMARY_PHONE),
        Registration::Indexed(&IM_ADDRESS_1),
        Registration::Indexed(&IM_ADDRESS_2),
        Registration::Indexed(&IM_ADDRESS_3),
    ],
    declared: &[],
};

pub static CONTACT_SCHEMA: EntitySchema = EntitySchema {
    name: "ContactSchema",
    xml_element_name: "Contact",
    kind: EntityKind::Item,
    id_property: &item::ID,
    groups: &[&item::ITEM_PROPERTIES, &CONTACT_PROPERTIES],
};
