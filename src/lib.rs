/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Typed property schemas for Exchange Web Services entities.
//!
//! Every EWS entity (items, folders, appointments, contacts, ...) is described
//! by a [`Schema`]: an ordered set of [`PropertyDefinition`]s, each of which
//! knows its XML element name, its field URI, what callers may do with it and
//! which server version introduced it. Schemas are assembled from static
//! [`PropertyGroup`]s and collected into a [`SchemaRegistry`], which also
//! checks that no two definitions claim the same wire identity.
//!
//! On top of the schemas, this crate provides a property bag for entity
//! instances ([`Item`], [`Folder`]), wrappers letting requests accept either an
//! identifier or a live object, and the SOAP plumbing needed to build requests
//! and parse responses for a handful of operations.

use thiserror::Error;

pub mod complex;
pub mod config;
pub mod id;
pub mod json;
pub mod property;
pub mod property_set;
pub mod request;
pub mod schema;
pub mod schemas;
pub mod service_object;
pub mod value;
pub mod version;
pub mod wrapper;
pub mod xml;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::{ConnectingIdType, ImpersonatedUserId, ServiceConfig};
pub use id::{BaseFolderId, ConversationId, DistinguishedFolderId, FolderId, ItemId};
pub use property::{
    IndexedPropertyDefinition, PropertyDefinition, PropertyDefinitionFlags, PropertyKind,
};
pub use property_set::{BasePropertySet, PropertyPath, PropertySet};
pub use schema::{EntityKind, EntitySchema, PropertyGroup, Registration, Schema, SchemaRegistry};
pub use service_object::{Folder, Item, ServiceObject};
pub use value::{ComplexProperty, DateTime, PropertyValue};
pub use version::ExchangeVersion;
pub use wrapper::{FolderIdWrapper, FolderIdWrapperList, ItemIdWrapper, ItemIdWrapperList};

/// Errors raised while building schemas, manipulating entities or exchanging
/// requests with an Exchange server.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to process XML document")]
    Xml(#[from] quick_xml::Error),

    #[error("failed to deserialize response at `{}`", .0.path())]
    Deserialize(#[from] serde_path_to_error::Error<quick_xml::DeError>),

    #[error("malformed XML attribute")]
    XmlAttribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("failed to write XML output")]
    Io(#[from] std::io::Error),

    #[error("an error occurred while (de)serializing JSON")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse configuration at `{}`", .0.path())]
    Config(#[from] serde_path_to_error::Error<serde_json::Error>),

    #[error("failed to parse date-time value")]
    DateTimeParse(#[from] time::error::Parse),

    #[error("failed to format date-time value")]
    DateTimeFormat(#[from] time::error::Format),

    /// Two distinct property definitions share a field URI.
    #[error("field URI `{uri}` is claimed by both `{first}` and `{second}`")]
    DuplicateFieldUri {
        uri: &'static str,
        first: &'static str,
        second: &'static str,
    },

    /// Two distinct indexed property definitions share a URI and index.
    #[error("indexed field `{uri}` with index `{index}` is declared more than once")]
    DuplicateIndexedProperty {
        uri: &'static str,
        index: &'static str,
    },

    /// A schema registers two properties with the same element name.
    #[error("schema `{schema}` registers element `{element}` more than once")]
    DuplicatePropertyName {
        schema: &'static str,
        element: &'static str,
    },

    /// An entity without a server-assigned identifier was used where one is
    /// required.
    #[error("{entity} has not been saved and has no identifier")]
    ServiceObjectIsNew { entity: &'static str },

    /// A property was used with an entity whose schema does not contain it.
    #[error("property `{property}` is not part of schema `{schema}`")]
    InvalidPropertyForSchema {
        property: &'static str,
        schema: &'static str,
    },

    /// An entity was constructed from a schema of the wrong kind.
    #[error("schema `{schema}` does not describe {expected} entities")]
    WrongEntityKind {
        schema: &'static str,
        expected: &'static str,
    },

    #[error("property `{0}` must be loaded or assigned before it can be accessed")]
    MustLoadOrAssignPropertyBeforeAccess(&'static str),

    #[error("property `{0}` is read-only")]
    PropertyIsReadOnly(&'static str),

    #[error("property `{0}` cannot be updated")]
    PropertyCannotBeUpdated(&'static str),

    #[error("property `{0}` cannot be deleted")]
    PropertyCannotBeDeleted(&'static str),

    #[error("invalid value for property `{property}`: {reason}")]
    InvalidPropertyValue {
        property: &'static str,
        reason: String,
    },

    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: &'static str,
    },

    /// A property without a field URI was requested from the server.
    #[error("property `{0}` has no field URI and cannot be requested")]
    PropertyNotRequestable(&'static str),

    #[error("property `{0}` cannot be used in find requests")]
    NonSummaryPropertyCannotBeUsed(&'static str),

    #[error("property `{property}` requires {required} but requests target {requested}")]
    PropertyVersionMismatch {
        property: &'static str,
        required: ExchangeVersion,
        requested: ExchangeVersion,
    },

    #[error("operation `{request}` requires {required} but requests target {requested}")]
    RequestVersionMismatch {
        request: &'static str,
        required: ExchangeVersion,
        requested: ExchangeVersion,
    },

    #[error("unknown Exchange server version `{0}`")]
    UnknownServerVersion(String),

    /// The server answered with a SOAP fault.
    #[error("request failed with fault {code}: {message}")]
    RequestFault { code: String, message: String },

    #[error("unexpected response from server: {0}")]
    UnexpectedResponse(String),
}

impl Error {
    /// Whether this error reveals a defect in the static schema tables or in
    /// how this crate is being driven, as opposed to a condition a caller can
    /// recover from.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Error::DuplicateFieldUri { .. }
                | Error::DuplicateIndexedProperty { .. }
                | Error::DuplicatePropertyName { .. }
                | Error::ServiceObjectIsNew { .. }
                | Error::InvalidPropertyForSchema { .. }
                | Error::WrongEntityKind { .. }
        )
    }
}
