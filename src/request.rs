/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! SOAP requests to an EWS endpoint and the parsing of their responses.
//!
//! Sending the documents built here is left to the caller's HTTP stack.

pub mod create_item;
pub mod delete_item;
pub mod find_item;
pub mod get_folder;
pub mod get_item;
pub mod get_unified_group_unseen_count;

use std::{fmt, marker::PhantomData, sync::Arc};

use serde::{
    de::{self, DeserializeOwned, IgnoredAny, MapAccess, Visitor},
    Deserialize, Deserializer,
};

use crate::{
    config::ServiceConfig,
    property::PropertyDefinition,
    schema::{Schema, SchemaRegistry},
    service_object::{Folder, Item},
    version::ExchangeVersion,
    xml::{XmlElement, XmlNamespace, XmlWriter, MESSAGES_NS_URI, SOAP_NS_URI, TYPES_NS_URI},
    Error,
};

pub use self::{
    create_item::{CreateItem, MessageDisposition, SendMeetingInvitations},
    delete_item::{AffectedTaskOccurrences, DeleteItem, DeleteType, SendMeetingCancellations},
    find_item::{FindItem, FindItemResults, ItemTraversal, RootFolder},
    get_folder::GetFolder,
    get_item::GetItem,
    get_unified_group_unseen_count::{
        GetUnifiedGroupUnseenCount, UnifiedGroupIdentity, UnifiedGroupIdentityType, UnseenCount,
    },
};

/// An EWS operation which can be sent to a server.
pub trait ServiceRequest {
    /// The data the server answers with.
    type Response;

    /// The fixed shape of the response element, as read from the document.
    type ResponseBody: DeserializeOwned;

    /// The name of the request element, e.g. `GetItem`.
    const NAME: &'static str;

    /// The name of the response element, e.g. `GetItemResponse`.
    const RESPONSE_NAME: &'static str;

    /// The oldest server version supporting the operation.
    fn minimum_version(&self) -> ExchangeVersion {
        ExchangeVersion::Exchange2007_SP1
    }

    /// Checks the request can be sent to a server speaking `version`.
    fn validate(&self, _version: ExchangeVersion) -> Result<(), Error> {
        Ok(())
    }

    /// Attributes of the request element.
    fn attributes(&self) -> Vec<(&'static str, &'static str)> {
        Vec::new()
    }

    /// Writes the content of the request element.
    fn write_elements(&self, writer: &mut XmlWriter, version: ExchangeVersion)
        -> Result<(), Error>;

    /// Turns the response element into the operation's result, loading any
    /// entities it carries.
    fn parse_response(&self, body: Self::ResponseBody) -> Result<Self::Response, Error>;
}

/// Builds the SOAP document for `request`.
pub fn build_request_document<R>(request: &R, config: &ServiceConfig) -> Result<Vec<u8>, Error>
where
    R: ServiceRequest,
{
    let version = config.requested_server_version;
    if version < request.minimum_version() {
        return Err(Error::RequestVersionMismatch {
            request: R::NAME,
            required: request.minimum_version(),
            requested: version,
        });
    }

    config.validate()?;
    request.validate(version)?;

    let mut writer = XmlWriter::new();
    writer.write_declaration()?;
    writer.write_start(
        XmlNamespace::Soap,
        "Envelope",
        &[
            ("xmlns:soap", SOAP_NS_URI),
            ("xmlns:t", TYPES_NS_URI),
            ("xmlns:m", MESSAGES_NS_URI),
        ],
    )?;

    writer.write_start(XmlNamespace::Soap, "Header", &[])?;
    writer.write_empty(
        XmlNamespace::Types,
        "RequestServerVersion",
        &[("Version", version.as_str())],
    )?;
    if let Some(user) = &config.impersonated_user_id {
        user.write_header(&mut writer)?;
    }
    writer.write_end(XmlNamespace::Soap, "Header")?;

    writer.write_start(XmlNamespace::Soap, "Body", &[])?;
    writer.write_start(XmlNamespace::Messages, R::NAME, &request.attributes())?;
    request.write_elements(&mut writer, version)?;
    writer.write_end(XmlNamespace::Messages, R::NAME)?;
    writer.write_end(XmlNamespace::Soap, "Body")?;

    writer.write_end(XmlNamespace::Soap, "Envelope")?;

    Ok(writer.into_inner())
}

/// Parses the SOAP document the server answered `request` with.
pub fn parse_response_document<R>(request: &R, document: &[u8]) -> Result<R::Response, Error>
where
    R: ServiceRequest,
{
    let de = &mut quick_xml::de::Deserializer::from_reader(document);

    // `serde_path_to_error` reports where in the document deserialization
    // failed, rather than only the immediate error.
    let envelope: DeserializeEnvelope<R> = serde_path_to_error::deserialize(de)?;

    match envelope.body {
        EnvelopeContent::Body(body) => request.parse_response(body),
        EnvelopeContent::Fault(fault) => Err(fault.into_error()),
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase", bound = "")]
struct DeserializeEnvelope<R>
where
    R: ServiceRequest,
{
    #[serde(deserialize_with = "deserialize_body::<_, R>")]
    body: EnvelopeContent<R::ResponseBody>,

    #[serde(skip)]
    request: PhantomData<R>,
}

enum EnvelopeContent<B> {
    Body(B),
    Fault(Fault),
}

fn deserialize_body<'de, D, R>(body: D) -> Result<EnvelopeContent<R::ResponseBody>, D::Error>
where
    D: Deserializer<'de>,
    R: ServiceRequest,
{
    body.deserialize_map(BodyVisitor::<R>(PhantomData))
}

/// Reads the single element of a SOAP body: either the expected operation
/// response or a fault.
struct BodyVisitor<R>(PhantomData<R>);

impl<'de, R> Visitor<'de> for BodyVisitor<R>
where
    R: ServiceRequest,
{
    type Value = EnvelopeContent<R::ResponseBody>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a `{}` element or a SOAP fault", R::RESPONSE_NAME)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let content = match map.next_key::<String>()? {
            Some(name) if name == "Fault" => EnvelopeContent::Fault(map.next_value()?),
            Some(name) if name == R::RESPONSE_NAME => EnvelopeContent::Body(map.next_value()?),
            Some(name) => {
                return Err(de::Error::custom(format_args!(
                    "unknown element `{name}`, expected `{}`",
                    R::RESPONSE_NAME
                )))
            }
            None => return Err(de::Error::invalid_length(0, &self)),
        };

        match map.next_key::<String>()? {
            Some(name) => Err(de::Error::custom(format_args!(
                "unexpected element `{name}`"
            ))),
            None => Ok(content),
        }
    }
}

/// A SOAP fault, reporting an error in the request as a whole.
///
/// See <https://www.w3.org/TR/2000/NOTE-SOAP-20000508/#_Toc478383507>
#[derive(Clone, Debug, Deserialize)]
struct Fault {
    faultcode: String,
    faultstring: String,
    detail: Option<FaultDetail>,
}

/// EWS-specific details of a SOAP fault.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct FaultDetail {
    response_code: Option<String>,
}

impl Fault {
    fn into_error(self) -> Error {
        // The EWS response code in the detail is more useful than the qualified
        // SOAP fault code, when the server includes one.
        let code = self
            .detail
            .and_then(|detail| detail.response_code)
            .unwrap_or(self.faultcode);
        let message = self.faultstring;

        log::warn!("request failed with SOAP fault {code}: {message}");

        Error::RequestFault { code, message }
    }
}

/// The status of a single response message.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/responsemessage#attributes>
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub enum ResponseClass {
    Success,

    /// The request succeeded but the server couldn't do everything it was
    /// asked to.
    Warning,

    Error,
}

impl TryFrom<&str> for ResponseClass {
    type Error = crate::Error;

    fn try_from(value: &str) -> Result<Self, crate::Error> {
        match value {
            "Success" => Ok(ResponseClass::Success),
            "Warning" => Ok(ResponseClass::Warning),
            "Error" => Ok(ResponseClass::Error),
            _ => Err(crate::Error::UnexpectedResponse(format!(
                "unknown response class `{value}`"
            ))),
        }
    }
}

/// Content a response message carries in a child element of its own.
pub trait MessagePayload: DeserializeOwned {
    /// The name of that element, or `None` if messages carry no payload.
    const ELEMENT_NAME: Option<&'static str>;
}

impl MessagePayload for () {
    const ELEMENT_NAME: Option<&'static str> = None;
}

/// The `Items` element of a response message.
#[derive(Clone, Debug, Deserialize)]
pub struct ItemsElement(XmlElement);

impl MessagePayload for ItemsElement {
    const ELEMENT_NAME: Option<&'static str> = Some("Items");
}

/// The `Folders` element of a response message.
#[derive(Clone, Debug, Deserialize)]
pub struct FoldersElement(XmlElement);

impl MessagePayload for FoldersElement {
    const ELEMENT_NAME: Option<&'static str> = Some("Folders");
}

/// Takes the payload of a successful message, which the server must have
/// sent.
pub(crate) fn required_payload<P>(payload: Option<P>) -> Result<P, Error>
where
    P: MessagePayload,
{
    payload.ok_or_else(|| {
        Error::UnexpectedResponse(format!(
            "response message is missing `{}`",
            P::ELEMENT_NAME.unwrap_or_default()
        ))
    })
}

/// The outcome of the request for one of the entities an operation acted
/// on.
#[derive(Clone, Debug)]
pub struct ResponseMessage<T> {
    pub class: ResponseClass,

    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/responsecode>
    pub code: String,

    pub message_text: Option<String>,

    /// Present unless the message is an error.
    pub payload: Option<T>,
}

impl<T> ResponseMessage<T> {
    pub fn is_success(&self) -> bool {
        self.class == ResponseClass::Success
    }

    /// Converts the payload read from the document, dropping it if the message
    /// reports an error.
    pub(crate) fn try_map<U, F>(self, parse_payload: F) -> Result<ResponseMessage<U>, Error>
    where
        F: FnOnce(Option<T>) -> Result<U, Error>,
    {
        let payload = match self.class {
            ResponseClass::Error => {
                log::warn!(
                    "response message reported {}: {}",
                    self.code,
                    self.message_text.as_deref().unwrap_or_default()
                );
                None
            }
            ResponseClass::Success | ResponseClass::Warning => Some(parse_payload(self.payload)?),
        };

        Ok(ResponseMessage {
            class: self.class,
            code: self.code,
            message_text: self.message_text,
            payload,
        })
    }
}

impl<'de, P> Deserialize<'de> for ResponseMessage<P>
where
    P: MessagePayload,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(MessageVisitor(PhantomData))
    }
}

/// Reads the fields common to every response message, and the payload named
/// by `P`. The payload element's name depends on the operation, which rules
/// out a derived implementation.
struct MessageVisitor<P>(PhantomData<P>);

impl<'de, P> Visitor<'de> for MessageVisitor<P>
where
    P: MessagePayload,
{
    type Value = ResponseMessage<P>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an EWS response message")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut class = None;
        let mut code = None;
        let mut message_text = None;
        let mut payload = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "@ResponseClass" => class = Some(map.next_value()?),
                "ResponseCode" => code = Some(map.next_value()?),
                "MessageText" => message_text = Some(map.next_value()?),
                name if P::ELEMENT_NAME == Some(name) => payload = Some(map.next_value()?),
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(ResponseMessage {
            class: class
                .ok_or_else(|| <A::Error as de::Error>::missing_field("@ResponseClass"))?,
            code: code.unwrap_or_else(|| "NoError".to_string()),
            message_text,
            payload,
        })
    }
}

/// The response element of an operation acting on several entities, holding
/// one message per entity.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/responsemessages>
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "PascalCase", bound(deserialize = "P: MessagePayload"))]
pub struct MessagesResponse<P> {
    #[serde(deserialize_with = "deserialize_messages")]
    response_messages: Vec<ResponseMessage<P>>,
}

fn deserialize_messages<'de, D, P>(messages: D) -> Result<Vec<ResponseMessage<P>>, D::Error>
where
    D: Deserializer<'de>,
    P: MessagePayload,
{
    messages.deserialize_map(MessagesVisitor(PhantomData))
}

/// Reads every message of a `ResponseMessages` element, whatever the
/// operation names them.
struct MessagesVisitor<P>(PhantomData<P>);

impl<'de, P> Visitor<'de> for MessagesVisitor<P>
where
    P: MessagePayload,
{
    type Value = Vec<ResponseMessage<P>>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a list of EWS response messages")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut messages = Vec::new();
        while let Some(key) = map.next_key::<String>()? {
            if key.starts_with('@') {
                map.next_value::<IgnoredAny>()?;
            } else {
                messages.push(map.next_value()?);
            }
        }

        Ok(messages)
    }
}

/// Converts the payload of every message of `response`.
pub(crate) fn parse_response_messages<P, T, F>(
    response: MessagesResponse<P>,
    parse_payload: F,
) -> Result<Vec<ResponseMessage<T>>, Error>
where
    F: Fn(Option<P>) -> Result<T, Error>,
{
    response
        .response_messages
        .into_iter()
        .map(|message| message.try_map(&parse_payload))
        .collect()
}

/// Looks up the schema for an entity element of a response, falling back to
/// `fallback` for entity types without a schema of their own.
fn schema_for_entity(
    registry: &SchemaRegistry,
    element: &XmlElement,
    fallback: &str,
) -> Result<Arc<Schema>, Error> {
    registry
        .schema_for_element(&element.name)
        .or_else(|| {
            log::debug!(
                "no schema for `{}`, loading it as `{fallback}`",
                element.name
            );
            registry.schema_for_element(fallback)
        })
        .ok_or_else(|| {
            Error::UnexpectedResponse(format!("no schema for entity `{}`", element.name))
        })
}

/// Loads the items found in an `Items` element.
fn parse_items<F>(
    registry: &SchemaRegistry,
    items: &XmlElement,
    requested: F,
) -> Result<Vec<Item>, Error>
where
    F: Fn(&Schema) -> Vec<&'static PropertyDefinition>,
{
    items
        .children
        .iter()
        .map(|element| {
            let schema = schema_for_entity(registry, element, "Item")?;
            let requested = requested(&schema);
            Item::from_xml(schema, element, &requested)
        })
        .collect()
}

/// Loads the folders found in a `Folders` element.
fn parse_folders<F>(
    registry: &SchemaRegistry,
    folders: &XmlElement,
    requested: F,
) -> Result<Vec<Folder>, Error>
where
    F: Fn(&Schema) -> Vec<&'static PropertyDefinition>,
{
    folders
        .children
        .iter()
        .map(|element| {
            let schema = schema_for_entity(registry, element, "Folder")?;
            let requested = requested(&schema);
            Folder::from_xml(schema, element, &requested)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConnectingIdType, ImpersonatedUserId};

    /// A request with no content, to check the envelope on its own.
    struct Ping {
        minimum_version: ExchangeVersion,
    }

    impl ServiceRequest for Ping {
        type Response = String;
        type ResponseBody = String;

        const NAME: &'static str = "Ping";
        const RESPONSE_NAME: &'static str = "PingResponse";

        fn minimum_version(&self) -> ExchangeVersion {
            self.minimum_version
        }

        fn write_elements(&self, _: &mut XmlWriter, _: ExchangeVersion) -> Result<(), Error> {
            Ok(())
        }

        fn parse_response(&self, body: Self::ResponseBody) -> Result<Self::Response, Error> {
            Ok(body)
        }
    }

    const PING: Ping = Ping {
        minimum_version: ExchangeVersion::Exchange2007_SP1,
    };

    #[test]
    fn serialize_envelope() {
        let config = ServiceConfig::new(ExchangeVersion::Exchange2013);
        let document = build_request_document(&PING, &config).expect("document should be built");

        let expected = r#"<?xml version="1.0" encoding="utf-8"?><soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/" xmlns:t="http://schemas.microsoft.com/exchange/services/2006/types" xmlns:m="http://schemas.microsoft.com/exchange/services/2006/messages"><soap:Header><t:RequestServerVersion Version="Exchange2013"/></soap:Header><soap:Body><m:Ping></m:Ping></soap:Body></soap:Envelope>"#;
        assert_eq!(String::from_utf8_lossy(&document), expected);
    }

    #[test]
    fn serialize_envelope_with_impersonation() {
        let config = ServiceConfig::default().with_impersonation(
            ImpersonatedUserId::new(ConnectingIdType::SmtpAddress, "alex@example.com")
                .expect("identifier is not empty"),
        );
        let document = build_request_document(&PING, &config).expect("document should be built");
        let document = String::from_utf8_lossy(&document);

        assert!(document.contains(
            r#"<soap:Header><t:RequestServerVersion Version="Exchange2007_SP1"/><t:ExchangeImpersonation><t:ConnectingSID><t:SmtpAddress>alex@example.com</t:SmtpAddress></t:ConnectingSID></t:ExchangeImpersonation></soap:Header>"#
        ));
    }

    #[test]
    fn requests_newer_than_the_server_are_rejected() {
        let request = Ping {
            minimum_version: ExchangeVersion::Exchange2015,
        };

        let err = build_request_document(&request, &ServiceConfig::default())
            .expect_err("Exchange 2007 doesn't know the request");
        assert!(matches!(
            err,
            Error::RequestVersionMismatch {
                request: "Ping",
                required: ExchangeVersion::Exchange2015,
                requested: ExchangeVersion::Exchange2007_SP1,
            }
        ));

        let config = ServiceConfig::new(ExchangeVersion::Exchange2016);
        assert!(build_request_document(&request, &config).is_ok());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = ServiceConfig {
            impersonated_user_id: Some(ImpersonatedUserId {
                id_type: ConnectingIdType::SID,
                id: String::new(),
            }),
            ..Default::default()
        };

        assert!(matches!(
            build_request_document(&PING, &config),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn parse_response_body() {
        let document = r#"<?xml version="1.0" encoding="utf-8"?><s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/"><s:Header><h:ServerVersionInfo xmlns:h="http://schemas.microsoft.com/exchange/services/2006/types" MajorVersion="15"/></s:Header><s:Body><m:PingResponse xmlns:m="http://schemas.microsoft.com/exchange/services/2006/messages">pong</m:PingResponse></s:Body></s:Envelope>"#;

        let response = parse_response_document(&PING, document.as_bytes())
            .expect("response should be parsed");
        assert_eq!(response, "pong");
    }

    #[test]
    fn parse_fault() {
        let document = r#"<?xml version="1.0" encoding="utf-8"?><s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/"><s:Body><s:Fault><faultcode xmlns:a="http://schemas.microsoft.com/exchange/services/2006/types">a:ErrorSchemaValidation</faultcode><faultstring xml:lang="en-US">The request failed schema validation.</faultstring><detail><e:ResponseCode xmlns:e="http://schemas.microsoft.com/exchange/services/2006/errors">ErrorSchemaValidation</e:ResponseCode><e:Message xmlns:e="http://schemas.microsoft.com/exchange/services/2006/errors">The request failed schema validation.</e:Message></detail></s:Fault></s:Body></s:Envelope>"#;

        let err = parse_response_document(&PING, document.as_bytes())
            .expect_err("fault should be reported as an error");

        let Error::RequestFault { code, message } = err else {
            panic!("error should be a request fault, got: {err:?}");
        };
        assert_eq!(code, "ErrorSchemaValidation");
        assert_eq!(message, "The request failed schema validation.");
    }

    #[test]
    fn fault_without_detail_uses_fault_code() {
        let document = r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/"><s:Body><s:Fault><faultcode>s:Client</faultcode><faultstring>Bad request</faultstring></s:Fault></s:Body></s:Envelope>"#;

        let err = parse_response_document(&PING, document.as_bytes())
            .expect_err("fault should be reported as an error");
        assert!(matches!(err, Error::RequestFault { code, .. } if code == "s:Client"));
    }

    #[test]
    fn missing_response_element_fails_deserialization() {
        let document = r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/"><s:Body><m:OtherResponse/></s:Body></s:Envelope>"#;

        let err = parse_response_document(&PING, document.as_bytes())
            .expect_err("unexpected response element should fail");
        assert!(matches!(err, Error::Deserialize(_)), "got: {err:?}");

        assert!(matches!(
            parse_response_document(&PING, b"<html/>"),
            Err(Error::Deserialize(_))
        ));
    }

    #[test]
    fn parse_response_messages_by_class() {
        let response: MessagesResponse<ItemsElement> = quick_xml::de::from_str(
            r#"<m:FooResponse xmlns:m="http://schemas.microsoft.com/exchange/services/2006/messages" xmlns:t="http://schemas.microsoft.com/exchange/services/2006/types"><m:ResponseMessages><m:FooResponseMessage ResponseClass="Success"><m:ResponseCode>NoError</m:ResponseCode><m:Items><t:Message/></m:Items></m:FooResponseMessage><m:FooResponseMessage ResponseClass="Error"><m:MessageText>The specified object was not found in the store.</m:MessageText><m:ResponseCode>ErrorItemNotFound</m:ResponseCode><m:DescriptiveLinkKey>0</m:DescriptiveLinkKey><m:Items/></m:FooResponseMessage></m:ResponseMessages></m:FooResponse>"#,
        )
        .expect("messages should deserialize");

        let messages = parse_response_messages(response, |items| {
            let items = required_payload(items)?;
            Ok(items.0.children.len())
        })
        .expect("messages should be parsed");

        assert_eq!(messages.len(), 2);
        assert!(messages[0].is_success());
        assert_eq!(messages[0].payload, Some(1));

        assert_eq!(messages[1].class, ResponseClass::Error);
        assert_eq!(messages[1].code, "ErrorItemNotFound");
        assert_eq!(
            messages[1].message_text.as_deref(),
            Some("The specified object was not found in the store.")
        );
        assert!(messages[1].payload.is_none());
    }

    #[test]
    fn successful_message_without_payload_is_unexpected() {
        let response: MessagesResponse<ItemsElement> = quick_xml::de::from_str(
            r#"<FooResponse><ResponseMessages><FooResponseMessage ResponseClass="Success"/></ResponseMessages></FooResponse>"#,
        )
        .expect("messages should deserialize");

        let err = parse_response_messages(response, |items| required_payload(items).map(|_| ()))
            .expect_err("missing items should be reported");
        assert!(matches!(err, Error::UnexpectedResponse(_)));
    }

    #[test]
    fn response_class_from_str() {
        assert_eq!(
            ResponseClass::try_from("Warning").expect("class should be known"),
            ResponseClass::Warning
        );
        assert!(matches!(
            ResponseClass::try_from("Maybe"),
            Err(Error::UnexpectedResponse(_))
        ));
    }
}
