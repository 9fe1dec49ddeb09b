/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::Deserialize;

use crate::{
    request::{MessagePayload, ResponseMessage, ServiceRequest},
    value::DateTime,
    version::ExchangeVersion,
    xml::{XmlNamespace, XmlWriter},
    Error,
};

/// The kinds of identifier a unified group can be designated by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnifiedGroupIdentityType {
    SmtpAddress,
    LegacyDn,
    ExternalDirectoryObjectId,
}

impl UnifiedGroupIdentityType {
    pub fn as_str(self) -> &'static str {
        match self {
            UnifiedGroupIdentityType::SmtpAddress => "SmtpAddress",
            UnifiedGroupIdentityType::LegacyDn => "LegacyDn",
            UnifiedGroupIdentityType::ExternalDirectoryObjectId => "ExternalDirectoryObjectId",
        }
    }
}

/// A unified (Microsoft 365) group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnifiedGroupIdentity {
    pub identity_type: UnifiedGroupIdentityType,
    pub value: String,
}

impl UnifiedGroupIdentity {
    pub fn new(identity_type: UnifiedGroupIdentityType, value: impl Into<String>) -> Self {
        Self {
            identity_type,
            value: value.into(),
        }
    }
}

/// The number of unseen items reported by the server.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub struct UnseenCount(u32);

impl MessagePayload for UnseenCount {
    const ELEMENT_NAME: Option<&'static str> = Some("UnseenCount");
}

/// A request for the number of items of a unified group the user hasn't seen
/// since they last visited it.
#[derive(Clone, Debug)]
pub struct GetUnifiedGroupUnseenCount {
    pub group_identity: UnifiedGroupIdentity,
    pub last_visited_time_utc: DateTime,
}

impl ServiceRequest for GetUnifiedGroupUnseenCount {
    type Response = ResponseMessage<u32>;
    type ResponseBody = ResponseMessage<UnseenCount>;

    const NAME: &'static str = "GetUnifiedGroupUnseenCount";
    const RESPONSE_NAME: &'static str = "GetUnifiedGroupUnseenCountResponse";

    fn minimum_version(&self) -> ExchangeVersion {
        ExchangeVersion::Exchange2015
    }

    fn validate(&self, _: ExchangeVersion) -> Result<(), Error> {
        if self.group_identity.value.is_empty() {
            return Err(Error::InvalidArgument {
                name: "group_identity",
                reason: "group identifier must not be empty",
            });
        }

        Ok(())
    }

    fn write_elements(&self, writer: &mut XmlWriter, _: ExchangeVersion) -> Result<(), Error> {
        writer.write_start(XmlNamespace::Messages, "GroupIdentity", &[])?;
        writer.write_text_element(
            XmlNamespace::Types,
            "Type",
            self.group_identity.identity_type.as_str(),
        )?;
        writer.write_text_element(XmlNamespace::Types, "Value", &self.group_identity.value)?;
        writer.write_end(XmlNamespace::Messages, "GroupIdentity")?;

        writer.write_text_element(
            XmlNamespace::Messages,
            "LastVisitedTimeUtc",
            &self.last_visited_time_utc.to_wire_string()?,
        )
    }

    /// The response carries a single message, directly in the response
    /// element.
    fn parse_response(&self, body: Self::ResponseBody) -> Result<Self::Response, Error> {
        body.try_map(|count| Ok(count.map_or(0, |UnseenCount(count)| count)))
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;
    use crate::{
        config::ServiceConfig,
        request::{build_request_document, parse_response_document},
    };

    fn request() -> GetUnifiedGroupUnseenCount {
        GetUnifiedGroupUnseenCount {
            group_identity: UnifiedGroupIdentity::new(
                UnifiedGroupIdentityType::SmtpAddress,
                "team@example.com",
            ),
            last_visited_time_utc: datetime!(2024-05-01 08:30 UTC).into(),
        }
    }

    #[test]
    fn serialize_get_unified_group_unseen_count() {
        let config = ServiceConfig::new(ExchangeVersion::Exchange2016);
        let document =
            build_request_document(&request(), &config).expect("document should be built");

        let expected = r#"<m:GetUnifiedGroupUnseenCount><m:GroupIdentity><t:Type>SmtpAddress</t:Type><t:Value>team@example.com</t:Value></m:GroupIdentity><m:LastVisitedTimeUtc>2024-05-01T08:30:00Z</m:LastVisitedTimeUtc></m:GetUnifiedGroupUnseenCount>"#;
        assert!(String::from_utf8_lossy(&document).contains(expected));
    }

    #[test]
    fn older_servers_do_not_know_unified_groups() {
        let config = ServiceConfig::new(ExchangeVersion::Exchange2013_SP1);

        assert!(matches!(
            build_request_document(&request(), &config),
            Err(Error::RequestVersionMismatch {
                request: "GetUnifiedGroupUnseenCount",
                required: ExchangeVersion::Exchange2015,
                ..
            })
        ));
    }

    #[test]
    fn deserialize_unseen_count() {
        let document = r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/"><s:Body><GetUnifiedGroupUnseenCountResponse ResponseClass="Success" xmlns="http://schemas.microsoft.com/exchange/services/2006/messages"><ResponseCode>NoError</ResponseCode><UnseenCount>7</UnseenCount></GetUnifiedGroupUnseenCountResponse></s:Body></s:Envelope>"#;

        let message = parse_response_document(&request(), document.as_bytes())
            .expect("response should be parsed");
        assert!(message.is_success());
        assert_eq!(message.payload, Some(7));
    }

    #[test]
    fn invalid_unseen_count_fails_deserialization() {
        let document = r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/"><s:Body><GetUnifiedGroupUnseenCountResponse ResponseClass="Success"><UnseenCount>seven</UnseenCount></GetUnifiedGroupUnseenCountResponse></s:Body></s:Envelope>"#;

        assert!(matches!(
            parse_response_document(&request(), document.as_bytes()),
            Err(Error::Deserialize(_))
        ));
    }

    #[test]
    fn missing_unseen_count_is_zero() {
        let document = r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/"><s:Body><GetUnifiedGroupUnseenCountResponse ResponseClass="Success"><ResponseCode>NoError</ResponseCode></GetUnifiedGroupUnseenCountResponse></s:Body></s:Envelope>"#;

        let message = parse_response_document(&request(), document.as_bytes())
            .expect("response should be parsed");
        assert_eq!(message.payload, Some(0));
    }
}
