/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::Deserialize;

use crate::{
    version::ExchangeVersion,
    xml::{XmlNamespace, XmlWriter},
    Error,
};

/// The version requests target when none is configured.
///
/// Exchange 2007 SP1 is understood by every server version we support.
pub const DEFAULT_SERVER_VERSION: ExchangeVersion = ExchangeVersion::Exchange2007_SP1;

/// How requests are built for a given Exchange server.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ServiceConfig {
    #[serde(default = "default_server_version")]
    pub requested_server_version: ExchangeVersion,

    /// The user to act as, when the account making requests impersonates
    /// another one.
    #[serde(default)]
    pub impersonated_user_id: Option<ImpersonatedUserId>,
}

fn default_server_version() -> ExchangeVersion {
    DEFAULT_SERVER_VERSION
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            requested_server_version: DEFAULT_SERVER_VERSION,
            impersonated_user_id: None,
        }
    }
}

impl ServiceConfig {
    pub fn new(requested_server_version: ExchangeVersion) -> Self {
        Self {
            requested_server_version,
            ..Default::default()
        }
    }

    pub fn with_impersonation(mut self, user: ImpersonatedUserId) -> Self {
        self.impersonated_user_id = Some(user);
        self
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json(content: &str) -> Result<Self, Error> {
        let de = &mut serde_json::Deserializer::from_str(content);

        // `serde_path_to_error` tells us which field a malformed value is in.
        let config: ServiceConfig = serde_path_to_error::deserialize(de)?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        match &self.impersonated_user_id {
            Some(user) => user.validate(),
            None => Ok(()),
        }
    }
}

/// The kinds of identifier an impersonated user can be designated by.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/connectingsid>
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub enum ConnectingIdType {
    PrincipalName,
    SID,
    SmtpAddress,
}

impl ConnectingIdType {
    pub fn as_str(self) -> &'static str {
        match self {
            ConnectingIdType::PrincipalName => "PrincipalName",
            ConnectingIdType::SID => "SID",
            ConnectingIdType::SmtpAddress => "SmtpAddress",
        }
    }
}

/// The user requests are made on behalf of.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/exchangeimpersonation>
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ImpersonatedUserId {
    pub id_type: ConnectingIdType,
    pub id: String,
}

impl ImpersonatedUserId {
    pub fn new(id_type: ConnectingIdType, id: impl Into<String>) -> Result<Self, Error> {
        let user = Self {
            id_type,
            id: id.into(),
        };
        user.validate()?;

        Ok(user)
    }

    fn validate(&self) -> Result<(), Error> {
        if self.id.is_empty() {
            return Err(Error::InvalidArgument {
                name: "id",
                reason: "impersonated user identifier must not be empty",
            });
        }

        Ok(())
    }

    /// Writes the `ExchangeImpersonation` SOAP header.
    pub(crate) fn write_header(&self, writer: &mut XmlWriter) -> Result<(), Error> {
        writer.write_start(XmlNamespace::Types, "ExchangeImpersonation", &[])?;
        writer.write_start(XmlNamespace::Types, "ConnectingSID", &[])?;
        writer.write_text_element(XmlNamespace::Types, self.id_type.as_str(), &self.id)?;
        writer.write_end(XmlNamespace::Types, "ConnectingSID")?;
        writer.write_end(XmlNamespace::Types, "ExchangeImpersonation")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_serialized_content;

    #[test]
    fn empty_config_uses_defaults() {
        let config = ServiceConfig::from_json("{}").expect("empty config should parse");
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(
            config.requested_server_version,
            ExchangeVersion::Exchange2007_SP1
        );
    }

    #[test]
    fn parse_impersonation() {
        let config = ServiceConfig::from_json(
            r#"{
                "requested_server_version": "Exchange2013",
                "impersonated_user_id": { "id_type": "SmtpAddress", "id": "alex@example.com" }
            }"#,
        )
        .expect("config should parse");

        assert_eq!(
            config,
            ServiceConfig::new(ExchangeVersion::Exchange2013).with_impersonation(
                ImpersonatedUserId::new(ConnectingIdType::SmtpAddress, "alex@example.com")
                    .expect("identifier is not empty")
            )
        );
    }

    #[test]
    fn parse_errors_name_the_field() {
        let err = ServiceConfig::from_json(r#"{ "requested_server_version": "Exchange2003" }"#)
            .expect_err("unknown version should be rejected");

        let Error::Config(err) = err else {
            panic!("expected a configuration error, got {err:?}");
        };
        assert_eq!(err.path().to_string(), "requested_server_version");
    }

    #[test]
    fn impersonated_id_must_not_be_empty() {
        assert!(matches!(
            ImpersonatedUserId::new(ConnectingIdType::SID, ""),
            Err(Error::InvalidArgument { name: "id", .. })
        ));

        let err = ServiceConfig::from_json(
            r#"{ "impersonated_user_id": { "id_type": "PrincipalName", "id": "" } }"#,
        )
        .expect_err("empty identifier should be rejected");
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }

    #[test]
    fn serialize_impersonation_header() {
        let user = ImpersonatedUserId::new(ConnectingIdType::PrincipalName, "alex@corp")
            .expect("identifier is not empty");

        assert_serialized_content(
            |writer| user.write_header(writer),
            "<t:ExchangeImpersonation><t:ConnectingSID><t:PrincipalName>alex@corp</t:PrincipalName></t:ConnectingSID></t:ExchangeImpersonation>",
        );
    }
}
