/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use crate::{
    property_set::PropertySet,
    request::{
        parse_folders, parse_response_messages, required_payload, FoldersElement,
        MessagesResponse, ResponseMessage, ServiceRequest,
    },
    schema::SchemaRegistry,
    service_object::Folder,
    version::ExchangeVersion,
    wrapper::FolderIdWrapperList,
    xml::{XmlNamespace, XmlWriter},
    Error,
};

/// A request to get information on one or more folders.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/getfolder>
#[derive(Debug)]
pub struct GetFolder<'a> {
    pub registry: &'a SchemaRegistry,

    /// The properties to include in the response for each folder.
    pub property_set: PropertySet,

    pub folder_ids: FolderIdWrapperList<'a>,
}

impl ServiceRequest for GetFolder<'_> {
    type Response = Vec<ResponseMessage<Vec<Folder>>>;
    type ResponseBody = MessagesResponse<FoldersElement>;

    const NAME: &'static str = "GetFolder";
    const RESPONSE_NAME: &'static str = "GetFolderResponse";

    fn validate(&self, version: ExchangeVersion) -> Result<(), Error> {
        if self.folder_ids.is_empty() {
            return Err(Error::InvalidArgument {
                name: "folder_ids",
                reason: "at least one folder must be requested",
            });
        }

        self.property_set.validate(version, false)
    }

    fn write_elements(&self, writer: &mut XmlWriter, _: ExchangeVersion) -> Result<(), Error> {
        self.property_set.write_xml(writer, "FolderShape")?;
        self.folder_ids
            .write_xml(writer, XmlNamespace::Messages, "FolderIds")
    }

    fn parse_response(&self, body: Self::ResponseBody) -> Result<Self::Response, Error> {
        parse_response_messages(body, |folders| {
            let folders = required_payload(folders)?;
            parse_folders(self.registry, &folders.0, |schema| {
                self.property_set.requested_properties(schema, false)
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::ServiceConfig,
        id::{DistinguishedFolderId, FolderId},
        request::{build_request_document, parse_response_document},
        schemas::folder,
    };

    #[test]
    fn serialize_get_folder() {
        let registry = SchemaRegistry::standard().expect("standard schemas should be consistent");
        let mut folder_ids = FolderIdWrapperList::new();
        folder_ids.add_id(DistinguishedFolderId::new("msgfolderroot"));

        let request = GetFolder {
            registry: &registry,
            property_set: PropertySet::id_only().with(&folder::DISPLAY_NAME),
            folder_ids,
        };

        let document = build_request_document(&request, &ServiceConfig::default())
            .expect("document should be built");

        let expected = r#"<soap:Body><m:GetFolder><m:FolderShape><t:BaseShape>IdOnly</t:BaseShape><t:AdditionalProperties><t:FieldURI FieldURI="folder:DisplayName"/></t:AdditionalProperties></m:FolderShape><m:FolderIds><t:DistinguishedFolderId Id="msgfolderroot"/></m:FolderIds></m:GetFolder></soap:Body>"#;
        assert!(String::from_utf8_lossy(&document).contains(expected));
    }

    #[test]
    fn deserialize_get_folder_response() {
        let registry = SchemaRegistry::standard().expect("standard schemas should be consistent");
        let mut folder_ids = FolderIdWrapperList::new();
        folder_ids.add_id(DistinguishedFolderId::new("calendar"));
        folder_ids.add_id(DistinguishedFolderId::new("inbox"));

        let request = GetFolder {
            registry: &registry,
            property_set: PropertySet::id_only().with(&folder::DISPLAY_NAME),
            folder_ids,
        };

        let document = r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/"><s:Body><m:GetFolderResponse xmlns:m="http://schemas.microsoft.com/exchange/services/2006/messages" xmlns:t="http://schemas.microsoft.com/exchange/services/2006/types"><m:ResponseMessages><m:GetFolderResponseMessage ResponseClass="Success"><m:ResponseCode>NoError</m:ResponseCode><m:Folders><t:CalendarFolder><t:FolderId Id="AQMkAD=" ChangeKey="AgAAAB"/></t:CalendarFolder></m:Folders></m:GetFolderResponseMessage><m:GetFolderResponseMessage ResponseClass="Success"><m:ResponseCode>NoError</m:ResponseCode><m:Folders><t:Folder><t:FolderId Id="AQMkAE="/><t:DisplayName>Inbox</t:DisplayName></t:Folder></m:Folders></m:GetFolderResponseMessage></m:ResponseMessages></m:GetFolderResponse></s:Body></s:Envelope>"#;

        let messages = parse_response_document(&request, document.as_bytes())
            .expect("response should be parsed");
        assert_eq!(messages.len(), 2);

        let calendar = &messages[0].payload.as_ref().expect("folders should be present")[0];
        assert_eq!(calendar.schema().name(), "CalendarFolderSchema");
        assert_eq!(
            calendar.id(),
            Some(&FolderId::new("AQMkAD=").with_change_key("AgAAAB"))
        );

        // The display name was requested but not returned, so it is known to
        // be empty.
        assert!(matches!(calendar.get(&folder::DISPLAY_NAME), Ok(None)));

        let inbox = &messages[1].payload.as_ref().expect("folders should be present")[0];
        assert_eq!(
            inbox
                .get(&folder::DISPLAY_NAME)
                .expect("display name was requested")
                .and_then(|value| value.as_str()),
            Some("Inbox")
        );
    }
}
