/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use crate::{
    xml::{XmlElement, XmlWriter},
    Error,
};

/// Assert the expected result of XML serialization.
pub fn assert_serialized_content<F>(write: F, expected_xml_content: &str)
where
    F: FnOnce(&mut XmlWriter) -> Result<(), Error>,
{
    let mut writer = XmlWriter::new();
    write(&mut writer).unwrap();

    // Read the contents of the `Writer`'s buffer.
    let actual_xml_content = writer.into_string().unwrap();

    assert_eq!(actual_xml_content, expected_xml_content);
}

/// Parse an XML fixture into an element tree.
pub fn parse_element(content: &str) -> XmlElement {
    XmlElement::parse(content.as_bytes()).unwrap()
}
