/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Writing and reading the XML documents exchanged with an EWS endpoint.
//!
//! Output is produced through [`XmlWriter`], a thin layer over
//! [`quick_xml::Writer`] which knows about the namespace prefixes EWS requests
//! use. Entity content is read into an owned [`XmlElement`] tree, which lets
//! property parsing look elements up by name. The tree can be read directly
//! from a document or, through its [`Deserialize`] implementation, as part of
//! a larger serde structure.

use std::{borrow::Cow, fmt};

use quick_xml::{
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
    Reader, Writer,
};
use serde::{
    de::{self, MapAccess, Visitor},
    Deserialize, Deserializer,
};

use crate::Error;

pub(crate) const SOAP_NS_URI: &str = "http://schemas.xmlsoap.org/soap/envelope/";
pub(crate) const TYPES_NS_URI: &str = "http://schemas.microsoft.com/exchange/services/2006/types";
pub(crate) const MESSAGES_NS_URI: &str =
    "http://schemas.microsoft.com/exchange/services/2006/messages";

/// The namespaces elements of an EWS request are written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum XmlNamespace {
    /// The SOAP envelope namespace, prefixed `soap`.
    Soap,

    /// The EWS types namespace, prefixed `t`.
    Types,

    /// The EWS messages namespace, prefixed `m`.
    Messages,

    /// No prefix.
    None,
}

impl XmlNamespace {
    pub const fn prefix(self) -> Option<&'static str> {
        match self {
            XmlNamespace::Soap => Some("soap"),
            XmlNamespace::Types => Some("t"),
            XmlNamespace::Messages => Some("m"),
            XmlNamespace::None => None,
        }
    }

    fn qualify(self, name: &str) -> Cow<'_, str> {
        match self.prefix() {
            Some(prefix) => Cow::Owned(format!("{prefix}:{name}")),
            None => Cow::Borrowed(name),
        }
    }
}

/// A sink for XML output.
pub struct XmlWriter {
    inner: Writer<Vec<u8>>,
}

impl Default for XmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl XmlWriter {
    pub fn new() -> Self {
        Self {
            inner: Writer::new(Vec::new()),
        }
    }

    /// Writes the XML declaration. All EWS examples use XML 1.0 with UTF-8.
    pub fn write_declaration(&mut self) -> Result<(), Error> {
        self.inner
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

        Ok(())
    }

    pub fn write_start(
        &mut self,
        ns: XmlNamespace,
        name: &str,
        attributes: &[(&str, &str)],
    ) -> Result<(), Error> {
        let name = ns.qualify(name);
        let start = BytesStart::new(name.as_ref()).with_attributes(attributes.iter().copied());
        self.inner.write_event(Event::Start(start))?;

        Ok(())
    }

    pub fn write_end(&mut self, ns: XmlNamespace, name: &str) -> Result<(), Error> {
        let name = ns.qualify(name);
        self.inner.write_event(Event::End(BytesEnd::new(name.as_ref())))?;

        Ok(())
    }

    /// Writes a self-closing element.
    pub fn write_empty(
        &mut self,
        ns: XmlNamespace,
        name: &str,
        attributes: &[(&str, &str)],
    ) -> Result<(), Error> {
        let name = ns.qualify(name);
        let start = BytesStart::new(name.as_ref()).with_attributes(attributes.iter().copied());
        self.inner.write_event(Event::Empty(start))?;

        Ok(())
    }

    /// Writes escaped text content.
    pub fn write_text(&mut self, text: &str) -> Result<(), Error> {
        self.inner.write_event(Event::Text(BytesText::new(text)))?;

        Ok(())
    }

    /// Writes an element containing only the given text.
    pub fn write_text_element(
        &mut self,
        ns: XmlNamespace,
        name: &str,
        text: &str,
    ) -> Result<(), Error> {
        self.write_start(ns, name, &[])?;
        self.write_text(text)?;
        self.write_end(ns, name)
    }

    /// Writes an element containing the given text, or nothing if there is
    /// no text.
    pub fn write_optional_text_element(
        &mut self,
        ns: XmlNamespace,
        name: &str,
        text: Option<&str>,
    ) -> Result<(), Error> {
        match text {
            Some(text) => self.write_text_element(ns, name, text),
            None => Ok(()),
        }
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.inner.into_inner()
    }

    pub fn into_string(self) -> Result<String, Error> {
        String::from_utf8(self.into_inner())
            .map_err(|err| Error::UnexpectedResponse(format!("non UTF-8 output: {err}")))
    }
}

/// A value which knows how to write itself as XML.
pub trait WriteXml {
    fn write_xml(&self, writer: &mut XmlWriter) -> Result<(), Error>;
}

/// An element of a parsed XML document.
///
/// Names are stored without their namespace prefix, and namespace
/// declarations are dropped from the attributes; EWS element names do not
/// collide across the namespaces a response uses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub text: String,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    /// Parses a complete document and returns its root element.
    pub fn parse(document: &[u8]) -> Result<Self, Error> {
        let mut reader = Reader::from_reader(document);
        reader.config_mut().trim_text(true);

        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root = None;
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(start) => stack.push(Self::from_start(&start)?),
                Event::Empty(start) => {
                    let element = Self::from_start(&start)?;
                    Self::attach(&mut stack, &mut root, element);
                }
                Event::Text(text) => {
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(&text.unescape()?);
                    }
                }
                Event::CData(data) => {
                    if let Some(current) = stack.last_mut() {
                        current
                            .text
                            .push_str(&String::from_utf8_lossy(&data.into_inner()));
                    }
                }
                Event::End(_) => {
                    let element = stack.pop().ok_or_else(|| {
                        Error::UnexpectedResponse("unbalanced closing tag".to_string())
                    })?;
                    Self::attach(&mut stack, &mut root, element);
                }
                Event::Eof => break,
                _ => {}
            }

            buf.clear();
        }

        if !stack.is_empty() {
            return Err(Error::UnexpectedResponse(
                "document ended before all elements were closed".to_string(),
            ));
        }

        root.ok_or_else(|| Error::UnexpectedResponse("document has no root element".to_string()))
    }

    fn from_start(start: &BytesStart) -> Result<Self, Error> {
        let mut element = XmlElement {
            name: String::from_utf8_lossy(start.local_name().as_ref()).into_owned(),
            ..Default::default()
        };

        for attribute in start.attributes() {
            let attribute = attribute?;
            if attribute.key.as_ref().starts_with(b"xmlns") {
                continue;
            }

            let key = String::from_utf8_lossy(attribute.key.local_name().as_ref()).into_owned();
            let value = attribute.unescape_value()?.into_owned();
            element.attributes.push((key, value));
        }

        Ok(element)
    }

    fn attach(stack: &mut [XmlElement], root: &mut Option<XmlElement>, element: XmlElement) {
        match stack.last_mut() {
            Some(parent) => parent.children.push(element),
            None => {
                if root.is_none() {
                    *root = Some(element);
                }
            }
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn required_attribute(&self, name: &str) -> Result<&str, Error> {
        self.attribute(name).ok_or_else(|| {
            Error::UnexpectedResponse(format!(
                "element `{}` is missing attribute `{name}`",
                self.name
            ))
        })
    }

    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|child| child.name == name)
    }

    pub fn required_child(&self, name: &str) -> Result<&XmlElement, Error> {
        self.child(name).ok_or_else(|| {
            Error::UnexpectedResponse(format!(
                "element `{}` is missing child `{name}`",
                self.name
            ))
        })
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// The text of the named child, if present.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(|child| child.text.as_str())
    }
}

/// Reads an element from the map quick-xml presents it as: attributes are
/// keyed `@name`, text content `$text`, and child elements by their local
/// name. The element's own name is known only to its parent, which sets it.
impl<'de> Deserialize<'de> for XmlElement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ElementVisitor)
    }
}

struct ElementVisitor;

impl<'de> Visitor<'de> for ElementVisitor {
    type Value = XmlElement;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an XML element")
    }

    fn visit_str<E>(self, text: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(XmlElement {
            text: text.to_string(),
            ..Default::default()
        })
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut element = XmlElement::default();

        while let Some(key) = map.next_key::<String>()? {
            if key == "$text" {
                element.text.push_str(&map.next_value::<String>()?);
            } else if let Some(attribute) = key.strip_prefix('@') {
                let value: String = map.next_value()?;
                if !attribute.starts_with("xmlns") {
                    element.attributes.push((attribute.to_string(), value));
                }
            } else {
                let mut child: XmlElement = map.next_value()?;
                child.name = key;
                element.children.push(child);
            }
        }

        Ok(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_prefixed_elements_and_escapes_text() {
        let mut writer = XmlWriter::new();
        writer
            .write_start(XmlNamespace::Messages, "GetItem", &[])
            .expect("start should be written");
        writer
            .write_text_element(XmlNamespace::Types, "Subject", "Fish & chips")
            .expect("text element should be written");
        writer
            .write_empty(XmlNamespace::Types, "ItemId", &[("Id", "AAA=")])
            .expect("empty element should be written");
        writer
            .write_optional_text_element(XmlNamespace::Types, "Location", None)
            .expect("absent text should write nothing");
        writer
            .write_end(XmlNamespace::Messages, "GetItem")
            .expect("end should be written");

        let actual = writer.into_string().expect("output should be UTF-8");
        assert_eq!(
            actual,
            r#"<m:GetItem><t:Subject>Fish &amp; chips</t:Subject><t:ItemId Id="AAA="/></m:GetItem>"#
        );
    }

    #[test]
    fn parses_nested_elements_without_prefixes() {
        let xml = r#"<?xml version="1.0" encoding="utf-8"?>
            <s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/">
                <s:Body>
                    <t:ItemId Id="AAA=" ChangeKey="CK" />
                    <t:Subject>Fish &amp; chips</t:Subject>
                    <t:Body><![CDATA[<b>bold</b>]]></t:Body>
                </s:Body>
            </s:Envelope>"#;

        let root = XmlElement::parse(xml.as_bytes()).expect("document should parse");
        assert_eq!(root.name, "Envelope");
        assert!(
            root.attributes.is_empty(),
            "namespace declarations should be dropped"
        );

        let body = root.required_child("Body").expect("body should be present");
        assert_eq!(body.children.len(), 3);

        let item_id = body.child("ItemId").expect("item id should be present");
        assert_eq!(item_id.attribute("Id"), Some("AAA="));
        assert_eq!(item_id.attribute("ChangeKey"), Some("CK"));

        assert_eq!(body.child_text("Subject"), Some("Fish & chips"));
        assert_eq!(body.child_text("Body"), Some("<b>bold</b>"));
    }

    #[test]
    fn rejects_truncated_documents() {
        let err = XmlElement::parse(b"<a><b></b>").expect_err("truncated document should fail");
        assert!(matches!(err, Error::UnexpectedResponse(_) | Error::Xml(_)));
    }

    #[test]
    fn deserializes_elements_through_serde() {
        let xml = r#"<m:Items xmlns:m="http://schemas.microsoft.com/exchange/services/2006/messages" xmlns:t="http://schemas.microsoft.com/exchange/services/2006/types"><t:Message><t:ItemId Id="AAA=" ChangeKey="CK"/><t:Subject>Fish &amp; chips</t:Subject><t:Body BodyType="Text">Lunch</t:Body></t:Message><t:Message/></m:Items>"#;

        let items: XmlElement = quick_xml::de::from_str(xml).expect("element should deserialize");
        assert!(
            items.attributes.is_empty(),
            "namespace declarations should be dropped"
        );
        assert_eq!(items.children.len(), 2);

        let message = &items.children[0];
        assert_eq!(message.name, "Message");
        assert_eq!(
            message.child("ItemId").and_then(|id| id.attribute("ChangeKey")),
            Some("CK")
        );
        assert_eq!(message.child_text("Subject"), Some("Fish & chips"));

        let body = message.child("Body").expect("body should be present");
        assert_eq!(body.attribute("BodyType"), Some("Text"));
        assert_eq!(body.text, "Lunch");

        assert_eq!(items.children[1].name, "Message");
        assert!(items.children[1].children.is_empty());
    }
}
