//! `microsoft.graph.webPart` family.

use graphbeta_serialization::{
    Parsable, ParseNode, SerializationError, SerializationWriter,
};

use crate::entity::Entity;

/// Base record of the web part family.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WebPart {
    entity: Entity,
}

impl WebPart {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.webPart";

    pub fn new() -> Self {
        let mut part = Self::default();
        part.entity.set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        part
    }

    pub fn from_discriminator(_tag: Option<&str>) -> Self {
        Self::new()
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    pub fn id(&self) -> Option<&str> {
        self.entity.id()
    }

    pub fn set_id(&mut self, value: Option<String>) {
        self.entity.set_id(value);
    }
}

impl Parsable for WebPart {
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        self.entity.deserialize_field(field, node)
    }

    fn serialize<W: SerializationWriter>(
        &self,
        writer: &mut W,
    ) -> Result<(), SerializationError> {
        self.entity.serialize(writer)
    }
}

/// A free-form HTML web part.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextWebPart {
    web_part: WebPart,
    inner_html: Option<String>,
}

impl TextWebPart {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.textWebPart";

    pub fn new() -> Self {
        let mut part = Self::default();
        part.web_part
            .entity_mut()
            .set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        part
    }

    pub fn from_discriminator(_tag: Option<&str>) -> Self {
        Self::new()
    }

    pub fn web_part(&self) -> &WebPart {
        &self.web_part
    }

    pub fn web_part_mut(&mut self) -> &mut WebPart {
        &mut self.web_part
    }

    pub fn id(&self) -> Option<&str> {
        self.web_part.id()
    }

    pub fn set_id(&mut self, value: Option<String>) {
        self.web_part.set_id(value);
    }

    pub fn inner_html(&self) -> Option<&str> {
        self.inner_html.as_deref()
    }

    pub fn set_inner_html(&mut self, value: Option<String>) {
        self.inner_html = value;
    }
}

impl Parsable for TextWebPart {
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match field {
            "innerHtml" => {
                if let Some(value) = node.get_string_value()? {
                    self.inner_html = Some(value);
                }
            }
            _ => return self.web_part.deserialize_field(field, node),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(
        &self,
        writer: &mut W,
    ) -> Result<(), SerializationError> {
        self.web_part.serialize(writer)?;
        writer.write_string_value("innerHtml", self.inner_html.as_deref())?;
        Ok(())
    }
}

/// An out-of-the-box web part identified by its catalog type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StandardWebPart {
    web_part: WebPart,
    web_part_type: Option<String>,
}

impl StandardWebPart {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.standardWebPart";

    pub fn new() -> Self {
        let mut part = Self::default();
        part.web_part
            .entity_mut()
            .set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        part
    }

    pub fn from_discriminator(_tag: Option<&str>) -> Self {
        Self::new()
    }

    pub fn web_part(&self) -> &WebPart {
        &self.web_part
    }

    pub fn web_part_mut(&mut self) -> &mut WebPart {
        &mut self.web_part
    }

    pub fn id(&self) -> Option<&str> {
        self.web_part.id()
    }

    pub fn set_id(&mut self, value: Option<String>) {
        self.web_part.set_id(value);
    }

    pub fn web_part_type(&self) -> Option<&str> {
        self.web_part_type.as_deref()
    }

    pub fn set_web_part_type(&mut self, value: Option<String>) {
        self.web_part_type = value;
    }
}

impl Parsable for StandardWebPart {
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match field {
            "webPartType" => {
                if let Some(value) = node.get_string_value()? {
                    self.web_part_type = Some(value);
                }
            }
            _ => return self.web_part.deserialize_field(field, node),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(
        &self,
        writer: &mut W,
    ) -> Result<(), SerializationError> {
        self.web_part.serialize(writer)?;
        writer.write_string_value("webPartType", self.web_part_type.as_deref())?;
        Ok(())
    }
}

/// Concrete variants of the web part family.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyWebPart {
    WebPart(WebPart),
    TextWebPart(TextWebPart),
    StandardWebPart(StandardWebPart),
}

impl Default for AnyWebPart {
    fn default() -> Self {
        Self::WebPart(WebPart::new())
    }
}

impl AnyWebPart {
    pub fn from_discriminator(tag: Option<&str>) -> Self {
        match tag {
            Some("#microsoft.graph.textWebPart") => Self::TextWebPart(TextWebPart::new()),
            Some("#microsoft.graph.standardWebPart") => {
                Self::StandardWebPart(StandardWebPart::new())
            }
            _ => Self::WebPart(WebPart::new()),
        }
    }

    pub fn as_text_web_part(&self) -> Option<&TextWebPart> {
        match self {
            Self::TextWebPart(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_standard_web_part(&self) -> Option<&StandardWebPart> {
        match self {
            Self::StandardWebPart(record) => Some(record),
            _ => None,
        }
    }
}

impl Parsable for AnyWebPart {
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match self {
            Self::WebPart(record) => record.deserialize_field(field, node),
            Self::TextWebPart(record) => record.deserialize_field(field, node),
            Self::StandardWebPart(record) => record.deserialize_field(field, node),
        }
    }

    fn serialize<W: SerializationWriter>(
        &self,
        writer: &mut W,
    ) -> Result<(), SerializationError> {
        match self {
            Self::WebPart(record) => record.serialize(writer),
            Self::TextWebPart(record) => record.serialize(writer),
            Self::StandardWebPart(record) => record.serialize(writer),
        }
    }
}
