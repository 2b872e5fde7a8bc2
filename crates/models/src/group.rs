//! `microsoft.graph.group` resource model.

use graphbeta_serialization::{
    Parsable, ParseNode, SerializationError, SerializationWriter,
};
use time::OffsetDateTime;

use crate::entity::Entity;

/// A directory group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    entity: Entity,
    created_date_time: Option<OffsetDateTime>,
    description: Option<String>,
    display_name: Option<String>,
    mail: Option<String>,
    mail_nickname: Option<String>,
    visibility: Option<String>,
}

impl Group {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.group";

    pub fn new() -> Self {
        let mut group = Self::default();
        group.entity.set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        group
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

    pub fn created_date_time(&self) -> Option<OffsetDateTime> {
        self.created_date_time
    }

    pub fn set_created_date_time(&mut self, value: Option<OffsetDateTime>) {
        self.created_date_time = value;
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, value: Option<String>) {
        self.description = value;
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn set_display_name(&mut self, value: Option<String>) {
        self.display_name = value;
    }

    pub fn mail(&self) -> Option<&str> {
        self.mail.as_deref()
    }

    pub fn set_mail(&mut self, value: Option<String>) {
        self.mail = value;
    }

    pub fn mail_nickname(&self) -> Option<&str> {
        self.mail_nickname.as_deref()
    }

    pub fn set_mail_nickname(&mut self, value: Option<String>) {
        self.mail_nickname = value;
    }

    pub fn visibility(&self) -> Option<&str> {
        self.visibility.as_deref()
    }

    pub fn set_visibility(&mut self, value: Option<String>) {
        self.visibility = value;
    }
}

impl Parsable for Group {
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match field {
            "createdDateTime" => {
                if let Some(value) = node.get_date_time_value()? {
                    self.created_date_time = Some(value);
                }
            }
            "description" => {
                if let Some(value) = node.get_string_value()? {
                    self.description = Some(value);
                }
            }
            "displayName" => {
                if let Some(value) = node.get_string_value()? {
                    self.display_name = Some(value);
                }
            }
            "mail" => {
                if let Some(value) = node.get_string_value()? {
                    self.mail = Some(value);
                }
            }
            "mailNickname" => {
                if let Some(value) = node.get_string_value()? {
                    self.mail_nickname = Some(value);
                }
            }
            "visibility" => {
                if let Some(value) = node.get_string_value()? {
                    self.visibility = Some(value);
                }
            }
            _ => return self.entity.deserialize_field(field, node),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(
        &self,
        writer: &mut W,
    ) -> Result<(), SerializationError> {
        self.entity.serialize(writer)?;
        writer.write_date_time_value("createdDateTime", self.created_date_time)?;
        writer.write_string_value("description", self.description.as_deref())?;
        writer.write_string_value("displayName", self.display_name.as_deref())?;
        writer.write_string_value("mail", self.mail.as_deref())?;
        writer.write_string_value("mailNickname", self.mail_nickname.as_deref())?;
        writer.write_string_value("visibility", self.visibility.as_deref())?;
        Ok(())
    }
}
