//! `microsoft.graph.user` resource model.

use graphbeta_serialization::{
    Parsable, ParseNode, SerializationError, SerializationWriter,
};
use time::OffsetDateTime;

use crate::entity::Entity;

/// A directory user account.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct User {
    entity: Entity,
    account_enabled: Option<bool>,
    business_phones: Option<Vec<String>>,
    created_date_time: Option<OffsetDateTime>,
    display_name: Option<String>,
    given_name: Option<String>,
    job_title: Option<String>,
    mail: Option<String>,
    mobile_phone: Option<String>,
    office_location: Option<String>,
    preferred_language: Option<String>,
    surname: Option<String>,
    user_principal_name: Option<String>,
}

impl User {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.user";

    pub fn new() -> Self {
        let mut user = Self::default();
        user.entity.set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        user
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

    pub fn account_enabled(&self) -> Option<bool> {
        self.account_enabled
    }

    pub fn set_account_enabled(&mut self, value: Option<bool>) {
        self.account_enabled = value;
    }

    pub fn business_phones(&self) -> Option<&[String]> {
        self.business_phones.as_deref()
    }

    pub fn set_business_phones(&mut self, value: Option<Vec<String>>) {
        self.business_phones = value;
    }

    pub fn created_date_time(&self) -> Option<OffsetDateTime> {
        self.created_date_time
    }

    pub fn set_created_date_time(&mut self, value: Option<OffsetDateTime>) {
        self.created_date_time = value;
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn set_display_name(&mut self, value: Option<String>) {
        self.display_name = value;
    }

    pub fn given_name(&self) -> Option<&str> {
        self.given_name.as_deref()
    }

    pub fn set_given_name(&mut self, value: Option<String>) {
        self.given_name = value;
    }

    pub fn job_title(&self) -> Option<&str> {
        self.job_title.as_deref()
    }

    pub fn set_job_title(&mut self, value: Option<String>) {
        self.job_title = value;
    }

    pub fn mail(&self) -> Option<&str> {
        self.mail.as_deref()
    }

    pub fn set_mail(&mut self, value: Option<String>) {
        self.mail = value;
    }

    pub fn mobile_phone(&self) -> Option<&str> {
        self.mobile_phone.as_deref()
    }

    pub fn set_mobile_phone(&mut self, value: Option<String>) {
        self.mobile_phone = value;
    }

    pub fn office_location(&self) -> Option<&str> {
        self.office_location.as_deref()
    }

    pub fn set_office_location(&mut self, value: Option<String>) {
        self.office_location = value;
    }

    pub fn preferred_language(&self) -> Option<&str> {
        self.preferred_language.as_deref()
    }

    pub fn set_preferred_language(&mut self, value: Option<String>) {
        self.preferred_language = value;
    }

    pub fn surname(&self) -> Option<&str> {
        self.surname.as_deref()
    }

    pub fn set_surname(&mut self, value: Option<String>) {
        self.surname = value;
    }

    pub fn user_principal_name(&self) -> Option<&str> {
        self.user_principal_name.as_deref()
    }

    pub fn set_user_principal_name(&mut self, value: Option<String>) {
        self.user_principal_name = value;
    }
}

impl Parsable for User {
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match field {
            "accountEnabled" => {
                if let Some(value) = node.get_bool_value()? {
                    self.account_enabled = Some(value);
                }
            }
            "businessPhones" => {
                if let Some(value) = node.get_collection_of_string_values()? {
                    self.business_phones = Some(value);
                }
            }
            "createdDateTime" => {
                if let Some(value) = node.get_date_time_value()? {
                    self.created_date_time = Some(value);
                }
            }
            "displayName" => {
                if let Some(value) = node.get_string_value()? {
                    self.display_name = Some(value);
                }
            }
            "givenName" => {
                if let Some(value) = node.get_string_value()? {
                    self.given_name = Some(value);
                }
            }
            "jobTitle" => {
                if let Some(value) = node.get_string_value()? {
                    self.job_title = Some(value);
                }
            }
            "mail" => {
                if let Some(value) = node.get_string_value()? {
                    self.mail = Some(value);
                }
            }
            "mobilePhone" => {
                if let Some(value) = node.get_string_value()? {
                    self.mobile_phone = Some(value);
                }
            }
            "officeLocation" => {
                if let Some(value) = node.get_string_value()? {
                    self.office_location = Some(value);
                }
            }
            "preferredLanguage" => {
                if let Some(value) = node.get_string_value()? {
                    self.preferred_language = Some(value);
                }
            }
            "surname" => {
                if let Some(value) = node.get_string_value()? {
                    self.surname = Some(value);
                }
            }
            "userPrincipalName" => {
                if let Some(value) = node.get_string_value()? {
                    self.user_principal_name = Some(value);
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
        writer.write_bool_value("accountEnabled", self.account_enabled)?;
        writer.write_collection_of_string_values(
            "businessPhones",
            self.business_phones.as_deref(),
        )?;
        writer.write_date_time_value("createdDateTime", self.created_date_time)?;
        writer.write_string_value("displayName", self.display_name.as_deref())?;
        writer.write_string_value("givenName", self.given_name.as_deref())?;
        writer.write_string_value("jobTitle", self.job_title.as_deref())?;
        writer.write_string_value("mail", self.mail.as_deref())?;
        writer.write_string_value("mobilePhone", self.mobile_phone.as_deref())?;
        writer.write_string_value("officeLocation", self.office_location.as_deref())?;
        writer.write_string_value("preferredLanguage", self.preferred_language.as_deref())?;
        writer.write_string_value("surname", self.surname.as_deref())?;
        writer.write_string_value("userPrincipalName", self.user_principal_name.as_deref())?;
        Ok(())
    }
}
