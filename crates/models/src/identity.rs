//! `microsoft.graph.identity` / `microsoft.graph.identitySet` complex types.

use graphbeta_serialization::{
    AdditionalData, Parsable, ParseNode, SerializationError, SerializationWriter,
};

/// One actor (user, device, or application) referenced by a resource.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Identity {
    additional_data: AdditionalData,
    display_name: Option<String>,
    id: Option<String>,
    odata_type: Option<String>,
}

impl Identity {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.identity";

    pub fn new() -> Self {
        Self {
            odata_type: Some(Self::ODATA_TYPE.to_owned()),
            ..Self::default()
        }
    }

    pub fn from_discriminator(_tag: Option<&str>) -> Self {
        Self::new()
    }

    pub fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn set_display_name(&mut self, value: Option<String>) {
        self.display_name = value;
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, value: Option<String>) {
        self.id = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }
}

impl Parsable for Identity {
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match field {
            "@odata.type" => {
                if let Some(value) = node.get_string_value()? {
                    self.odata_type = Some(value);
                }
            }
            "displayName" => {
                if let Some(value) = node.get_string_value()? {
                    self.display_name = Some(value);
                }
            }
            "id" => {
                if let Some(value) = node.get_string_value()? {
                    self.id = Some(value);
                }
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(
        &self,
        writer: &mut W,
    ) -> Result<(), SerializationError> {
        writer.write_string_value("@odata.type", self.odata_type.as_deref())?;
        writer.write_string_value("displayName", self.display_name.as_deref())?;
        writer.write_string_value("id", self.id.as_deref())?;
        writer.write_additional_data(&self.additional_data)?;
        Ok(())
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        Some(&mut self.additional_data)
    }
}

/// The set of identities associated with one action on a resource.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdentitySet {
    additional_data: AdditionalData,
    application: Option<Identity>,
    device: Option<Identity>,
    odata_type: Option<String>,
    user: Option<Identity>,
}

impl IdentitySet {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.identitySet";

    pub fn new() -> Self {
        Self {
            odata_type: Some(Self::ODATA_TYPE.to_owned()),
            ..Self::default()
        }
    }

    pub fn from_discriminator(_tag: Option<&str>) -> Self {
        Self::new()
    }

    pub fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    pub fn application(&self) -> Option<&Identity> {
        self.application.as_ref()
    }

    pub fn set_application(&mut self, value: Option<Identity>) {
        self.application = value;
    }

    pub fn device(&self) -> Option<&Identity> {
        self.device.as_ref()
    }

    pub fn set_device(&mut self, value: Option<Identity>) {
        self.device = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn user(&self) -> Option<&Identity> {
        self.user.as_ref()
    }

    pub fn set_user(&mut self, value: Option<Identity>) {
        self.user = value;
    }
}

impl Parsable for IdentitySet {
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match field {
            "@odata.type" => {
                if let Some(value) = node.get_string_value()? {
                    self.odata_type = Some(value);
                }
            }
            "application" => {
                if let Some(value) = node.get_object_value(Identity::from_discriminator)? {
                    self.application = Some(value);
                }
            }
            "device" => {
                if let Some(value) = node.get_object_value(Identity::from_discriminator)? {
                    self.device = Some(value);
                }
            }
            "user" => {
                if let Some(value) = node.get_object_value(Identity::from_discriminator)? {
                    self.user = Some(value);
                }
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(
        &self,
        writer: &mut W,
    ) -> Result<(), SerializationError> {
        writer.write_string_value("@odata.type", self.odata_type.as_deref())?;
        writer.write_object_value("application", self.application.as_ref())?;
        writer.write_object_value("device", self.device.as_ref())?;
        writer.write_object_value("user", self.user.as_ref())?;
        writer.write_additional_data(&self.additional_data)?;
        Ok(())
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        Some(&mut self.additional_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphbeta_serialization::json::{from_json_value, to_json_value};
    use serde_json::json;

    #[test]
    fn nested_identities_roundtrip() {
        let payload = json!({
            "@odata.type": "#microsoft.graph.identitySet",
            "user": {"displayName": "Dana Ruiz", "id": "u-1"},
            "application": {"displayName": "sync-bot"},
        });
        let set: IdentitySet =
            from_json_value(&payload, IdentitySet::from_discriminator).unwrap();
        assert_eq!(set.user().unwrap().display_name(), Some("Dana Ruiz"));
        assert_eq!(set.user().unwrap().id(), Some("u-1"));
        assert!(set.device().is_none());

        let back = to_json_value(&set).unwrap();
        assert_eq!(back["user"]["displayName"], json!("Dana Ruiz"));
        assert!(back.get("device").is_none());
    }
}
