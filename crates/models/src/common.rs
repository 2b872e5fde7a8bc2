//! Small shared complex types: `actionUrl`, `keyValuePair`, `resultInfo`.

use graphbeta_serialization::{
    AdditionalData, Parsable, ParseNode, SerializationError, SerializationWriter,
};

/// A named link into an admin portal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionUrl {
    additional_data: AdditionalData,
    action_name: Option<String>,
    odata_type: Option<String>,
    service_url: Option<String>,
}

impl ActionUrl {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.actionUrl";

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

    pub fn action_name(&self) -> Option<&str> {
        self.action_name.as_deref()
    }

    pub fn set_action_name(&mut self, value: Option<String>) {
        self.action_name = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn service_url(&self) -> Option<&str> {
        self.service_url.as_deref()
    }

    pub fn set_service_url(&mut self, value: Option<String>) {
        self.service_url = value;
    }
}

impl Parsable for ActionUrl {
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
            "actionName" => {
                if let Some(value) = node.get_string_value()? {
                    self.action_name = Some(value);
                }
            }
            "serviceUrl" => {
                if let Some(value) = node.get_string_value()? {
                    self.service_url = Some(value);
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
        writer.write_string_value("actionName", self.action_name.as_deref())?;
        writer.write_string_value("serviceUrl", self.service_url.as_deref())?;
        writer.write_additional_data(&self.additional_data)?;
        Ok(())
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        Some(&mut self.additional_data)
    }
}

/// A loose name/value argument pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyValuePair {
    additional_data: AdditionalData,
    name: Option<String>,
    odata_type: Option<String>,
    value: Option<String>,
}

impl KeyValuePair {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.keyValuePair";

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

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, value: Option<String>) {
        self.name = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }
}

impl Parsable for KeyValuePair {
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
            "name" => {
                if let Some(value) = node.get_string_value()? {
                    self.name = Some(value);
                }
            }
            "value" => {
                if let Some(value) = node.get_string_value()? {
                    self.value = Some(value);
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
        writer.write_string_value("name", self.name.as_deref())?;
        writer.write_string_value("value", self.value.as_deref())?;
        writer.write_additional_data(&self.additional_data)?;
        Ok(())
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        Some(&mut self.additional_data)
    }
}

/// Outcome details for a long-running operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultInfo {
    additional_data: AdditionalData,
    code: Option<i32>,
    message: Option<String>,
    odata_type: Option<String>,
    subcode: Option<i32>,
}

impl ResultInfo {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.resultInfo";

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

    pub fn code(&self) -> Option<i32> {
        self.code
    }

    pub fn set_code(&mut self, value: Option<i32>) {
        self.code = value;
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn set_message(&mut self, value: Option<String>) {
        self.message = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn subcode(&self) -> Option<i32> {
        self.subcode
    }

    pub fn set_subcode(&mut self, value: Option<i32>) {
        self.subcode = value;
    }
}

impl Parsable for ResultInfo {
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
            "code" => {
                if let Some(value) = node.get_i32_value()? {
                    self.code = Some(value);
                }
            }
            "message" => {
                if let Some(value) = node.get_string_value()? {
                    self.message = Some(value);
                }
            }
            "subcode" => {
                if let Some(value) = node.get_i32_value()? {
                    self.subcode = Some(value);
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
        writer.write_i32_value("code", self.code)?;
        writer.write_string_value("message", self.message.as_deref())?;
        writer.write_i32_value("subcode", self.subcode)?;
        writer.write_additional_data(&self.additional_data)?;
        Ok(())
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        Some(&mut self.additional_data)
    }
}
