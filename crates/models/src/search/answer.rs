//! `microsoft.graph.search.searchAnswer` base record and its complex types.

use graphbeta_serialization::{
    AdditionalData, Parsable, ParseNode, SerializationError, SerializationWriter, WireEnum,
};
use time::OffsetDateTime;

use crate::entity::Entity;
use crate::enums::DevicePlatformType;
use crate::identity::IdentitySet;
use crate::search::{Bookmark, Qna};

/// Publication state of an answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnswerState {
    #[default]
    Published,
    Draft,
    Excluded,
    UnknownFutureValue,
}

impl WireEnum for AnswerState {
    const FAMILY: &'static str = "answerState";
    const VALUES: &'static [Self] = &[
        Self::Published,
        Self::Draft,
        Self::Excluded,
        Self::UnknownFutureValue,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::Draft => "draft",
            Self::Excluded => "excluded",
            Self::UnknownFutureValue => "unknownFutureValue",
        }
    }

    fn parse(value: &str) -> Result<Self, SerializationError> {
        Ok(match value {
            "published" => Self::Published,
            "draft" => Self::Draft,
            "excluded" => Self::Excluded,
            "unknownFutureValue" => Self::UnknownFutureValue,
            other => return Err(SerializationError::unknown_enum(other, Self::FAMILY)),
        })
    }
}

/// Trigger keywords for an answer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerKeyword {
    additional_data: AdditionalData,
    keywords: Option<Vec<String>>,
    match_similar_keywords: Option<bool>,
    odata_type: Option<String>,
    reserved_keywords: Option<Vec<String>>,
}

impl AnswerKeyword {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.search.answerKeyword";

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

    pub fn keywords(&self) -> Option<&[String]> {
        self.keywords.as_deref()
    }

    pub fn set_keywords(&mut self, value: Option<Vec<String>>) {
        self.keywords = value;
    }

    pub fn match_similar_keywords(&self) -> Option<bool> {
        self.match_similar_keywords
    }

    pub fn set_match_similar_keywords(&mut self, value: Option<bool>) {
        self.match_similar_keywords = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn reserved_keywords(&self) -> Option<&[String]> {
        self.reserved_keywords.as_deref()
    }

    pub fn set_reserved_keywords(&mut self, value: Option<Vec<String>>) {
        self.reserved_keywords = value;
    }
}

impl Parsable for AnswerKeyword {
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
            "keywords" => {
                if let Some(value) = node.get_collection_of_string_values()? {
                    self.keywords = Some(value);
                }
            }
            "matchSimilarKeywords" => {
                if let Some(value) = node.get_bool_value()? {
                    self.match_similar_keywords = Some(value);
                }
            }
            "reservedKeywords" => {
                if let Some(value) = node.get_collection_of_string_values()? {
                    self.reserved_keywords = Some(value);
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
        writer.write_collection_of_string_values("keywords", self.keywords.as_deref())?;
        writer.write_bool_value("matchSimilarKeywords", self.match_similar_keywords)?;
        writer.write_collection_of_string_values(
            "reservedKeywords",
            self.reserved_keywords.as_deref(),
        )?;
        writer.write_additional_data(&self.additional_data)?;
        Ok(())
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        Some(&mut self.additional_data)
    }
}

/// A per-country or per-device variation of an answer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerVariant {
    additional_data: AdditionalData,
    description: Option<String>,
    display_name: Option<String>,
    language_tag: Option<String>,
    odata_type: Option<String>,
    platform: Option<DevicePlatformType>,
    web_url: Option<String>,
}

impl AnswerVariant {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.search.answerVariant";

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

    pub fn language_tag(&self) -> Option<&str> {
        self.language_tag.as_deref()
    }

    pub fn set_language_tag(&mut self, value: Option<String>) {
        self.language_tag = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn platform(&self) -> Option<DevicePlatformType> {
        self.platform
    }

    pub fn set_platform(&mut self, value: Option<DevicePlatformType>) {
        self.platform = value;
    }

    pub fn web_url(&self) -> Option<&str> {
        self.web_url.as_deref()
    }

    pub fn set_web_url(&mut self, value: Option<String>) {
        self.web_url = value;
    }
}

impl Parsable for AnswerVariant {
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
            "languageTag" => {
                if let Some(value) = node.get_string_value()? {
                    self.language_tag = Some(value);
                }
            }
            "platform" => {
                if let Some(value) = node.get_enum_value()? {
                    self.platform = Some(value);
                }
            }
            "webUrl" => {
                if let Some(value) = node.get_string_value()? {
                    self.web_url = Some(value);
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
        writer.write_string_value("description", self.description.as_deref())?;
        writer.write_string_value("displayName", self.display_name.as_deref())?;
        writer.write_string_value("languageTag", self.language_tag.as_deref())?;
        writer.write_enum_value("platform", self.platform)?;
        writer.write_string_value("webUrl", self.web_url.as_deref())?;
        writer.write_additional_data(&self.additional_data)?;
        Ok(())
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        Some(&mut self.additional_data)
    }
}

/// Base record of administrative search answers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchAnswer {
    entity: Entity,
    description: Option<String>,
    display_name: Option<String>,
    last_modified_by: Option<IdentitySet>,
    last_modified_date_time: Option<OffsetDateTime>,
    web_url: Option<String>,
}

impl SearchAnswer {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.search.searchAnswer";

    pub fn new() -> Self {
        let mut answer = Self::default();
        answer
            .entity
            .set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        answer
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

    pub fn last_modified_by(&self) -> Option<&IdentitySet> {
        self.last_modified_by.as_ref()
    }

    pub fn set_last_modified_by(&mut self, value: Option<IdentitySet>) {
        self.last_modified_by = value;
    }

    pub fn last_modified_date_time(&self) -> Option<OffsetDateTime> {
        self.last_modified_date_time
    }

    pub fn set_last_modified_date_time(&mut self, value: Option<OffsetDateTime>) {
        self.last_modified_date_time = value;
    }

    pub fn web_url(&self) -> Option<&str> {
        self.web_url.as_deref()
    }

    pub fn set_web_url(&mut self, value: Option<String>) {
        self.web_url = value;
    }
}

impl Parsable for SearchAnswer {
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match field {
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
            "lastModifiedBy" => {
                if let Some(value) = node.get_object_value(IdentitySet::from_discriminator)? {
                    self.last_modified_by = Some(value);
                }
            }
            "lastModifiedDateTime" => {
                if let Some(value) = node.get_date_time_value()? {
                    self.last_modified_date_time = Some(value);
                }
            }
            "webUrl" => {
                if let Some(value) = node.get_string_value()? {
                    self.web_url = Some(value);
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
        writer.write_string_value("description", self.description.as_deref())?;
        writer.write_string_value("displayName", self.display_name.as_deref())?;
        writer.write_object_value("lastModifiedBy", self.last_modified_by.as_ref())?;
        writer.write_date_time_value("lastModifiedDateTime", self.last_modified_date_time)?;
        writer.write_string_value("webUrl", self.web_url.as_deref())?;
        Ok(())
    }
}

/// Concrete variants of the search answer family.
#[derive(Debug, Clone, PartialEq)]
pub enum AnySearchAnswer {
    SearchAnswer(SearchAnswer),
    Bookmark(Box<Bookmark>),
    Qna(Box<Qna>),
}

impl Default for AnySearchAnswer {
    fn default() -> Self {
        Self::SearchAnswer(SearchAnswer::new())
    }
}

impl AnySearchAnswer {
    pub fn from_discriminator(tag: Option<&str>) -> Self {
        match tag {
            Some("#microsoft.graph.search.bookmark") => {
                Self::Bookmark(Box::new(Bookmark::new()))
            }
            Some("#microsoft.graph.search.qna") => Self::Qna(Box::new(Qna::new())),
            _ => Self::SearchAnswer(SearchAnswer::new()),
        }
    }

    pub fn search_answer(&self) -> &SearchAnswer {
        match self {
            Self::SearchAnswer(record) => record,
            Self::Bookmark(record) => record.search_answer(),
            Self::Qna(record) => record.search_answer(),
        }
    }

    pub fn as_bookmark(&self) -> Option<&Bookmark> {
        match self {
            Self::Bookmark(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_qna(&self) -> Option<&Qna> {
        match self {
            Self::Qna(record) => Some(record),
            _ => None,
        }
    }
}

impl Parsable for AnySearchAnswer {
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match self {
            Self::SearchAnswer(record) => record.deserialize_field(field, node),
            Self::Bookmark(record) => record.deserialize_field(field, node),
            Self::Qna(record) => record.deserialize_field(field, node),
        }
    }

    fn serialize<W: SerializationWriter>(
        &self,
        writer: &mut W,
    ) -> Result<(), SerializationError> {
        match self {
            Self::SearchAnswer(record) => record.serialize(writer),
            Self::Bookmark(record) => record.serialize(writer),
            Self::Qna(record) => record.serialize(writer),
        }
    }
}
