//! `microsoft.graph.search.bookmark` resource model.

use graphbeta_serialization::{
    Parsable, ParseNode, SerializationError, SerializationWriter,
};
use time::OffsetDateTime;

use crate::enums::DevicePlatformType;
use crate::search::answer::{AnswerKeyword, AnswerState, AnswerVariant, SearchAnswer};

/// A promoted search result pinned by an administrator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bookmark {
    search_answer: SearchAnswer,
    availability_end_date_time: Option<OffsetDateTime>,
    availability_start_date_time: Option<OffsetDateTime>,
    categories: Option<Vec<String>>,
    group_ids: Option<Vec<String>>,
    is_suggested: Option<bool>,
    keywords: Option<AnswerKeyword>,
    language_tags: Option<Vec<String>>,
    platforms: Option<Vec<DevicePlatformType>>,
    power_app_ids: Option<Vec<String>>,
    state: Option<AnswerState>,
    targeted_variations: Option<Vec<AnswerVariant>>,
}

impl Bookmark {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.search.bookmark";

    pub fn new() -> Self {
        let mut bookmark = Self::default();
        bookmark
            .search_answer
            .entity_mut()
            .set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        bookmark
    }

    pub fn from_discriminator(_tag: Option<&str>) -> Self {
        Self::new()
    }

    pub fn search_answer(&self) -> &SearchAnswer {
        &self.search_answer
    }

    pub fn search_answer_mut(&mut self) -> &mut SearchAnswer {
        &mut self.search_answer
    }

    pub fn id(&self) -> Option<&str> {
        self.search_answer.id()
    }

    pub fn set_id(&mut self, value: Option<String>) {
        self.search_answer.set_id(value);
    }

    pub fn availability_end_date_time(&self) -> Option<OffsetDateTime> {
        self.availability_end_date_time
    }

    pub fn set_availability_end_date_time(&mut self, value: Option<OffsetDateTime>) {
        self.availability_end_date_time = value;
    }

    pub fn availability_start_date_time(&self) -> Option<OffsetDateTime> {
        self.availability_start_date_time
    }

    pub fn set_availability_start_date_time(&mut self, value: Option<OffsetDateTime>) {
        self.availability_start_date_time = value;
    }

    pub fn categories(&self) -> Option<&[String]> {
        self.categories.as_deref()
    }

    pub fn set_categories(&mut self, value: Option<Vec<String>>) {
        self.categories = value;
    }

    pub fn group_ids(&self) -> Option<&[String]> {
        self.group_ids.as_deref()
    }

    pub fn set_group_ids(&mut self, value: Option<Vec<String>>) {
        self.group_ids = value;
    }

    pub fn is_suggested(&self) -> Option<bool> {
        self.is_suggested
    }

    pub fn set_is_suggested(&mut self, value: Option<bool>) {
        self.is_suggested = value;
    }

    pub fn keywords(&self) -> Option<&AnswerKeyword> {
        self.keywords.as_ref()
    }

    pub fn set_keywords(&mut self, value: Option<AnswerKeyword>) {
        self.keywords = value;
    }

    pub fn language_tags(&self) -> Option<&[String]> {
        self.language_tags.as_deref()
    }

    pub fn set_language_tags(&mut self, value: Option<Vec<String>>) {
        self.language_tags = value;
    }

    pub fn platforms(&self) -> Option<&[DevicePlatformType]> {
        self.platforms.as_deref()
    }

    pub fn set_platforms(&mut self, value: Option<Vec<DevicePlatformType>>) {
        self.platforms = value;
    }

    pub fn power_app_ids(&self) -> Option<&[String]> {
        self.power_app_ids.as_deref()
    }

    pub fn set_power_app_ids(&mut self, value: Option<Vec<String>>) {
        self.power_app_ids = value;
    }

    pub fn state(&self) -> Option<AnswerState> {
        self.state
    }

    pub fn set_state(&mut self, value: Option<AnswerState>) {
        self.state = value;
    }

    pub fn targeted_variations(&self) -> Option<&[AnswerVariant]> {
        self.targeted_variations.as_deref()
    }

    pub fn set_targeted_variations(&mut self, value: Option<Vec<AnswerVariant>>) {
        self.targeted_variations = value;
    }
}

impl Parsable for Bookmark {
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match field {
            "availabilityEndDateTime" => {
                if let Some(value) = node.get_date_time_value()? {
                    self.availability_end_date_time = Some(value);
                }
            }
            "availabilityStartDateTime" => {
                if let Some(value) = node.get_date_time_value()? {
                    self.availability_start_date_time = Some(value);
                }
            }
            "categories" => {
                if let Some(value) = node.get_collection_of_string_values()? {
                    self.categories = Some(value);
                }
            }
            "groupIds" => {
                if let Some(value) = node.get_collection_of_string_values()? {
                    self.group_ids = Some(value);
                }
            }
            "isSuggested" => {
                if let Some(value) = node.get_bool_value()? {
                    self.is_suggested = Some(value);
                }
            }
            "keywords" => {
                if let Some(value) = node.get_object_value(AnswerKeyword::from_discriminator)? {
                    self.keywords = Some(value);
                }
            }
            "languageTags" => {
                if let Some(value) = node.get_collection_of_string_values()? {
                    self.language_tags = Some(value);
                }
            }
            "platforms" => {
                if let Some(value) = node.get_collection_of_enum_values()? {
                    self.platforms = Some(value);
                }
            }
            "powerAppIds" => {
                if let Some(value) = node.get_collection_of_string_values()? {
                    self.power_app_ids = Some(value);
                }
            }
            "state" => {
                if let Some(value) = node.get_enum_value()? {
                    self.state = Some(value);
                }
            }
            "targetedVariations" => {
                if let Some(value) =
                    node.get_collection_of_object_values(AnswerVariant::from_discriminator)?
                {
                    self.targeted_variations = Some(value);
                }
            }
            _ => return self.search_answer.deserialize_field(field, node),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(
        &self,
        writer: &mut W,
    ) -> Result<(), SerializationError> {
        self.search_answer.serialize(writer)?;
        writer.write_date_time_value(
            "availabilityEndDateTime",
            self.availability_end_date_time,
        )?;
        writer.write_date_time_value(
            "availabilityStartDateTime",
            self.availability_start_date_time,
        )?;
        writer.write_collection_of_string_values("categories", self.categories.as_deref())?;
        writer.write_collection_of_string_values("groupIds", self.group_ids.as_deref())?;
        writer.write_bool_value("isSuggested", self.is_suggested)?;
        writer.write_object_value("keywords", self.keywords.as_ref())?;
        writer.write_collection_of_string_values(
            "languageTags",
            self.language_tags.as_deref(),
        )?;
        writer.write_collection_of_enum_values("platforms", self.platforms.as_deref())?;
        writer.write_collection_of_string_values("powerAppIds", self.power_app_ids.as_deref())?;
        writer.write_enum_value("state", self.state)?;
        writer.write_collection_of_object_values(
            "targetedVariations",
            self.targeted_variations.as_deref(),
        )?;
        Ok(())
    }
}
