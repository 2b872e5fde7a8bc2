//! `microsoft.graph.sitePage` resource model and its facet complex types.

use graphbeta_serialization::{
    AdditionalData, Parsable, ParseNode, SerializationError, SerializationWriter,
};

use crate::base_item::BaseItem;
use crate::enums::{
    PageLayoutType, PagePromotionType, TitleAreaLayoutType, TitleAreaTextAlignmentType,
};
use crate::web_part::AnyWebPart;

/// Content type reference facet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentTypeInfo {
    additional_data: AdditionalData,
    id: Option<String>,
    name: Option<String>,
    odata_type: Option<String>,
}

impl ContentTypeInfo {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.contentTypeInfo";

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

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, value: Option<String>) {
        self.id = value;
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
}

impl Parsable for ContentTypeInfo {
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
            "id" => {
                if let Some(value) = node.get_string_value()? {
                    self.id = Some(value);
                }
            }
            "name" => {
                if let Some(value) = node.get_string_value()? {
                    self.name = Some(value);
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
        writer.write_string_value("id", self.id.as_deref())?;
        writer.write_string_value("name", self.name.as_deref())?;
        writer.write_additional_data(&self.additional_data)?;
        Ok(())
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        Some(&mut self.additional_data)
    }
}

/// Publishing status facet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PublicationFacet {
    additional_data: AdditionalData,
    level: Option<String>,
    odata_type: Option<String>,
    version_id: Option<String>,
}

impl PublicationFacet {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.publicationFacet";

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

    pub fn level(&self) -> Option<&str> {
        self.level.as_deref()
    }

    pub fn set_level(&mut self, value: Option<String>) {
        self.level = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    pub fn set_version_id(&mut self, value: Option<String>) {
        self.version_id = value;
    }
}

impl Parsable for PublicationFacet {
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
            "level" => {
                if let Some(value) = node.get_string_value()? {
                    self.level = Some(value);
                }
            }
            "versionId" => {
                if let Some(value) = node.get_string_value()? {
                    self.version_id = Some(value);
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
        writer.write_string_value("level", self.level.as_deref())?;
        writer.write_string_value("versionId", self.version_id.as_deref())?;
        writer.write_additional_data(&self.additional_data)?;
        Ok(())
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        Some(&mut self.additional_data)
    }
}

/// Reaction counters facet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReactionsFacet {
    additional_data: AdditionalData,
    comment_count: Option<i32>,
    like_count: Option<i32>,
    odata_type: Option<String>,
    share_count: Option<i32>,
}

impl ReactionsFacet {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.reactionsFacet";

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

    pub fn comment_count(&self) -> Option<i32> {
        self.comment_count
    }

    pub fn set_comment_count(&mut self, value: Option<i32>) {
        self.comment_count = value;
    }

    pub fn like_count(&self) -> Option<i32> {
        self.like_count
    }

    pub fn set_like_count(&mut self, value: Option<i32>) {
        self.like_count = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn share_count(&self) -> Option<i32> {
        self.share_count
    }

    pub fn set_share_count(&mut self, value: Option<i32>) {
        self.share_count = value;
    }
}

impl Parsable for ReactionsFacet {
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
            "commentCount" => {
                if let Some(value) = node.get_i32_value()? {
                    self.comment_count = Some(value);
                }
            }
            "likeCount" => {
                if let Some(value) = node.get_i32_value()? {
                    self.like_count = Some(value);
                }
            }
            "shareCount" => {
                if let Some(value) = node.get_i32_value()? {
                    self.share_count = Some(value);
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
        writer.write_i32_value("commentCount", self.comment_count)?;
        writer.write_i32_value("likeCount", self.like_count)?;
        writer.write_i32_value("shareCount", self.share_count)?;
        writer.write_additional_data(&self.additional_data)?;
        Ok(())
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        Some(&mut self.additional_data)
    }
}

/// Title area layout facet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TitleArea {
    additional_data: AdditionalData,
    alternative_text: Option<String>,
    enable_gradient_effect: Option<bool>,
    image_web_url: Option<String>,
    layout: Option<TitleAreaLayoutType>,
    odata_type: Option<String>,
    show_author: Option<bool>,
    show_published_date: Option<bool>,
    show_text_block_above_title: Option<bool>,
    text_above_title: Option<String>,
    text_alignment: Option<TitleAreaTextAlignmentType>,
}

impl TitleArea {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.titleArea";

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

    pub fn alternative_text(&self) -> Option<&str> {
        self.alternative_text.as_deref()
    }

    pub fn set_alternative_text(&mut self, value: Option<String>) {
        self.alternative_text = value;
    }

    pub fn enable_gradient_effect(&self) -> Option<bool> {
        self.enable_gradient_effect
    }

    pub fn set_enable_gradient_effect(&mut self, value: Option<bool>) {
        self.enable_gradient_effect = value;
    }

    pub fn image_web_url(&self) -> Option<&str> {
        self.image_web_url.as_deref()
    }

    pub fn set_image_web_url(&mut self, value: Option<String>) {
        self.image_web_url = value;
    }

    pub fn layout(&self) -> Option<TitleAreaLayoutType> {
        self.layout
    }

    pub fn set_layout(&mut self, value: Option<TitleAreaLayoutType>) {
        self.layout = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn show_author(&self) -> Option<bool> {
        self.show_author
    }

    pub fn set_show_author(&mut self, value: Option<bool>) {
        self.show_author = value;
    }

    pub fn show_published_date(&self) -> Option<bool> {
        self.show_published_date
    }

    pub fn set_show_published_date(&mut self, value: Option<bool>) {
        self.show_published_date = value;
    }

    pub fn show_text_block_above_title(&self) -> Option<bool> {
        self.show_text_block_above_title
    }

    pub fn set_show_text_block_above_title(&mut self, value: Option<bool>) {
        self.show_text_block_above_title = value;
    }

    pub fn text_above_title(&self) -> Option<&str> {
        self.text_above_title.as_deref()
    }

    pub fn set_text_above_title(&mut self, value: Option<String>) {
        self.text_above_title = value;
    }

    pub fn text_alignment(&self) -> Option<TitleAreaTextAlignmentType> {
        self.text_alignment
    }

    pub fn set_text_alignment(&mut self, value: Option<TitleAreaTextAlignmentType>) {
        self.text_alignment = value;
    }
}

impl Parsable for TitleArea {
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
            "alternativeText" => {
                if let Some(value) = node.get_string_value()? {
                    self.alternative_text = Some(value);
                }
            }
            "enableGradientEffect" => {
                if let Some(value) = node.get_bool_value()? {
                    self.enable_gradient_effect = Some(value);
                }
            }
            "imageWebUrl" => {
                if let Some(value) = node.get_string_value()? {
                    self.image_web_url = Some(value);
                }
            }
            "layout" => {
                if let Some(value) = node.get_enum_value()? {
                    self.layout = Some(value);
                }
            }
            "showAuthor" => {
                if let Some(value) = node.get_bool_value()? {
                    self.show_author = Some(value);
                }
            }
            "showPublishedDate" => {
                if let Some(value) = node.get_bool_value()? {
                    self.show_published_date = Some(value);
                }
            }
            "showTextBlockAboveTitle" => {
                if let Some(value) = node.get_bool_value()? {
                    self.show_text_block_above_title = Some(value);
                }
            }
            "textAboveTitle" => {
                if let Some(value) = node.get_string_value()? {
                    self.text_above_title = Some(value);
                }
            }
            "textAlignment" => {
                if let Some(value) = node.get_enum_value()? {
                    self.text_alignment = Some(value);
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
        writer.write_string_value("alternativeText", self.alternative_text.as_deref())?;
        writer.write_bool_value("enableGradientEffect", self.enable_gradient_effect)?;
        writer.write_string_value("imageWebUrl", self.image_web_url.as_deref())?;
        writer.write_enum_value("layout", self.layout)?;
        writer.write_bool_value("showAuthor", self.show_author)?;
        writer.write_bool_value("showPublishedDate", self.show_published_date)?;
        writer.write_bool_value(
            "showTextBlockAboveTitle",
            self.show_text_block_above_title,
        )?;
        writer.write_string_value("textAboveTitle", self.text_above_title.as_deref())?;
        writer.write_enum_value("textAlignment", self.text_alignment)?;
        writer.write_additional_data(&self.additional_data)?;
        Ok(())
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        Some(&mut self.additional_data)
    }
}

/// A modern page stored in the site pages list of a site.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SitePage {
    base_item: BaseItem,
    content_type: Option<ContentTypeInfo>,
    page_layout: Option<PageLayoutType>,
    promotion_kind: Option<PagePromotionType>,
    publishing_state: Option<PublicationFacet>,
    reactions: Option<ReactionsFacet>,
    show_comments: Option<bool>,
    show_recommended_pages: Option<bool>,
    thumbnail_web_url: Option<String>,
    title: Option<String>,
    title_area: Option<TitleArea>,
    web_parts: Option<Vec<AnyWebPart>>,
}

impl SitePage {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.sitePage";

    pub fn new() -> Self {
        let mut page = Self::default();
        page.base_item
            .set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        page
    }

    pub fn from_discriminator(_tag: Option<&str>) -> Self {
        Self::new()
    }

    pub fn base_item(&self) -> &BaseItem {
        &self.base_item
    }

    pub fn base_item_mut(&mut self) -> &mut BaseItem {
        &mut self.base_item
    }

    pub fn id(&self) -> Option<&str> {
        self.base_item.id()
    }

    pub fn set_id(&mut self, value: Option<String>) {
        self.base_item.set_id(value);
    }

    pub fn content_type(&self) -> Option<&ContentTypeInfo> {
        self.content_type.as_ref()
    }

    pub fn set_content_type(&mut self, value: Option<ContentTypeInfo>) {
        self.content_type = value;
    }

    pub fn page_layout(&self) -> Option<PageLayoutType> {
        self.page_layout
    }

    pub fn set_page_layout(&mut self, value: Option<PageLayoutType>) {
        self.page_layout = value;
    }

    pub fn promotion_kind(&self) -> Option<PagePromotionType> {
        self.promotion_kind
    }

    pub fn set_promotion_kind(&mut self, value: Option<PagePromotionType>) {
        self.promotion_kind = value;
    }

    pub fn publishing_state(&self) -> Option<&PublicationFacet> {
        self.publishing_state.as_ref()
    }

    pub fn set_publishing_state(&mut self, value: Option<PublicationFacet>) {
        self.publishing_state = value;
    }

    pub fn reactions(&self) -> Option<&ReactionsFacet> {
        self.reactions.as_ref()
    }

    pub fn set_reactions(&mut self, value: Option<ReactionsFacet>) {
        self.reactions = value;
    }

    pub fn show_comments(&self) -> Option<bool> {
        self.show_comments
    }

    pub fn set_show_comments(&mut self, value: Option<bool>) {
        self.show_comments = value;
    }

    pub fn show_recommended_pages(&self) -> Option<bool> {
        self.show_recommended_pages
    }

    pub fn set_show_recommended_pages(&mut self, value: Option<bool>) {
        self.show_recommended_pages = value;
    }

    pub fn thumbnail_web_url(&self) -> Option<&str> {
        self.thumbnail_web_url.as_deref()
    }

    pub fn set_thumbnail_web_url(&mut self, value: Option<String>) {
        self.thumbnail_web_url = value;
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, value: Option<String>) {
        self.title = value;
    }

    pub fn title_area(&self) -> Option<&TitleArea> {
        self.title_area.as_ref()
    }

    pub fn set_title_area(&mut self, value: Option<TitleArea>) {
        self.title_area = value;
    }

    pub fn web_parts(&self) -> Option<&[AnyWebPart]> {
        self.web_parts.as_deref()
    }

    pub fn set_web_parts(&mut self, value: Option<Vec<AnyWebPart>>) {
        self.web_parts = value;
    }
}

impl Parsable for SitePage {
    fn deserialize_field<N: ParseNode>(
        &mut self,
        field: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match field {
            "contentType" => {
                if let Some(value) =
                    node.get_object_value(ContentTypeInfo::from_discriminator)?
                {
                    self.content_type = Some(value);
                }
            }
            "pageLayout" => {
                if let Some(value) = node.get_enum_value()? {
                    self.page_layout = Some(value);
                }
            }
            "promotionKind" => {
                if let Some(value) = node.get_enum_value()? {
                    self.promotion_kind = Some(value);
                }
            }
            "publishingState" => {
                if let Some(value) =
                    node.get_object_value(PublicationFacet::from_discriminator)?
                {
                    self.publishing_state = Some(value);
                }
            }
            "reactions" => {
                if let Some(value) =
                    node.get_object_value(ReactionsFacet::from_discriminator)?
                {
                    self.reactions = Some(value);
                }
            }
            "showComments" => {
                if let Some(value) = node.get_bool_value()? {
                    self.show_comments = Some(value);
                }
            }
            "showRecommendedPages" => {
                if let Some(value) = node.get_bool_value()? {
                    self.show_recommended_pages = Some(value);
                }
            }
            "thumbnailWebUrl" => {
                if let Some(value) = node.get_string_value()? {
                    self.thumbnail_web_url = Some(value);
                }
            }
            "title" => {
                if let Some(value) = node.get_string_value()? {
                    self.title = Some(value);
                }
            }
            "titleArea" => {
                if let Some(value) = node.get_object_value(TitleArea::from_discriminator)? {
                    self.title_area = Some(value);
                }
            }
            "webParts" => {
                if let Some(value) =
                    node.get_collection_of_object_values(AnyWebPart::from_discriminator)?
                {
                    self.web_parts = Some(value);
                }
            }
            _ => return self.base_item.deserialize_field(field, node),
        }
        Ok(true)
    }

    fn serialize<W: SerializationWriter>(
        &self,
        writer: &mut W,
    ) -> Result<(), SerializationError> {
        self.base_item.serialize(writer)?;
        writer.write_object_value("contentType", self.content_type.as_ref())?;
        writer.write_enum_value("pageLayout", self.page_layout)?;
        writer.write_enum_value("promotionKind", self.promotion_kind)?;
        writer.write_object_value("publishingState", self.publishing_state.as_ref())?;
        writer.write_object_value("reactions", self.reactions.as_ref())?;
        writer.write_bool_value("showComments", self.show_comments)?;
        writer.write_bool_value("showRecommendedPages", self.show_recommended_pages)?;
        writer.write_string_value("thumbnailWebUrl", self.thumbnail_web_url.as_deref())?;
        writer.write_string_value("title", self.title.as_deref())?;
        writer.write_object_value("titleArea", self.title_area.as_ref())?;
        writer.write_collection_of_object_values("webParts", self.web_parts.as_deref())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphbeta_serialization::json::{from_json_value, to_json_value};
    use serde_json::json;

    #[test]
    fn enums_and_facets_roundtrip() {
        let payload = json!({
            "@odata.type": "#microsoft.graph.sitePage",
            "title": "Quarterly update",
            "pageLayout": "article",
            "promotionKind": "newsPost",
            "reactions": {"likeCount": 12, "commentCount": 3},
            "titleArea": {"layout": "colorBlock", "textAlignment": "center"},
        });
        let page: SitePage = from_json_value(&payload, SitePage::from_discriminator).unwrap();
        assert_eq!(page.page_layout(), Some(PageLayoutType::Article));
        assert_eq!(page.promotion_kind(), Some(PagePromotionType::NewsPost));
        assert_eq!(page.reactions().unwrap().like_count(), Some(12));
        assert_eq!(
            page.title_area().unwrap().layout(),
            Some(TitleAreaLayoutType::ColorBlock)
        );

        let back = to_json_value(&page).unwrap();
        assert_eq!(back["pageLayout"], json!("article"));
        assert_eq!(back["titleArea"]["textAlignment"], json!("center"));
        assert!(back.get("showComments").is_none());
    }
}
