//! Typed wire models for the graph beta API surface.
//!
//! Every record mirrors one remote resource, complex type, or enum:
//! optional typed fields with getter/setter pairs, a zero-value factory
//! that pre-sets the `@odata.type` discriminator, field-by-field
//! deserialization that delegates unknown fields to the embedded base
//! record, and serialization in fixed field order. Polymorphic families
//! are `Any*` sum types whose factories dispatch on the wire
//! discriminator and fall back to the family base.

mod base_item;
mod collections;
mod common;
mod entity;
mod enums;
mod group;
mod identity;
mod site;
mod site_page;
mod user;
mod web_part;

pub mod ediscovery;
pub mod identity_governance;
pub mod managed_tenants;
pub mod search;
pub mod tenant_admin;

pub use base_item::{AnyBaseItem, BaseItem};
pub use collections::{
    BaseCollectionPaginationCountResponse, ManagedDeviceComplianceCollectionResponse,
    SiteCollectionResponse, SitePageCollectionResponse,
    UserProcessingResultCollectionResponse,
};
pub use common::{ActionUrl, KeyValuePair, ResultInfo};
pub use entity::{AnyEntity, Entity};
pub use enums::{
    DevicePlatformType, PageLayoutType, PagePromotionType, TitleAreaLayoutType,
    TitleAreaTextAlignmentType,
};
pub use group::Group;
pub use identity::{Identity, IdentitySet};
pub use site::{Deleted, Root, SharepointIds, Site, SiteCollection, SiteSettings};
pub use site_page::{ContentTypeInfo, PublicationFacet, ReactionsFacet, SitePage, TitleArea};
pub use user::User;
pub use web_part::{AnyWebPart, StandardWebPart, TextWebPart, WebPart};
