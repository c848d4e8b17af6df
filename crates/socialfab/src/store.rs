//! The single owner of the live [`WizardConfig`].
//!
//! Every successful mutation builds a fresh immutable snapshot, swaps it in and
//! hands it to every subscribed observer. A failed mutation leaves the current
//! snapshot in place and notifies nobody.

use crate::model::{
    BottomOffset, ColorSelector, CustomColorsPatch, FieldKey, FieldUpdate, HexColor, LinkField,
    LinkLabel, LinkUrl, OffsetError, PreviewUrl, SocialLink, WizardConfig,
};
use crate::reference::Platform;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

pub type Snapshot = Arc<WizardConfig>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("link index {index} is out of range (have {len} links)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("'{value}' is not a valid value for {field}")]
    InvalidEnumValue { field: String, value: String },
    #[error("unknown field '{0}'")]
    UnknownField(String),
    #[error(transparent)]
    Offset(#[from] OffsetError),
}

impl StoreError {
    fn invalid(field: impl ToString, value: &str) -> Self {
        Self::InvalidEnumValue {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&Snapshot)>;

pub struct ConfigStore {
    current: Snapshot,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(WizardConfig::default())
    }
}

impl ConfigStore {
    pub fn new(initial: WizardConfig) -> Self {
        Self {
            current: Arc::new(initial),
            observers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Arc::clone(&self.current)
    }

    /// Registers an observer for every snapshot published from now on.
    pub fn subscribe(&mut self, observer: impl FnMut(&Snapshot) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    pub fn set_field(&mut self, update: FieldUpdate) -> Snapshot {
        log::debug!("set {:?}", update);
        let next = self.current.apply(update);
        self.publish(next)
    }

    /// Textual form of [`Self::set_field`]: `key` names a field, `value` is
    /// parsed into that field's domain.
    pub fn set_field_raw(&mut self, key: &str, value: &str) -> Result<Snapshot, StoreError> {
        let update = parse_update(key, value)?;
        Ok(self.set_field(update))
    }

    pub fn add_social_link(&mut self) -> Snapshot {
        let mut next = WizardConfig::clone(&self.current);
        next.social_links.push(SocialLink::placeholder(Platform::Instagram));
        log::debug!("added link #{}", next.social_links.len() - 1);
        self.publish(next)
    }

    pub fn update_social_link(
        &mut self,
        index: usize,
        field: LinkField,
    ) -> Result<Snapshot, StoreError> {
        let link = self.link(index)?;
        log::debug!("update link #{index}: {:?}", field);

        let mut next = WizardConfig::clone(&self.current);
        next.social_links[index] = link.apply(field);
        Ok(self.publish(next))
    }

    /// Textual form of [`Self::update_social_link`].
    pub fn update_social_link_raw(
        &mut self,
        index: usize,
        field: &str,
        value: &str,
    ) -> Result<Snapshot, StoreError> {
        let field = parse_link_field(field, value)?;
        self.update_social_link(index, field)
    }

    pub fn remove_social_link(&mut self, index: usize) -> Result<Snapshot, StoreError> {
        self.link(index)?;
        log::debug!("remove link #{index}");

        let mut next = WizardConfig::clone(&self.current);
        next.social_links.remove(index);
        Ok(self.publish(next))
    }

    fn link(&self, index: usize) -> Result<&SocialLink, StoreError> {
        self.current
            .social_links
            .get(index)
            .ok_or(StoreError::IndexOutOfRange {
                index,
                len: self.current.social_links.len(),
            })
    }

    fn publish(&mut self, next: WizardConfig) -> Snapshot {
        self.current = Arc::new(next);
        for (_, observer) in &mut self.observers {
            observer(&self.current);
        }
        self.snapshot()
    }
}

fn parse_enum<T: FromStr>(key: FieldKey, value: &str) -> Result<T, StoreError> {
    value
        .trim()
        .parse()
        .map_err(|_| StoreError::invalid(key, value))
}

fn parse_bool(key: FieldKey, value: &str) -> Result<bool, StoreError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(StoreError::invalid(key, value)),
    }
}

/// Accepts `#rgb`, `#rrggbb` or either without the hash; stores `#RRGGBB`.
fn parse_hex(key: FieldKey, value: &str) -> Result<HexColor, StoreError> {
    HexColor::new(value.trim())
        .to_srgb()
        .map(HexColor::from_srgb)
        .ok_or_else(|| StoreError::invalid(key, value))
}

pub fn parse_update(key: &str, value: &str) -> Result<FieldUpdate, StoreError> {
    let key: FieldKey = key
        .trim()
        .parse()
        .map_err(|_| StoreError::UnknownField(key.to_string()))?;

    Ok(match key {
        FieldKey::Size => FieldUpdate::Size(parse_enum(key, value)?),
        FieldKey::Position => FieldUpdate::Position(parse_enum(key, value)?),
        FieldKey::BottomOffset => FieldUpdate::BottomOffset(value.parse::<BottomOffset>()?),
        FieldKey::Color => FieldUpdate::Color(parse_enum::<ColorSelector>(key, value)?),
        FieldKey::Primary => FieldUpdate::CustomColors(CustomColorsPatch {
            primary: Some(parse_hex(key, value)?),
            ..CustomColorsPatch::default()
        }),
        FieldKey::Secondary => FieldUpdate::CustomColors(CustomColorsPatch {
            secondary: Some(parse_hex(key, value)?),
            ..CustomColorsPatch::default()
        }),
        FieldKey::Hover => FieldUpdate::CustomColors(CustomColorsPatch {
            hover: Some(parse_hex(key, value)?),
            ..CustomColorsPatch::default()
        }),
        FieldKey::ShowLabels => FieldUpdate::ShowLabels(parse_bool(key, value)?),
        FieldKey::AnimationStyle => FieldUpdate::AnimationStyle(parse_enum(key, value)?),
        FieldKey::ToggleIcon => FieldUpdate::ToggleIcon(parse_enum(key, value)?),
        FieldKey::BrandColors => FieldUpdate::BrandColors(parse_bool(key, value)?),
        FieldKey::PreviewUrl => FieldUpdate::PreviewUrl(PreviewUrl::normalize(value)),
    })
}

pub fn parse_link_field(field: &str, value: &str) -> Result<LinkField, StoreError> {
    match field.trim().to_ascii_lowercase().as_str() {
        "platform" => value
            .trim()
            .parse::<Platform>()
            .map(LinkField::Platform)
            .map_err(|_| StoreError::invalid("platform", value)),
        "url" => Ok(LinkField::Url(LinkUrl::new(value))),
        "label" => Ok(LinkField::Label(LinkLabel::new(value))),
        _ => Err(StoreError::UnknownField(field.to_string())),
    }
}
