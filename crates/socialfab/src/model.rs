use crate::reference::{self, ColorPreset, Platform, SizeClass, ToggleIcon};
use derive_more::{AsRef, Deref, Display, From, Into};
use palette::Srgb;
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString};
use thiserror::Error;

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct HexColor(String);

crate::impl_string_newtype!(HexColor);

impl HexColor {
    /// Parses `#rgb`, `#rrggbb` or the same without the hash.
    pub fn to_srgb(&self) -> Option<Srgb<u8>> {
        self.trim().parse::<Srgb<u8>>().ok()
    }

    pub fn from_srgb(color: Srgb<u8>) -> Self {
        Self(reference::hex(color))
    }
}

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct LinkUrl(String);

crate::impl_string_newtype!(LinkUrl);

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct LinkLabel(String);

crate::impl_string_newtype!(LinkLabel);

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct PreviewUrl(String);

crate::impl_string_newtype!(PreviewUrl);

impl PreviewUrl {
    /// Trims the input and prepends `https://` when no scheme is given.
    /// Blank input means "no preview target".
    pub fn normalize(raw: &str) -> Option<Self> {
        let url = raw.trim();
        if url.is_empty() {
            return None;
        }
        if url.starts_with("http") {
            Some(Self::new(url))
        } else {
            Some(Self::new(format!("https://{url}")))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: Platform,
    pub url: LinkUrl,
    pub label: LinkLabel,
}

impl SocialLink {
    pub fn new(platform: Platform, url: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            platform,
            url: LinkUrl::new(url),
            label: LinkLabel::new(label),
        }
    }

    /// A link with the platform's placeholder URL and display name.
    pub fn placeholder(platform: Platform) -> Self {
        let info = platform.info();
        Self::new(platform, info.placeholder_url, info.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomColors {
    pub primary: HexColor,
    pub secondary: HexColor,
    pub hover: HexColor,
}

impl Default for CustomColors {
    fn default() -> Self {
        Self {
            primary: HexColor::new("#1E40AF"),
            secondary: HexColor::new("#3B82F6"),
            hover: HexColor::new("#1D4ED8"),
        }
    }
}

/// Partial update of [`CustomColors`]; `None` members keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomColorsPatch {
    pub primary: Option<HexColor>,
    pub secondary: Option<HexColor>,
    pub hover: Option<HexColor>,
}

impl CustomColorsPatch {
    pub fn primary(color: HexColor) -> Self {
        Self {
            primary: Some(color),
            ..Self::default()
        }
    }

    pub fn apply(self, base: &CustomColors) -> CustomColors {
        CustomColors {
            primary: self.primary.unwrap_or_else(|| base.primary.clone()),
            secondary: self.secondary.unwrap_or_else(|| base.secondary.clone()),
            hover: self.hover.unwrap_or_else(|| base.hover.clone()),
        }
    }
}

/// Either a preset id or the `custom` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub enum ColorSelector {
    Preset(ColorPreset),
    Custom,
}

impl ColorSelector {
    pub const CUSTOM: &'static str = "custom";

    pub fn is_custom(self) -> bool {
        matches!(self, Self::Custom)
    }
}

impl Default for ColorSelector {
    fn default() -> Self {
        Self::Preset(ColorPreset::default())
    }
}

impl fmt::Display for ColorSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preset(preset) => write!(f, "{preset}"),
            Self::Custom => f.write_str(Self::CUSTOM),
        }
    }
}

impl FromStr for ColorSelector {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case(Self::CUSTOM) {
            Ok(Self::Custom)
        } else {
            s.parse().map(Self::Preset)
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    SerializeDisplay,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Anchor {
    BottomLeft,
    #[default]
    BottomRight,
}

impl Anchor {
    /// Horizontal direction items spread in: away from the screen edge.
    pub fn horizontal_sign(self) -> f64 {
        match self {
            Self::BottomLeft => 1.0,
            Self::BottomRight => -1.0,
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    SerializeDisplay,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AnimationStyle {
    Fan,
    #[default]
    Stack,
    Grid,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OffsetError {
    #[error("offset is not a whole number of pixels: {0}")]
    NotANumber(#[from] ParseIntError),
    #[error("offset {0}px is outside 0..=200px")]
    OutOfRange(u32),
}

/// Distance in pixels from the bottom of the viewport, `0..=200` in steps of 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct BottomOffset(u32);

impl BottomOffset {
    pub const MAX: u32 = 200;
    pub const STEP: u32 = 4;

    /// Rejects values above [`Self::MAX`] and snaps the rest to the nearest step.
    pub fn new(px: u32) -> Result<Self, OffsetError> {
        if px > Self::MAX {
            return Err(OffsetError::OutOfRange(px));
        }
        let snapped = (px + Self::STEP / 2) / Self::STEP * Self::STEP;
        Ok(Self(snapped.min(Self::MAX)))
    }

    pub fn px(self) -> u32 {
        self.0
    }
}

impl Default for BottomOffset {
    fn default() -> Self {
        Self(32)
    }
}

impl TryFrom<u32> for BottomOffset {
    type Error = OffsetError;

    fn try_from(px: u32) -> Result<Self, Self::Error> {
        Self::new(px)
    }
}

impl From<BottomOffset> for u32 {
    fn from(offset: BottomOffset) -> Self {
        offset.0
    }
}

impl fmt::Display for BottomOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BottomOffset {
    type Err = OffsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let px: u32 = s.trim().trim_end_matches("px").parse()?;
        Self::new(px)
    }
}

/// The full widget configuration. One instance is live per session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardConfig {
    pub size: SizeClass,
    pub position: Anchor,
    pub bottom_offset: BottomOffset,
    pub color: ColorSelector,
    pub custom_colors: CustomColors,
    pub social_links: Vec<SocialLink>,
    pub show_labels: bool,
    pub animation_style: AnimationStyle,
    pub toggle_icon: ToggleIcon,
    pub brand_colors: bool,
    #[serde(default)]
    pub preview_url: Option<PreviewUrl>,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            size: SizeClass::Md,
            position: Anchor::BottomRight,
            bottom_offset: BottomOffset::default(),
            color: ColorSelector::default(),
            custom_colors: CustomColors::default(),
            social_links: vec![
                SocialLink::placeholder(Platform::Instagram),
                SocialLink::placeholder(Platform::Twitter),
                SocialLink::placeholder(Platform::LinkedIn),
            ],
            show_labels: false,
            animation_style: AnimationStyle::Stack,
            toggle_icon: ToggleIcon::Share,
            brand_colors: false,
            preview_url: None,
        }
    }
}

/// Top-level field names accepted by the textual mutation entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, StrumDisplay)]
#[strum(ascii_case_insensitive)]
pub enum FieldKey {
    #[strum(to_string = "size")]
    Size,
    #[strum(to_string = "position", serialize = "anchor")]
    Position,
    #[strum(to_string = "bottomOffset", serialize = "bottom-offset", serialize = "offset")]
    BottomOffset,
    #[strum(to_string = "color")]
    Color,
    #[strum(to_string = "customColors.primary", serialize = "primary")]
    Primary,
    #[strum(to_string = "customColors.secondary", serialize = "secondary")]
    Secondary,
    #[strum(to_string = "customColors.hover", serialize = "hover")]
    Hover,
    #[strum(to_string = "showLabels", serialize = "show-labels", serialize = "labels")]
    ShowLabels,
    #[strum(to_string = "animationStyle", serialize = "animation-style", serialize = "animation")]
    AnimationStyle,
    #[strum(to_string = "toggleIcon", serialize = "toggle-icon", serialize = "icon")]
    ToggleIcon,
    #[strum(to_string = "brandColors", serialize = "brand-colors")]
    BrandColors,
    #[strum(to_string = "previewUrl", serialize = "preview-url", serialize = "url")]
    PreviewUrl,
}

/// A typed replacement of one top-level field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Size(SizeClass),
    Position(Anchor),
    BottomOffset(BottomOffset),
    Color(ColorSelector),
    CustomColors(CustomColorsPatch),
    ShowLabels(bool),
    AnimationStyle(AnimationStyle),
    ToggleIcon(ToggleIcon),
    BrandColors(bool),
    PreviewUrl(Option<PreviewUrl>),
}

/// A typed replacement of one field of a [`SocialLink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkField {
    Platform(Platform),
    Url(LinkUrl),
    Label(LinkLabel),
}

impl WizardConfig {
    pub fn apply(&self, update: FieldUpdate) -> Self {
        let mut next = self.clone();
        match update {
            FieldUpdate::Size(size) => next.size = size,
            FieldUpdate::Position(position) => next.position = position,
            FieldUpdate::BottomOffset(offset) => next.bottom_offset = offset,
            FieldUpdate::Color(color) => next.color = color,
            FieldUpdate::CustomColors(patch) => next.custom_colors = patch.apply(&self.custom_colors),
            FieldUpdate::ShowLabels(show) => next.show_labels = show,
            FieldUpdate::AnimationStyle(style) => next.animation_style = style,
            FieldUpdate::ToggleIcon(icon) => next.toggle_icon = icon,
            FieldUpdate::BrandColors(brand) => next.brand_colors = brand,
            FieldUpdate::PreviewUrl(url) => next.preview_url = url,
        }
        next
    }

    /// Custom colors when they are the active selection, otherwise `None`.
    pub fn active_custom_colors(&self) -> Option<&CustomColors> {
        self.color.is_custom().then_some(&self.custom_colors)
    }
}

impl SocialLink {
    pub fn apply(&self, field: LinkField) -> Self {
        let mut next = self.clone();
        match field {
            LinkField::Platform(platform) => next.platform = platform,
            LinkField::Url(url) => next.url = url,
            LinkField::Label(label) => next.label = label,
        }
        next
    }
}
