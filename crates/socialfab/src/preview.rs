//! The flattened view a preview renderer draws from.

use crate::geometry::{self, Offset};
use crate::model::{
    Anchor, AnimationStyle, BottomOffset, ColorSelector, LinkLabel, SocialLink, WizardConfig,
};
use crate::reference::{self, ColorPreset, Gradient, SizeClass, SizeSpec, ToggleIcon};
use palette::Srgb;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use strum::{Display as StrumDisplay, EnumIter, EnumString};

/// Whether the widget is pinned to the viewport or to its container.
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
pub enum PositionMode {
    #[default]
    Fixed,
    #[strum(to_string = "relative", serialize = "absolute")]
    Relative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Gradient(Gradient),
    Solid(Srgb<u8>),
}

impl Paint {
    /// Fill for the toggle button and, without brand colors, every item.
    /// An unreadable custom primary falls back to the default preset.
    pub fn for_selector(config: &WizardConfig) -> Self {
        match config.color {
            ColorSelector::Custom => match config.custom_colors.primary.to_srgb() {
                Some(color) => Self::Solid(color),
                None => {
                    log::debug!(
                        "custom primary '{}' is not a color, using default preset",
                        config.custom_colors.primary
                    );
                    Self::Gradient(ColorPreset::default().gradient())
                }
            },
            ColorSelector::Preset(preset) => Self::Gradient(preset.gradient()),
        }
    }

    pub fn for_item(config: &WizardConfig, link: &SocialLink) -> Self {
        if config.brand_colors {
            Self::Solid(link.platform.brand_color())
        } else {
            Self::for_selector(config)
        }
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gradient(g) => write!(
                f,
                "linear-gradient(135deg, {}, {})",
                reference::hex(g.from),
                reference::hex(g.to)
            ),
            Self::Solid(color) => f.write_str(&reference::hex(*color)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewItem {
    pub link: SocialLink,
    pub offset: Offset,
    pub paint: Paint,
    pub icon: &'static str,
    pub label: Option<LinkLabel>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewFrame {
    pub mode: PositionMode,
    pub size: SizeClass,
    pub dimensions: SizeSpec,
    pub position: Anchor,
    pub bottom_offset: BottomOffset,
    pub color: ColorSelector,
    pub toggle_icon: ToggleIcon,
    pub toggle_paint: Paint,
    pub animation_style: AnimationStyle,
    pub show_labels: bool,
    pub brand_colors: bool,
    pub preview_url: Option<String>,
    pub items: Vec<PreviewItem>,
}

impl PreviewFrame {
    pub fn build(config: &WizardConfig, mode: PositionMode) -> Self {
        let items = geometry::placements(config)
            .into_iter()
            .zip(&config.social_links)
            .map(|(placement, link)| PreviewItem {
                link: link.clone(),
                offset: placement.offset,
                paint: Paint::for_item(config, link),
                icon: link.platform.info().icon,
                label: config.show_labels.then(|| link.label.clone()),
            })
            .collect();

        Self {
            mode,
            size: config.size,
            dimensions: config.size.spec(),
            position: config.position,
            bottom_offset: config.bottom_offset,
            color: config.color,
            toggle_icon: config.toggle_icon,
            toggle_paint: Paint::for_selector(config),
            animation_style: config.animation_style,
            show_labels: config.show_labels,
            brand_colors: config.brand_colors,
            preview_url: config.preview_url.as_ref().map(|u| u.to_string()),
            items,
        }
    }
}

/// Preset id with its human label, e.g. `blue (Azure)`.
pub fn color_name(color: ColorSelector) -> String {
    match color {
        ColorSelector::Preset(preset) => format!("{preset} ({})", preset.label()),
        ColorSelector::Custom => color.to_string(),
    }
}

impl fmt::Display for PreviewFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let px = self.dimensions;
        writeln!(
            f,
            "{} widget, {} {}px from bottom, {} layout",
            self.mode, self.position, self.bottom_offset, self.animation_style
        )?;
        writeln!(
            f,
            "size: {} (button {}px, icon {}px, link icons {}px)",
            self.size, px.button, px.icon, px.social_icon
        )?;
        writeln!(
            f,
            "toggle: {} [{}] {} {}",
            self.toggle_icon,
            self.toggle_icon.icon(),
            color_name(self.color),
            self.toggle_paint
        )?;
        if let Some(url) = &self.preview_url {
            writeln!(f, "page: {url}")?;
        }
        if self.items.is_empty() {
            return writeln!(f, "  (no links)");
        }
        for (i, item) in self.items.iter().enumerate() {
            write!(
                f,
                "  #{i} {:<9} ({:>7.1}, {:>7.1}) {}",
                item.link.platform.display_name(),
                item.offset.x,
                item.offset.y,
                item.paint
            )?;
            if let Some(label) = &item.label {
                write!(f, " \"{label}\"")?;
            }
            writeln!(f, " -> {}", item.link.url)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HexColor;
    use crate::reference::Platform;

    #[test]
    fn test_default_frame() {
        let frame = PreviewFrame::build(&WizardConfig::default(), PositionMode::Fixed);
        assert_eq!(frame.items.len(), 3);
        assert_eq!(frame.dimensions.button, 48);
        assert_eq!(frame.items[0].offset, Offset::new(0.0, -60.0));
        assert_eq!(frame.items[1].icon, "twitter");
        assert!(frame.items.iter().all(|i| i.label.is_none()));
        assert_eq!(
            frame.toggle_paint,
            Paint::Gradient(ColorPreset::Blue.gradient())
        );
    }

    #[test]
    fn test_brand_colors_override_items_only() {
        let config = WizardConfig {
            brand_colors: true,
            ..WizardConfig::default()
        };
        let frame = PreviewFrame::build(&config, PositionMode::Relative);
        assert_eq!(frame.items[0].paint, Paint::Solid(Platform::Instagram.brand_color()));
        assert_eq!(frame.toggle_paint, Paint::Gradient(ColorPreset::Blue.gradient()));
    }

    #[test]
    fn test_custom_primary_is_solid() {
        let mut config = WizardConfig::default();
        config.custom_colors.primary = HexColor::new("#112233");
        assert_eq!(
            Paint::for_selector(&config),
            Paint::Gradient(ColorPreset::Blue.gradient())
        );

        config.color = ColorSelector::Custom;
        assert_eq!(Paint::for_selector(&config).to_string(), "#112233");

        config.custom_colors.primary = HexColor::new("nope");
        assert_eq!(
            Paint::for_selector(&config),
            Paint::Gradient(ColorPreset::default().gradient())
        );
    }

    #[test]
    fn test_labels_follow_toggle() {
        let config = WizardConfig {
            show_labels: true,
            ..WizardConfig::default()
        };
        let frame = PreviewFrame::build(&config, PositionMode::Fixed);
        assert_eq!(frame.items[2].label.as_ref().unwrap().as_str(), "LinkedIn");
        assert!(frame.to_string().contains("\"LinkedIn\""));
    }

    #[test]
    fn test_empty_frame_renders() {
        let config = WizardConfig {
            social_links: Vec::new(),
            ..WizardConfig::default()
        };
        let frame = PreviewFrame::build(&config, PositionMode::Fixed);
        assert!(frame.items.is_empty());
        assert!(frame.to_string().contains("(no links)"));
    }

    #[test]
    fn test_listing_names_preset_and_sizes() {
        let config = WizardConfig {
            size: SizeClass::Lg,
            color: ColorSelector::Preset(ColorPreset::Teal),
            ..WizardConfig::default()
        };
        let listing = PreviewFrame::build(&config, PositionMode::Fixed).to_string();
        assert!(listing.contains("size: lg (button 56px, icon 24px, link icons 18px)"));
        assert!(listing.contains("teal (Lagoon)"));
        assert!(listing.contains("#0 Instagram"));

        assert_eq!(color_name(ColorSelector::Custom), "custom");
    }

    #[test]
    fn test_position_mode_parsing() {
        assert_eq!("absolute".parse::<PositionMode>().unwrap(), PositionMode::Relative);
        assert_eq!("FIXED".parse::<PositionMode>().unwrap(), PositionMode::Fixed);
        let mode: PositionMode = serde_json::from_str("\"relative\"").unwrap();
        assert_eq!(mode, PositionMode::Relative);
    }
}
