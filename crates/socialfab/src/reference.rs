//! Static lookup tables: platforms, color presets, toggle icons and size classes.
//!
//! Every tag is a closed enum resolved by exhaustive `match`, so there is no
//! such thing as an unknown platform or preset once a value has been parsed.

use palette::Srgb;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use strum::{Display as StrumDisplay, EnumIter, EnumString};

fn unpack(packed: u32) -> Srgb<u8> {
    let [_, r, g, b] = packed.to_be_bytes();
    Srgb::new(r, g, b)
}

/// Formats a color as an uppercase `#RRGGBB` literal.
pub fn hex(color: Srgb<u8>) -> String {
    format!("#{color:X}")
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeDisplay,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
pub enum Platform {
    #[strum(to_string = "instagram", serialize = "ig")]
    Instagram,
    #[strum(to_string = "twitter", serialize = "x")]
    Twitter,
    #[strum(to_string = "facebook", serialize = "fb")]
    Facebook,
    #[strum(to_string = "linkedin")]
    LinkedIn,
    #[strum(to_string = "youtube", serialize = "yt")]
    YouTube,
    #[strum(to_string = "github", serialize = "gh")]
    GitHub,
    #[strum(to_string = "whatsapp")]
    WhatsApp,
    #[strum(to_string = "email", serialize = "mail")]
    Email,
    #[strum(to_string = "phone", serialize = "tel")]
    Phone,
}

pub struct PlatformInfo {
    pub name: &'static str,
    pub icon: &'static str,
    pub brand: Srgb<u8>,
    pub placeholder_url: &'static str,
}

impl Platform {
    pub fn info(self) -> PlatformInfo {
        let (name, icon, (r, g, b), placeholder_url) = match self {
            Self::Instagram => (
                "Instagram",
                "instagram",
                (0xE4, 0x40, 0x5F),
                "https://instagram.com/yourhandle",
            ),
            Self::Twitter => (
                "Twitter",
                "twitter",
                (0x1D, 0xA1, 0xF2),
                "https://twitter.com/yourhandle",
            ),
            Self::Facebook => (
                "Facebook",
                "facebook",
                (0x18, 0x77, 0xF2),
                "https://facebook.com/yourpage",
            ),
            Self::LinkedIn => (
                "LinkedIn",
                "linkedin",
                (0x0A, 0x66, 0xC2),
                "https://linkedin.com/in/yourprofile",
            ),
            Self::YouTube => (
                "YouTube",
                "youtube",
                (0xFF, 0x00, 0x00),
                "https://youtube.com/@yourchannel",
            ),
            Self::GitHub => (
                "GitHub",
                "github",
                (0x18, 0x17, 0x17),
                "https://github.com/yourusername",
            ),
            Self::WhatsApp => (
                "WhatsApp",
                "message-circle",
                (0x25, 0xD3, 0x66),
                "https://wa.me/1234567890",
            ),
            Self::Email => (
                "Email",
                "mail",
                (0xEA, 0x43, 0x35),
                "mailto:you@example.com",
            ),
            Self::Phone => ("Phone", "phone", (0x34, 0xA8, 0x53), "tel:+1234567890"),
        };

        PlatformInfo {
            name,
            icon,
            brand: Srgb::new(r, g, b),
            placeholder_url,
        }
    }

    pub fn display_name(self) -> &'static str {
        self.info().name
    }

    pub fn brand_color(self) -> Srgb<u8> {
        self.info().brand
    }
}

/// Gradient presets. The first variant is the session default.
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
pub enum ColorPreset {
    #[default]
    Blue,
    Emerald,
    Rose,
    Amber,
    Violet,
    Indigo,
    Cyan,
    Slate,
    Orange,
    Pink,
    Teal,
    Lime,
    Gold,
    Crimson,
    Fuchsia,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub from: Srgb<u8>,
    pub to: Srgb<u8>,
}

impl ColorPreset {
    pub fn label(self) -> &'static str {
        match self {
            Self::Blue => "Azure",
            Self::Emerald => "Forest",
            Self::Rose => "Savage",
            Self::Amber => "Sunlight",
            Self::Violet => "Cosmos",
            Self::Indigo => "Electric",
            Self::Cyan => "Ice",
            Self::Slate => "Steel",
            Self::Orange => "Fire",
            Self::Pink => "Neon",
            Self::Teal => "Lagoon",
            Self::Lime => "Acid",
            Self::Gold => "Midas",
            Self::Crimson => "Blood",
            Self::Fuchsia => "Cyber",
        }
    }

    pub fn gradient(self) -> Gradient {
        let (from, to) = match self {
            Self::Blue => (0x1E40AF, 0x3B82F6),
            Self::Emerald => (0x065F46, 0x10B981),
            Self::Rose => (0x9F1239, 0xF43F5E),
            Self::Amber => (0x92400E, 0xF59E0B),
            Self::Violet => (0x5B21B6, 0x8B5CF6),
            Self::Indigo => (0x3730A3, 0x6366F1),
            Self::Cyan => (0x0E7490, 0x06B6D4),
            Self::Slate => (0x1E293B, 0x475569),
            Self::Orange => (0x9A3412, 0xF97316),
            Self::Pink => (0x9D174D, 0xEC4899),
            Self::Teal => (0x0D9488, 0x2DD4BF),
            Self::Lime => (0x4D7C0F, 0xA3E635),
            Self::Gold => (0xA16207, 0xEAB308),
            Self::Crimson => (0x991B1B, 0xEF4444),
            Self::Fuchsia => (0x86198F, 0xE879F9),
        };

        Gradient {
            from: unpack(from),
            to: unpack(to),
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
pub enum ToggleIcon {
    #[default]
    Share,
    Message,
    Zap,
    Sparkles,
    Grid,
}

impl ToggleIcon {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Share => "share-2",
            Self::Message => "message-circle",
            Self::Zap => "zap",
            Self::Sparkles => "sparkles",
            Self::Grid => "grid-3x3",
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
    PartialOrd,
    Ord,
    Default,
    SerializeDisplay,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SizeClass {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

/// Pixel dimensions of a size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpec {
    pub button: u32,
    pub icon: u32,
    pub social_icon: u32,
}

impl SizeClass {
    pub fn spec(self) -> SizeSpec {
        let (button, icon, social_icon) = match self {
            Self::Sm => (40, 16, 14),
            Self::Md => (48, 20, 16),
            Self::Lg => (56, 24, 18),
            Self::Xl => (64, 28, 20),
        };
        SizeSpec {
            button,
            icon,
            social_icon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_platform_deserialization() {
        let cases = vec![
            ("\"instagram\"", Platform::Instagram),
            ("\"Instagram\"", Platform::Instagram),
            ("\"x\"", Platform::Twitter),
            ("\"LinkedIn\"", Platform::LinkedIn),
            ("\"tel\"", Platform::Phone),
        ];

        for (json, expected) in cases {
            let deserialized: Platform = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
    }

    #[test]
    fn test_platform_tags_round_trip_through_display() {
        for platform in Platform::iter() {
            assert_eq!(platform.to_string().parse::<Platform>().unwrap(), platform);
        }
        assert_eq!(Platform::LinkedIn.to_string(), "linkedin");
    }

    #[test]
    fn test_unknown_tags_are_rejected() {
        assert!("myspace".parse::<Platform>().is_err());
        assert!("custom".parse::<ColorPreset>().is_err());
        assert!("huge".parse::<SizeClass>().is_err());
    }

    #[test]
    fn test_first_preset_is_default() {
        assert_eq!(ColorPreset::iter().next(), Some(ColorPreset::default()));
        assert_eq!(hex(ColorPreset::Blue.gradient().from), "#1E40AF");
        assert_eq!(hex(ColorPreset::Blue.gradient().to), "#3B82F6");
    }

    #[test]
    fn test_brand_colors() {
        assert_eq!(hex(Platform::Instagram.brand_color()), "#E4405F");
        assert_eq!(hex(Platform::GitHub.brand_color()), "#181717");
        assert_eq!(hex(Platform::LinkedIn.brand_color()), "#0A66C2");
        assert_eq!(hex(Srgb::new(0, 5, 10)), "#00050A");
        assert_eq!(Platform::WhatsApp.info().icon, "message-circle");
    }

    #[test]
    fn test_size_classes_grow() {
        let buttons: Vec<u32> = SizeClass::iter().map(|s| s.spec().button).collect();
        assert_eq!(buttons, vec![40, 48, 56, 64]);
    }
}
