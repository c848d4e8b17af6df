//! Renders a configuration snapshot as an embeddable component declaration.
//!
//! Attribute order is fixed: size, position, bottomOffset, color,
//! customColors (custom only), socialLinks, showLabels, animationStyle,
//! toggleIcon, brandColors. Snapshot-diffing consumers depend on it.
//!
//! String values are written verbatim between quotes. Quotes and backslashes
//! inside URLs or labels are not escaped.

use crate::model::{CustomColors, SocialLink, WizardConfig};

pub const COMPONENT: &str = "FloatingSocialButton";
pub const IMPORT_PATH: &str = "./components/floating-social-button";

const ATTR_INDENT: &str = "      ";
const ENTRY_INDENT: &str = "        ";

fn string_attr(name: &str, value: impl std::fmt::Display) -> String {
    format!("{ATTR_INDENT}{name}=\"{value}\"")
}

fn expr_attr(name: &str, value: impl std::fmt::Display) -> String {
    format!("{ATTR_INDENT}{name}={{{value}}}")
}

fn custom_colors_block(colors: &CustomColors) -> Vec<String> {
    vec![
        format!("{ATTR_INDENT}customColors={{{{"),
        format!("{ENTRY_INDENT}primary: '{}',", colors.primary),
        format!("{ENTRY_INDENT}secondary: '{}',", colors.secondary),
        format!("{ENTRY_INDENT}hover: '{}'", colors.hover),
        format!("{ATTR_INDENT}}}}}"),
    ]
}

fn link_entry(link: &SocialLink) -> String {
    format!(
        "{ENTRY_INDENT}{{ platform: '{}', url: '{}', label: '{}' }}",
        link.platform, link.url, link.label
    )
}

fn social_links_block(links: &[SocialLink]) -> Vec<String> {
    let entries = links.iter().map(link_entry).collect::<Vec<_>>().join(",\n");

    let mut lines = vec![format!("{ATTR_INDENT}socialLinks={{[")];
    if !entries.is_empty() {
        lines.push(entries);
    }
    lines.push(format!("{ATTR_INDENT}]}}"));
    lines
}

/// Pure: the same snapshot always yields the same text.
pub fn synthesize(config: &WizardConfig) -> String {
    let mut attrs = vec![
        string_attr("size", config.size),
        string_attr("position", config.position),
        expr_attr("bottomOffset", config.bottom_offset.px()),
        string_attr("color", config.color),
    ];
    if let Some(colors) = config.active_custom_colors() {
        attrs.extend(custom_colors_block(colors));
    }
    attrs.extend(social_links_block(&config.social_links));
    attrs.extend([
        expr_attr("showLabels", config.show_labels),
        string_attr("animationStyle", config.animation_style),
        string_attr("toggleIcon", config.toggle_icon),
        expr_attr("brandColors", config.brand_colors),
    ]);

    format!(
        "import {{ {COMPONENT} }} from '{IMPORT_PATH}'\n\
         \n\
         export default function MyPage() {{\n\
         \x20 return (\n\
         \x20   <{COMPONENT}\n\
         {attrs}\n\
         \x20   />\n\
         \x20 )\n\
         }}\n",
        attrs = attrs.join("\n"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ColorSelector, HexColor, LinkLabel};
    use crate::reference::ColorPreset;

    const DEFAULT_ARTIFACT: &str = r#"import { FloatingSocialButton } from './components/floating-social-button'

export default function MyPage() {
  return (
    <FloatingSocialButton
      size="md"
      position="bottom-right"
      bottomOffset={32}
      color="blue"
      socialLinks={[
        { platform: 'instagram', url: 'https://instagram.com/yourhandle', label: 'Instagram' },
        { platform: 'twitter', url: 'https://twitter.com/yourhandle', label: 'Twitter' },
        { platform: 'linkedin', url: 'https://linkedin.com/in/yourprofile', label: 'LinkedIn' }
      ]}
      showLabels={false}
      animationStyle="stack"
      toggleIcon="share"
      brandColors={false}
    />
  )
}
"#;

    #[test]
    fn test_default_artifact() {
        assert_eq!(synthesize(&WizardConfig::default()), DEFAULT_ARTIFACT);
    }

    #[test]
    fn test_default_links_in_order() {
        let code = synthesize(&WizardConfig::default());
        let platforms: Vec<&str> = code
            .lines()
            .filter_map(|line| line.trim().strip_prefix("{ platform: '"))
            .filter_map(|rest| rest.split('\'').next())
            .collect();
        assert_eq!(platforms, vec!["instagram", "twitter", "linkedin"]);
    }

    #[test]
    fn test_synthesis_is_repeatable() {
        let mut config = WizardConfig::default();
        config.color = ColorSelector::Custom;
        config.show_labels = true;
        assert_eq!(synthesize(&config), synthesize(&config.clone()));
    }

    #[test]
    fn test_custom_block_only_for_custom() {
        let mut config = WizardConfig::default();
        config.custom_colors.primary = HexColor::new("#112233");
        assert!(!synthesize(&config).contains("customColors"));
        assert!(!synthesize(&config).contains("#112233"));

        config.color = ColorSelector::Custom;
        let code = synthesize(&config);
        assert!(code.contains("      color=\"custom\"\n      customColors={{\n"));
        assert!(code.contains("        primary: '#112233',\n"));
        assert!(code.contains("        hover: '#1D4ED8'\n      }}\n      socialLinks"));
        for preset in ["\"blue\"", "\"teal\""] {
            assert!(!code.contains(preset));
        }

        config.color = ColorSelector::Preset(ColorPreset::Teal);
        let code = synthesize(&config);
        assert!(code.contains("color=\"teal\"\n      socialLinks"));
    }

    #[test]
    fn test_attribute_order() {
        let mut config = WizardConfig::default();
        config.color = ColorSelector::Custom;
        let code = synthesize(&config);
        let order = [
            "size=",
            "position=",
            "bottomOffset=",
            "color=",
            "customColors=",
            "socialLinks=",
            "showLabels=",
            "animationStyle=",
            "toggleIcon=",
            "brandColors=",
        ];
        let positions: Vec<usize> = order.iter().map(|a| code.find(a).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_empty_links() {
        let mut config = WizardConfig::default();
        config.social_links.clear();
        let code = synthesize(&config);
        assert!(code.contains("      socialLinks={[\n      ]}\n"));
    }

    #[test]
    fn test_literals() {
        let mut config = WizardConfig::default();
        config.show_labels = true;
        config.brand_colors = true;
        config.bottom_offset = "120".parse().unwrap();
        let code = synthesize(&config);
        assert!(code.contains("showLabels={true}"));
        assert!(code.contains("brandColors={true}"));
        assert!(code.contains("bottomOffset={120}"));
    }

    #[test]
    fn test_strings_are_embedded_verbatim() {
        let mut config = WizardConfig::default();
        config.social_links[0].label = LinkLabel::new("Rock 'n' Roll");
        let code = synthesize(&config);
        assert!(code.contains("label: 'Rock 'n' Roll'"));
    }
}
