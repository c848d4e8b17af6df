//! Placement of satellite items around the toggle button.
//!
//! Offsets are in pixels relative to the toggle's center, `y` negative going
//! up the screen.

use crate::model::{Anchor, AnimationStyle, WizardConfig};
use crate::reference::SizeClass;
use std::f64::consts::PI;

pub const FAN_RADIUS: f64 = 80.0;
pub const FAN_SWEEP: f64 = PI / 2.5; // 72 degrees, first item straight up

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Offset) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Stack and grid spacing for a size class: button size plus a gap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing {
    pub base: f64,
    pub step: f64,
}

impl Spacing {
    pub fn for_size(size: SizeClass) -> Self {
        let button = size.spec().button as f64;
        Self {
            base: button + 12.0,
            step: button + 6.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub style: AnimationStyle,
    pub anchor: Anchor,
    pub size: SizeClass,
}

impl Layout {
    pub fn new(style: AnimationStyle, anchor: Anchor, size: SizeClass) -> Self {
        Self {
            style,
            anchor,
            size,
        }
    }

    pub fn from_config(config: &WizardConfig) -> Self {
        Self::new(config.animation_style, config.position, config.size)
    }

    /// Angle from vertical for item `index` of `count`; zero when `count <= 1`.
    pub fn fan_angle(index: usize, count: usize) -> f64 {
        let span = count.saturating_sub(1).max(1) as f64;
        FAN_SWEEP * (index as f64 / span)
    }

    /// Offset of item `index` out of `count` items. `index` must be below `count`.
    pub fn offset(&self, index: usize, count: usize) -> Offset {
        let sign = self.anchor.horizontal_sign();
        let spacing = Spacing::for_size(self.size);

        match self.style {
            AnimationStyle::Stack => Offset::new(0.0, -(spacing.base + index as f64 * spacing.step)),
            AnimationStyle::Fan => {
                let angle = Self::fan_angle(index, count);
                Offset::new(
                    sign * angle.sin() * FAN_RADIUS,
                    -angle.cos() * FAN_RADIUS,
                )
            }
            AnimationStyle::Grid => {
                let (row, col) = (index / 2, index % 2);
                Offset::new(
                    sign * col as f64 * spacing.step,
                    -((row + 1) as f64) * spacing.step,
                )
            }
        }
    }
}

/// Free-function form of [`Layout::offset`].
pub fn offset(
    style: AnimationStyle,
    index: usize,
    count: usize,
    anchor: Anchor,
    size: SizeClass,
) -> Offset {
    Layout::new(style, anchor, size).offset(index, count)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub index: usize,
    pub offset: Offset,
}

/// One placement per social link, in link order. Empty when there are no links.
pub fn placements(config: &WizardConfig) -> Vec<Placement> {
    let layout = Layout::from_config(config);
    let count = config.social_links.len();

    (0..count)
        .map(|index| Placement {
            index,
            offset: layout.offset(index, count),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SocialLink;
    use crate::reference::Platform;
    use strum::IntoEnumIterator;

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: Offset, expected: Offset) {
        assert!(
            actual.distance(expected) < EPSILON,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_stack_default_size() {
        let layout = Layout::new(AnimationStyle::Stack, Anchor::BottomRight, SizeClass::Md);
        assert_close(layout.offset(0, 3), Offset::new(0.0, -60.0));
        assert_close(layout.offset(1, 3), Offset::new(0.0, -114.0));
        assert_close(layout.offset(2, 3), Offset::new(0.0, -168.0));
    }

    #[test]
    fn test_stack_ignores_anchor() {
        for index in 0..5 {
            let left = offset(AnimationStyle::Stack, index, 5, Anchor::BottomLeft, SizeClass::Lg);
            let right = offset(AnimationStyle::Stack, index, 5, Anchor::BottomRight, SizeClass::Lg);
            assert_close(left, right);
        }
    }

    #[test]
    fn test_stack_spacing_grows_with_size() {
        let steps: Vec<f64> = SizeClass::iter()
            .map(|size| {
                let layout = Layout::new(AnimationStyle::Stack, Anchor::BottomRight, size);
                layout.offset(0, 2).y - layout.offset(1, 2).y
            })
            .collect();
        assert_eq!(steps, vec![46.0, 54.0, 62.0, 70.0]);
    }

    #[test]
    fn test_single_fan_item_points_straight_up() {
        for anchor in Anchor::iter() {
            let fan = offset(AnimationStyle::Fan, 0, 1, anchor, SizeClass::Md);
            let stack = offset(AnimationStyle::Stack, 0, 1, anchor, SizeClass::Md);
            assert_close(fan, Offset::new(0.0, -FAN_RADIUS));
            assert_eq!(fan.x, stack.x);
        }
    }

    #[test]
    fn test_fan_opens_away_from_anchor() {
        let right = offset(AnimationStyle::Fan, 2, 3, Anchor::BottomRight, SizeClass::Md);
        let left = offset(AnimationStyle::Fan, 2, 3, Anchor::BottomLeft, SizeClass::Md);
        assert!(right.x < 0.0);
        assert!(left.x > 0.0);
        assert_close(left, Offset::new(-right.x, right.y));

        // last item lands at the end of the sweep
        assert_close(
            left,
            Offset::new(FAN_SWEEP.sin() * FAN_RADIUS, -FAN_SWEEP.cos() * FAN_RADIUS),
        );
    }

    #[test]
    fn test_fan_items_stay_on_radius() {
        for index in 0..7 {
            let o = offset(AnimationStyle::Fan, index, 7, Anchor::BottomRight, SizeClass::Sm);
            assert!((o.distance(Offset::default()) - FAN_RADIUS).abs() < EPSILON);
        }
    }

    #[test]
    fn test_grid_two_columns() {
        let layout = Layout::new(AnimationStyle::Grid, Anchor::BottomRight, SizeClass::Md);
        assert_close(layout.offset(0, 5), Offset::new(0.0, -54.0));
        assert_close(layout.offset(1, 5), Offset::new(-54.0, -54.0));
        assert_close(layout.offset(2, 5), Offset::new(0.0, -108.0));
        assert_close(layout.offset(3, 5), Offset::new(-54.0, -108.0));
        assert_close(layout.offset(4, 5), Offset::new(0.0, -162.0));

        let left = Layout::new(AnimationStyle::Grid, Anchor::BottomLeft, SizeClass::Md);
        assert_close(left.offset(1, 5), Offset::new(54.0, -54.0));
    }

    #[test]
    fn test_placements_are_pairwise_distinct() {
        for style in AnimationStyle::iter() {
            for anchor in Anchor::iter() {
                for size in SizeClass::iter() {
                    let layout = Layout::new(style, anchor, size);
                    for count in 0..=16 {
                        let offsets: Vec<Offset> =
                            (0..count).map(|i| layout.offset(i, count)).collect();
                        for (i, a) in offsets.iter().enumerate() {
                            for b in &offsets[i + 1..] {
                                assert!(
                                    a.distance(*b) > 1.0,
                                    "{style} {anchor} {size} n={count}: {a:?} vs {b:?}"
                                );
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_placements_follow_links() {
        let mut config = WizardConfig::default();
        assert_eq!(placements(&config).len(), 3);

        config.social_links.clear();
        assert!(placements(&config).is_empty());

        config.social_links = vec![SocialLink::placeholder(Platform::Email)];
        config.animation_style = AnimationStyle::Fan;
        let single = placements(&config);
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].index, 0);
        assert_close(single[0].offset, Offset::new(0.0, -FAN_RADIUS));
    }
}
