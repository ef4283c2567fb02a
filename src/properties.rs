use svgpath_core::color::{self, RGBA8};

/// The shape used where two stroked segments meet.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// The shape at the open ends of a stroke.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineCap {
    Butt,
    Round,
    #[default]
    Square,
}

/// Style attributes a renderer applies to a path.
///
/// Every field is optional. A `None` field is taken from the group the path
/// belongs to, and from [`ResolvedRenderProperties::default`] when the group
/// does not set it either. The default value sets every field; use
/// [`RenderProperties::inherit`] for a path that should follow its group.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderProperties {
    pub stroke_join: Option<LineJoin>,
    pub stroke_cap: Option<LineCap>,
    pub stroke_width: Option<f64>,
    pub stroke_color: Option<RGBA8>,
    pub fill_color: Option<RGBA8>,
    /// In the range `[0.0, 1.0]`.
    pub opacity: Option<f64>,
}

impl Default for RenderProperties {
    fn default() -> Self {
        ResolvedRenderProperties::default().into()
    }
}

impl RenderProperties {
    /// Properties with no field set.
    pub const fn inherit() -> Self {
        Self {
            stroke_join: None,
            stroke_cap: None,
            stroke_width: None,
            stroke_color: None,
            fill_color: None,
            opacity: None,
        }
    }

    /// Fills in every unset field, first from `group` and then from the
    /// defaults.
    ///
    /// The opacity of the path and the group are averaged when both are set.
    pub fn resolve(&self, group: Option<&RenderProperties>) -> ResolvedRenderProperties {
        let defaults = ResolvedRenderProperties::default();
        let group = group.copied().unwrap_or_else(RenderProperties::inherit);

        let opacity = match (self.opacity, group.opacity) {
            (Some(path), Some(group)) => (path + group) / 2.0,
            (Some(opacity), None) | (None, Some(opacity)) => opacity,
            (None, None) => defaults.opacity,
        };

        ResolvedRenderProperties {
            stroke_join: self
                .stroke_join
                .or(group.stroke_join)
                .unwrap_or(defaults.stroke_join),
            stroke_cap: self
                .stroke_cap
                .or(group.stroke_cap)
                .unwrap_or(defaults.stroke_cap),
            stroke_width: self
                .stroke_width
                .or(group.stroke_width)
                .unwrap_or(defaults.stroke_width),
            stroke_color: self
                .stroke_color
                .or(group.stroke_color)
                .unwrap_or(defaults.stroke_color),
            fill_color: self
                .fill_color
                .or(group.fill_color)
                .unwrap_or(defaults.fill_color),
            opacity,
        }
    }
}

/// [`RenderProperties`] with every field decided.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedRenderProperties {
    pub stroke_join: LineJoin,
    pub stroke_cap: LineCap,
    pub stroke_width: f64,
    pub stroke_color: RGBA8,
    pub fill_color: RGBA8,
    pub opacity: f64,
}

impl Default for ResolvedRenderProperties {
    fn default() -> Self {
        Self {
            stroke_join: LineJoin::Miter,
            stroke_cap: LineCap::Square,
            stroke_width: 1.0,
            stroke_color: color::BLACK,
            fill_color: color::TRANSPARENT,
            opacity: 1.0,
        }
    }
}

impl ResolvedRenderProperties {
    pub fn has_fill(&self) -> bool {
        !color::is_transparent(self.fill_color)
    }

    pub fn has_stroke(&self) -> bool {
        !color::is_transparent(self.stroke_color) && self.stroke_width > 0.0
    }
}

impl From<ResolvedRenderProperties> for RenderProperties {
    fn from(p: ResolvedRenderProperties) -> Self {
        Self {
            stroke_join: Some(p.stroke_join),
            stroke_cap: Some(p.stroke_cap),
            stroke_width: Some(p.stroke_width),
            stroke_color: Some(p.stroke_color),
            fill_color: Some(p.fill_color),
            opacity: Some(p.opacity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sets_every_field() {
        let props = RenderProperties::default();
        assert_eq!(props.stroke_join, Some(LineJoin::Miter));
        assert_eq!(props.stroke_cap, Some(LineCap::Square));
        assert_eq!(props.stroke_width, Some(1.0));
        assert_eq!(props.stroke_color, Some(color::BLACK));
        assert_eq!(props.fill_color, Some(color::TRANSPARENT));
        assert_eq!(props.opacity, Some(1.0));
    }

    #[test]
    fn inherit_falls_back_to_defaults() {
        let resolved = RenderProperties::inherit().resolve(None);
        assert_eq!(resolved, ResolvedRenderProperties::default());
        assert!(resolved.has_stroke());
        assert!(!resolved.has_fill());
    }

    #[test]
    fn path_wins_over_group() {
        let path = RenderProperties {
            stroke_width: Some(3.0),
            ..RenderProperties::inherit()
        };
        let group = RenderProperties {
            stroke_width: Some(5.0),
            fill_color: Some(color::WHITE),
            stroke_cap: Some(LineCap::Round),
            ..RenderProperties::inherit()
        };

        let resolved = path.resolve(Some(&group));
        assert_eq!(resolved.stroke_width, 3.0);
        assert_eq!(resolved.fill_color, color::WHITE);
        assert_eq!(resolved.stroke_cap, LineCap::Round);
        assert_eq!(resolved.stroke_join, LineJoin::Miter);
        assert!(resolved.has_fill());
    }

    #[test]
    fn opacity_is_averaged() {
        let path = RenderProperties {
            opacity: Some(1.0),
            ..RenderProperties::inherit()
        };
        let group = RenderProperties {
            opacity: Some(0.5),
            ..RenderProperties::inherit()
        };

        assert_eq!(path.resolve(Some(&group)).opacity, 0.75);
        assert_eq!(path.resolve(None).opacity, 1.0);
        assert_eq!(RenderProperties::inherit().resolve(Some(&group)).opacity, 0.5);
    }

    #[test]
    fn transparent_stroke_is_not_drawn() {
        let props = RenderProperties {
            stroke_color: Some(color::TRANSPARENT),
            ..RenderProperties::default()
        };
        assert!(!props.resolve(None).has_stroke());

        let props = RenderProperties {
            stroke_width: Some(0.0),
            ..RenderProperties::default()
        };
        assert!(!props.resolve(None).has_stroke());
    }
}
