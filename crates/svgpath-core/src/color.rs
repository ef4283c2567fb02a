//! This module re-exports the types from the [`rgb`](https://crates.io/crates/rgb) crate.
//!
//! Colors are only carried around for renderers. Nothing in svgpath blends or
//! converts them.

pub use rgb::*;

/// The color black with full opacity
pub const BLACK: RGBA8 = RGBA8 {
    r: 0,
    g: 0,
    b: 0,
    a: 255,
};
/// The color white with full opacity
pub const WHITE: RGBA8 = RGBA8 {
    r: 255,
    g: 255,
    b: 255,
    a: 255,
};
/// A color with no opacity
pub const TRANSPARENT: RGBA8 = RGBA8 {
    r: 0,
    g: 0,
    b: 0,
    a: 0,
};

/// Returns `true` if the color would not be visible when painted.
#[inline]
pub fn is_transparent(color: RGBA8) -> bool {
    color.a == 0
}

/// Creates a color from a packed `0xAARRGGBB` value, the layout used by most
/// platform color integers.
pub const fn from_argb(argb: u32) -> RGBA8 {
    RGBA8 {
        r: ((argb >> 16) & 0xff) as u8,
        g: ((argb >> 8) & 0xff) as u8,
        b: (argb & 0xff) as u8,
        a: ((argb >> 24) & 0xff) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb_unpacks_channels() {
        assert_eq!(from_argb(0xff000000), BLACK);
        assert_eq!(from_argb(0x00000000), TRANSPARENT);
        assert_eq!(
            from_argb(0x80112233),
            RGBA8 {
                r: 0x11,
                g: 0x22,
                b: 0x33,
                a: 0x80
            }
        );
    }

    #[test]
    fn transparency_checks_alpha_only() {
        assert!(is_transparent(TRANSPARENT));
        assert!(!is_transparent(WHITE));
        assert!(is_transparent(RGBA8::new(255, 255, 255, 0)));
    }
}
