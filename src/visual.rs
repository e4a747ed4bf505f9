//! Derived visual state driven by window events.
//!
//! Nothing here touches the DOM, the components feed raw event values in and
//! read styling decisions out.

/// Vertical scroll offset (px) past which the nav bar turns solid.
pub const SCROLL_THRESHOLD: f64 = 20.0;
/// Multiplier applied to the pointer's viewport fraction.
pub const POINTER_SCALE: f64 = 20.0;
/// Tailwind `md` breakpoint, the mobile menu is only reachable below it.
pub const MOBILE_BREAKPOINT_QUERY: &str = "(min-width: 768px)";

pub const NAV_SOLID: &str = "bg-black/95 shadow-lg backdrop-blur-sm";
pub const NAV_TRANSPARENT: &str = "bg-transparent";
pub const MENU_OPEN: &str = "max-h-64 opacity-100";
pub const MENU_CLOSED: &str = "max-h-0 opacity-0";

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

pub fn nav_style(scrolled: bool) -> &'static str {
    if scrolled {
        NAV_SOLID
    } else {
        NAV_TRANSPARENT
    }
}

/// Next menu state after a press of the hamburger button.
pub fn toggle(open: bool) -> bool {
    !open
}

pub fn menu_style(open: bool) -> &'static str {
    if open {
        MENU_OPEN
    } else {
        MENU_CLOSED
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerOffset {
    pub x: f64,
    pub y: f64,
}

impl PointerOffset {
    /// Scale the pointer position to `[0, POINTER_SCALE]` on each axis.
    pub fn from_viewport(client_x: f64, client_y: f64, width: f64, height: f64) -> Self {
        Self {
            x: scaled_fraction(client_x, width),
            y: scaled_fraction(client_y, height),
        }
    }

    pub fn inverted(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }

    /// Inline CSS transform for a decorative layer.
    pub fn translate(self) -> String {
        format!("translate({}px, {}px)", self.x, self.y)
    }
}

fn scaled_fraction(pos: f64, extent: f64) -> f64 {
    // a zero-size viewport would otherwise give NaN/inf
    if extent <= 0.0 {
        return 0.0;
    }
    pos / extent * POINTER_SCALE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_threshold_boundary() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(21.0));
        assert!(is_scrolled(20.5));
        assert_eq!(nav_style(is_scrolled(20.0)), NAV_TRANSPARENT);
        assert_eq!(nav_style(is_scrolled(21.0)), NAV_SOLID);
    }

    #[test]
    fn test_menu_toggle_parity() {
        let mut open = false;
        for i in 1..=6 {
            open = toggle(open);
            assert_eq!(open, i % 2 == 1);
        }
        assert!(!open);
        assert!(toggle(false));
        assert!(!toggle(true));
        assert_eq!(menu_style(open), MENU_CLOSED);
        assert_eq!(menu_style(toggle(open)), MENU_OPEN);
    }

    #[test]
    fn test_pointer_center() {
        let offset = PointerOffset::from_viewport(640.0, 360.0, 1280.0, 720.0);
        assert_eq!(offset, PointerOffset { x: 10.0, y: 10.0 });
        assert_eq!(offset.translate(), "translate(10px, 10px)");
        assert_eq!(offset.inverted().translate(), "translate(-10px, -10px)");
    }

    #[test]
    fn test_pointer_corners() {
        let origin = PointerOffset::from_viewport(0.0, 0.0, 800.0, 600.0);
        assert_eq!(origin, PointerOffset::default());
        let far = PointerOffset::from_viewport(800.0, 600.0, 800.0, 600.0);
        assert_eq!(far, PointerOffset { x: 20.0, y: 20.0 });
    }

    #[test]
    fn test_pointer_zero_viewport() {
        let offset = PointerOffset::from_viewport(10.0, 10.0, 0.0, 0.0);
        assert_eq!(offset, PointerOffset::default());
        assert!(offset.x.is_finite() && offset.y.is_finite());
    }
}
