//! # Menu Styles
//!
//! The open/closed dependent inline styles of the side menu. Static layout
//! and the transitions themselves live in `assets/styles.css`.

/// Inline styles for one render of the side menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuStyles {
    /// Style of the full-viewport backdrop.
    pub overlay: &'static str,
    /// Style of the sliding panel.
    pub panel: &'static str,
}

impl MenuStyles {
    const OPEN: Self = Self {
        overlay: "opacity: 1; visibility: visible; pointer-events: auto;",
        panel: "transform: translateX(0);",
    };

    // The overlay stays mounted while hidden so both elements can animate.
    const CLOSED: Self = Self {
        overlay: "opacity: 0; visibility: hidden; pointer-events: none;",
        panel: "transform: translateX(-100%);",
    };

    /// Styles for the given visibility.
    #[must_use]
    pub const fn for_state(is_open: bool) -> Self {
        if is_open {
            Self::OPEN
        } else {
            Self::CLOSED
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_panel_is_off_screen() {
        let styles = MenuStyles::for_state(false);

        assert!(styles.panel.contains("translateX(-100%)"));
        assert!(styles.overlay.contains("visibility: hidden"));
        assert!(styles.overlay.contains("pointer-events: none"));
        assert!(styles.overlay.contains("opacity: 0"));
    }

    #[test]
    fn test_open_panel_is_in_place() {
        let styles = MenuStyles::for_state(true);

        assert!(styles.panel.contains("translateX(0)"));
        assert!(styles.overlay.contains("visibility: visible"));
        assert!(styles.overlay.contains("pointer-events: auto"));
        assert!(styles.overlay.contains("opacity: 1"));
    }
}
