use consts::MOBILE_BREAKPOINT_PX;

/// Open/closed state of the collapsible site navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuToggle {
    open: bool,
}

impl MenuToggle {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Following a link closes the menu, but only on mobile-sized viewports.
    pub fn link_clicked(&mut self, viewport_width: f64) {
        if viewport_width <= MOBILE_BREAKPOINT_PX {
            self.open = false;
        }
    }
}
