/// Everything a key press can ask a scene (or the app) to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    SubdivideMore,
    SubdivideLess,
    TwistCcw,
    TwistCw,
    GridXMore,
    GridXLess,
    GridYMore,
    GridYLess,
    ZoomIn,
    ZoomOut,
    ResetView,
    Quit,
}

impl Action {
    /// Action for a `[keybinds]` field name.
    pub fn from_config_name(name: &str) -> Option<Self> {
        Some(match name {
            "subdivide_more" => Action::SubdivideMore,
            "subdivide_less" => Action::SubdivideLess,
            "twist_ccw" => Action::TwistCcw,
            "twist_cw" => Action::TwistCw,
            "grid_x_more" => Action::GridXMore,
            "grid_x_less" => Action::GridXLess,
            "grid_y_more" => Action::GridYMore,
            "grid_y_less" => Action::GridYLess,
            "zoom_in" => Action::ZoomIn,
            "zoom_out" => Action::ZoomOut,
            "reset_view" => Action::ResetView,
            "quit" => Action::Quit,
            _ => return None,
        })
    }
}
