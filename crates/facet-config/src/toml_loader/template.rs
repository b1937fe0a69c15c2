//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# facet configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "facet"
# width = 1280           # 64-16384
# height = 720           # 64-16384
# vsync = true

[colors]
# clear = "#000000"

[triangle]
# style = "immediate"    # immediate, buffered, object
# subdivisions = 0
# max_subdivisions = 10  # 0-10
# twist_degrees = 0.0
# twist_step = 5.0       # degrees per key press
# up_color = "#ff0000"
# down_color = "#00ff00"

[sphere]
# grid_nx = 10           # 3-1024
# grid_ny = 10           # 3-1024
# radius = 1.0
# animate = true

[viewer]
# camera_z = 2.0
# degrees_per_pixel = 1.0
# meshes = []            # opened when no -m arguments are given

[material]
# ambient = [0.8, 0.8, 0.0]
# diffuse = [0.8, 0.8, 0.0]
# specular = [0.5, 0.5, 0.5]
# shininess = 50.0       # 1-1000

[keybinds]
# subdivide_more = "2"
# subdivide_less = "1"
# twist_ccw = "9"
# twist_cw = "0"
# grid_x_more = "0"
# grid_x_less = "9"
# grid_y_more = "2"
# grid_y_less = "1"
# zoom_in = "X"
# zoom_out = "Z"
# reset_view = "Space"
# quit = "Escape"

[logging]
# level = "info"         # trace, debug, info, warn, error
# show_fps = false

# Point lights in world space (at most 8). Defining any replaces the
# default three-light rig.
# [[lights]]
# position = [2.0, 2.0, 4.0]
# intensity = [10.0, 10.0, 10.0]
# ambient = [0.01, 0.01, 0.01]
"##
    .to_string()
}
