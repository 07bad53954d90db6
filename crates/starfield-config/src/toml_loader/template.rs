//! Default TOML config template with documentation comments.

/// Generate the default TOML config content with comments.
pub(super) fn default_config_toml() -> String {
    r##"# Starfield Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Starfield"
# width = 480            # 64-7680
# height = 480           # 64-4320
# background = "#1a1a1a"

[field]
# star_count = 500       # 1-20000
# seed = 1234            # omit for a random field each run
# star_radius = 0.01     # 0.0001-0.5
# resolution = 16        # polygon sides, 3-256
# initial_velocity = [0.0, 0.0, 0.0]

[camera]
# projection = "gpu"     # gpu, cpu
# near = 0.1             # 0.001-1.0
# far = 10000.0          # 10-100000
# base_fov = 45.0        # 10-170
# fov_speed_gain = 360.0 # 0-1000
# max_fov = 179.0        # 10-179

[controls]
# mouse_look = true
# mouse_sensitivity_x = 0.01
# mouse_sensitivity_y = 0.01
# acceleration = 0.01    # per frame
# max_velocity_xy = 0.05
# max_velocity_z = 0.1
# roll_step = 0.5        # degrees per frame
# resize_step = 0.0005
# deceleration_decay = 0.90
# deceleration_threshold = 0.01

[keybinds]
# forward = "W"
# backward = "S"
# strafe_left = "A"
# strafe_right = "D"
# rise = "R"
# sink = "F"
# roll_left = "Q"
# roll_right = "E"
# grow = "="
# shrink = "-"
# decelerate = "Space"
# quit = "Escape"

[performance]
# frame_rate = 144       # 30-360

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
    .to_string()
}
