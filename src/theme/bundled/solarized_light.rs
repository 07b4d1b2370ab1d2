//! Solarized Light - Ethan Schoonover's precision color palette (light variant)

pub const THEME: &str = r##"# Solarized Light theme for ticketbooth
# Ethan Schoonover's precision color palette (light variant)

[meta]
name = "Solarized Light"
version = 1
author = "iTerm2-Color-Schemes"

[ui]
background = "#fdf6e3"
foreground = "#657b83"
border = "#93a1a1"
border_focused = "#b58900"
title = "#586e75"
status_bar = "#657b83"
selection_bg = "#eee8d5"
selection_fg = "#073642"
muted = "#93a1a1"
link = "#268bd2"

[panels]
carousel = "#b58900"
performers = "#d33682"
schedule = "#268bd2"
logs = "#859900"

[logs]
error = "#dc322f"
warn = "#cb4b16"
info = "#859900"
debug = "#2aa198"
trace = "#93a1a1"
"##;
