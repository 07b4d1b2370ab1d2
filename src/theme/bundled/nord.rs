//! Nord - Arctic, bluish color palette

pub const THEME: &str = r##"# Nord theme for ticketbooth
# Arctic, bluish color palette

[meta]
name = "Nord"
version = 1
author = "iTerm2-Color-Schemes"

[ui]
background = "#2e3440"
foreground = "#d8dee9"
border = "#4c566a"
border_focused = "#ebcb8b"
title = "#88c0d0"
status_bar = "#d8dee9"
selection_bg = "#434c5e"
selection_fg = "#eceff4"
muted = "#7b88a1"
link = "#81a1c1"

[panels]
carousel = "#ebcb8b"
performers = "#b48ead"
schedule = "#88c0d0"
logs = "#a3be8c"

[logs]
error = "#bf616a"
warn = "#ebcb8b"
info = "#a3be8c"
debug = "#81a1c1"
trace = "#7b88a1"
"##;
