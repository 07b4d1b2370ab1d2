//! Terminal ANSI - Uses your terminal's native ANSI colors

pub const THEME: &str = r##"# Terminal ANSI theme for ticketbooth
# Uses "ansi:X" colors so the page inherits your terminal palette:
# - ansi:0-7 = standard colors, ansi:8-15 = bright variants
# - ansi:fg / ansi:bg = terminal defaults

[meta]
name = "Terminal ANSI"
version = 1
author = "ticketbooth"

[ui]
background = "ansi:bg"
foreground = "ansi:fg"
border = "ansi:8"
border_focused = "ansi:3"
title = "ansi:6"
status_bar = "ansi:fg"
selection_bg = "ansi:8"
selection_fg = "ansi:fg"
muted = "ansi:8"
link = "ansi:4"

[panels]
carousel = "ansi:3"
performers = "ansi:5"
schedule = "ansi:6"
logs = "ansi:2"

[logs]
error = "ansi:1"
warn = "ansi:3"
info = "ansi:2"
debug = "ansi:4"
trace = "ansi:8"
"##;
