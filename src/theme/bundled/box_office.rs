//! Box Office - warm marquee palette, the default theme

pub const THEME: &str = r##"# Box Office theme for ticketbooth
# Warm marquee lights on a dark lobby

[meta]
name = "Box Office"
version = 1
author = "ticketbooth"

[ui]
background = "#1c1b22"
foreground = "#e6e1cf"
border = "#5c5866"
border_focused = "#f2b84b"
title = "#f2b84b"
status_bar = "#c9c2ad"
selection_bg = "#3a3543"
selection_fg = "#fff4d6"
muted = "#8a8494"
link = "#6fc3df"
border_type = "rounded"

[panels]
carousel = "#f2b84b"
performers = "#e8776d"
schedule = "#6fc3df"
logs = "#9bcf7e"

[logs]
error = "#e8596d"
warn = "#f2b84b"
info = "#9bcf7e"
debug = "#6fc3df"
trace = "#8a8494"
"##;
