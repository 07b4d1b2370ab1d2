// Components module - the panels of the home page
//
// Shell components (title bar, status bar, toast) read from App directly.
// Page panels implement the Component trait and receive a RenderContext.

pub mod carousel_panel;
pub mod logs_panel;
pub mod performer_strip;
pub mod schedule_panel;
pub mod scrollbar;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use carousel_panel::CarouselView;
pub use logs_panel::LogsPanel;
pub use performer_strip::PerformerStrip;
pub use schedule_panel::SchedulePanel;
pub use toast::Toast;
