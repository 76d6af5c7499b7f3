/*
[INPUT]:  TUI app state for screen renderers
[OUTPUT]: Screen render functions and module exports
[POS]:    TUI UI module root
[UPDATE]: When a screen renderer is added
*/

mod interstitial;
mod logs;
mod task_form;
mod task_list;

pub(in crate::tui) use interstitial::draw_interstitial;
pub(in crate::tui) use logs::draw_logs;
pub(in crate::tui) use task_form::draw_task_form;
pub(in crate::tui) use task_list::draw_task_list;
