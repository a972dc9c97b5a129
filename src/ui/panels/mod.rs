// SafetyBoard - ui/panels/mod.rs

pub mod controls;
pub mod dialogs;
pub mod header;
pub mod incidents;
pub mod report_form;
