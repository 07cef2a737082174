pub mod date_utils;
pub mod icons;
pub mod tab_host;
