//! HTML front end (Askama templates)

pub mod handlers;
pub mod view_models;
