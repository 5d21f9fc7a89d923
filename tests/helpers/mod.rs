#![allow(dead_code)]

pub mod host_helpers;
pub mod source_fixtures;
