//! Course timetable planner server.
//!
//! A web application that answers: "Given the courses I want this term,
//! which lecture sections should I enrol in?"

pub mod catalogue;
pub mod config;
pub mod domain;
pub mod planner;
pub mod travel;
pub mod web;
