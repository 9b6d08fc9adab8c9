#![allow(dead_code)]

pub mod integration;
pub mod utils;

/// Index names used by the in-memory store fixtures.
const WEATHER_INDEX: &str = "melbourne_weather";
const TREES_INDEX: &str = "trees_data";
