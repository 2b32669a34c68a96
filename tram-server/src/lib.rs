//! Tram journey planner server.
//!
//! A web application that answers: "how do I get between these two
//! tram stops, what will it cost in zones, and when does the next
//! tram leave?"

pub mod cache;
pub mod config;
pub mod data;
pub mod departures;
pub mod domain;
pub mod fares;
pub mod geometry;
pub mod network;
pub mod planner;
pub mod repository;
pub mod resolve;
pub mod tfgm;
pub mod web;
