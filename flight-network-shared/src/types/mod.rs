//! Core records of the flight network graph.

pub mod airport;
pub mod city;
pub mod flight;
pub mod route;
