//! Integration tests across entities, components and the event bus

mod bounce_scenario;
mod component_graph;
