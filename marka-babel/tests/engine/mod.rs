//! Tests spanning the registry and both conversion directions

mod registry;
mod roundtrip;
