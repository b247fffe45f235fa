#![allow(dead_code)]

pub mod mock_activator;
pub mod mock_provider;
