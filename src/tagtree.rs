//! Main module for tagtree library functionality

pub mod ast;
pub mod building;
pub mod config;
pub mod formats;
pub mod lexing;
pub mod processor;
pub mod testing;
