//! Session logic: state, event classification, and the actions each server
//! message calls for.

pub mod action;
pub mod event;
pub mod handler;
pub mod state;
