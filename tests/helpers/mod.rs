//! Shared test helpers: recording fakes of every collaborator and source
//! fixtures with known line offsets.

#![allow(dead_code)]

pub mod fakes;
