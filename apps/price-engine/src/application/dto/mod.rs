//! Data Transfer Objects (DTOs)
//!
//! JSON shapes printed by the command-line interface.

mod monitoring_dto;

pub use monitoring_dto::{DropSignalDto, ObservationDto};
