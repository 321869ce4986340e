// Bikeshare trip loading and filtering
// Author: Gabriel Demetrios Lafis

mod calendar;
mod city;
mod derive;
mod loader;

pub use calendar::*;
pub use city::*;
pub use derive::*;
pub use loader::*;
