// Spacebio: keyword search over space biology publications
//
// This is the library root. Each module corresponds to one stage of a
// search cycle, from loading the dataset to rendering the audience view.

pub mod config;
pub mod dataset;
pub mod output;
pub mod pipeline;
pub mod search;
pub mod status;
pub mod text;
pub mod views;
