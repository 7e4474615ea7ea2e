mod content;
mod errors;
mod geo;
mod helpers;
