mod closed_sets;
mod headers;
mod request_options;
