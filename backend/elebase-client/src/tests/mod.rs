mod diagnostics;
mod response;
mod support;
