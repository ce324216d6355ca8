mod broken_history;
mod decorate;
mod formats;
mod linear_history;
