//! Run-level orchestration: connect, then one panel per configured frequency.
mod connect;
mod panel;
