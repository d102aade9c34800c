//! Connection acceptor: binds the socket and feeds connections to the handler
//! one at a time.

pub mod listener;
