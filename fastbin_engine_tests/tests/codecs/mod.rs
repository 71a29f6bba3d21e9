pub mod helpers;

mod malformed;
mod policies;
mod recursion;
mod round_trip;
mod transports;
