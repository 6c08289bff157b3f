//! # Unit Tests
//! I hate write unit tests in the same place where my other code lives.
//! So by moving all the tests to a dedicated `tests` mod, I can only test public functions.
mod test_chunk_type;
mod test_ordering;
