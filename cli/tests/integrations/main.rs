mod compose;
mod list;
mod solve;
