

mod budget;
