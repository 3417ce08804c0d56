pub mod distance_table;
pub mod frontier;
pub mod visited_set;
