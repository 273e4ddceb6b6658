pub mod domain;
pub mod engine;
pub mod heuristics;
pub mod observer;
pub mod propagate;
pub mod search;
pub mod stats;
pub mod work_list;
