pub mod force_graph;
