mod edge_case_tests;
mod interface_tests;
