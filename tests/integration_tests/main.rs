mod decomposition_properties;
mod workflow_test;
