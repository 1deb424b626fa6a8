pub mod importance_chart;
pub mod metrics_row;
pub mod scenario_table;
pub mod simulation_panel;
pub mod stage_tabs;
