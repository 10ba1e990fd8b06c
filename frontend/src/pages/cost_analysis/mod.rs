mod panel;

pub use panel::CostAnalysisPanel;
