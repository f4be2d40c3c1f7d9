pub mod evaluation;
pub mod periods;

#[cfg(test)]
mod tests {
    #[test]
    fn test_module_structure() {
        assert_eq!(super::evaluation::GET_EVALUATION_REPORT, "get_evaluation_report");
        assert_eq!(super::evaluation::COMPUTE_METRICS, "compute_metrics");
        assert_eq!(super::evaluation::TALLY_OUTCOMES, "tally_outcomes");
        assert_eq!(super::periods::LIST_PERIODS, "list_periods");
        assert_eq!(super::periods::GET_PERIOD, "get_period");
    }
}
