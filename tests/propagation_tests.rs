use flow_status::prelude::*;
use flow_status::{is_non_default, DEFAULT_EXIT_CODES};

fn preserving_executor(aggregate: &str) -> FlowExecutor {
    FlowExecutor::new(CustomStatusPreservingPolicy)
        .with_initial_exit_status(Some(ExitStatus::new(aggregate)))
}

#[test]
fn test_classify_absent_code() {
    assert_eq!(classify(None), CodeClass::NonDefault);
}

#[test]
fn test_classify_every_default_code() {
    for code in DEFAULT_EXIT_CODES {
        assert_eq!(classify(Some(code)), CodeClass::Default);
    }
    assert_eq!(classify(Some("MY_CUSTOM")), CodeClass::NonDefault);
}

#[test]
fn test_default_code_qualifies_custom_aggregate() {
    let mut executor = preserving_executor("MY_CUSTOM");
    executor.add_exit_status("COMPLETED");

    let expected = ExitStatus::new("MY_CUSTOM").and(&ExitStatus::COMPLETED);
    assert_eq!(executor.exit_status(), Some(&expected));
}

#[test]
fn test_custom_code_does_not_replace_default_aggregate() {
    let mut executor = preserving_executor("COMPLETED");
    executor.add_exit_status("MY_CUSTOM");
    assert_eq!(executor.exit_status(), Some(&ExitStatus::COMPLETED));
}

#[test]
fn test_custom_code_does_not_replace_custom_aggregate() {
    let mut executor = preserving_executor("CUSTOM_A");
    executor.add_exit_status("CUSTOM_B");
    assert_eq!(executor.exit_status(), Some(&ExitStatus::new("CUSTOM_A")));
}

#[test]
fn test_absent_aggregate_stays_absent() {
    let mut executor = FlowExecutor::new(CustomStatusPreservingPolicy).with_initial_exit_status(None);
    executor.add_exit_status("MY_CUSTOM");
    assert_eq!(executor.exit_status(), None);

    executor.add_exit_status("STOPPED");
    assert_eq!(executor.exit_status(), None);
}

#[test]
fn test_non_triggering_add_is_idempotent() {
    let mut once = preserving_executor("COMPLETED");
    once.add_exit_status("MY_CUSTOM");

    let mut twice = preserving_executor("COMPLETED");
    twice.add_exit_status("MY_CUSTOM");
    twice.add_exit_status("MY_CUSTOM");

    assert_eq!(once.exit_status(), twice.exit_status());
}

#[test]
fn test_run_status_set_on_every_branch() {
    for (execution_code, flow) in [
        ("COMPLETED", "FAILED"),
        ("MY_CUSTOM", "FAILED"),
        ("UNKNOWN", "STOPPED"),
        ("MY_CUSTOM", "COMPLETED"),
    ] {
        let mut executor = preserving_executor("EXECUTING");
        let mut execution = JobExecution::new("job").with_exit_status(ExitStatus::new(execution_code));
        let flow_status = FlowExecutionStatus::new(flow);

        executor
            .update_job_execution_status(&mut execution, &flow_status)
            .unwrap();

        assert_eq!(execution.status().as_str(), flow);
    }
}

#[test]
fn test_exit_status_updated_iff_prior_code_is_custom() {
    for execution_code in ["COMPLETED", "FAILED", "UNKNOWN", "MY_CUSTOM", "COMPLETED WITH SKIPS"] {
        let mut executor = preserving_executor("EXECUTING");
        let mut execution = JobExecution::new("job").with_exit_status(ExitStatus::new(execution_code));

        executor
            .update_job_execution_status(&mut execution, &FlowExecutionStatus::stopped())
            .unwrap();

        if is_non_default(Some(execution_code)) {
            assert_eq!(execution.exit_status(), &ExitStatus::STOPPED, "{execution_code}");
        } else {
            assert_eq!(execution.exit_status().exit_code(), execution_code);
        }
    }
}

#[test]
fn test_standard_policy_promotes_every_status() {
    let mut executor = FlowExecutor::new(StandardPolicy);
    let mut execution = JobExecution::new("job").with_exit_status(ExitStatus::COMPLETED);

    executor.add_exit_status("COMPLETED");
    executor
        .update_job_execution_status(&mut execution, &FlowExecutionStatus::failed())
        .unwrap();

    assert_eq!(execution.status(), BatchStatus::Failed);
    assert_eq!(execution.exit_status(), &ExitStatus::FAILED);
}

#[test]
fn test_policies_diverge_on_same_sequence() {
    let events = [
        StatusEvent::Step("COMPLETED".to_string()),
        StatusEvent::Flow("FAILED".to_string()),
    ];

    let mut standard = FlowExecutor::new(StandardPolicy);
    let mut standard_execution = JobExecution::new("job").with_exit_status(ExitStatus::COMPLETED);
    standard.replay(&events, &mut standard_execution).unwrap();

    let mut preserving = FlowExecutor::new(CustomStatusPreservingPolicy);
    let mut preserving_execution = JobExecution::new("job").with_exit_status(ExitStatus::COMPLETED);
    preserving.replay(&events, &mut preserving_execution).unwrap();

    assert_eq!(standard_execution.exit_status(), &ExitStatus::FAILED);
    assert_eq!(preserving_execution.exit_status(), &ExitStatus::COMPLETED);
    assert_eq!(standard_execution.status(), preserving_execution.status());
}
