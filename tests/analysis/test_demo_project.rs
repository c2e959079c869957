// Tests over a whole demo Kotlin file with every documented call shape.
use throwguard_core::tree::SyntaxTree;
use throwguard_core::types::NodeId;
use throwguard_enforce::config::{AnalyzerConfig, CHECKED_EXCEPTION_FQN};
use throwguard_enforce::types::{Exemption, HandledBy, SiteOutcome};
use throwguard_enforce::violations::check_call_site;

use super::common::{analyzer, Project};

/// Call nodes of interest in the demo file, in declaration order.
struct Demo {
    tree: SyntaxTree,
    assign_and_dont_catch: NodeId,
    dont_catch: NodeId,
    in_try_catch: NodeId,
    declare_throws: NodeId,
    call_safely: NodeId,
    call_safely_with_return: NodeId,
    in_safe_scope: NodeId,
    not_safe: NodeId,
    helper_block_invoke: NodeId,
    safe_scope_block_invoke: NodeId,
    println: NodeId,
}

fn demo() -> Demo {
    let mut p = Project::new("app/src/main/java/com/keyboardr/kotlinexceptiontest/KotlinFunctions.kt");

    // fun callAssignAndDontCatch() { val result = doThingThatReturnsThrowing() }
    let f = p.b.function(None, "callAssignAndDontCatch", &[]);
    let stmt = p.b.block(f);
    let assign_and_dont_catch = p.b.call(stmt, "doThingThatReturnsThrowing", Some(p.returns_throwing));

    // fun callAndDontCatch() { doThingThrowingException() }
    let f = p.b.function(None, "callAndDontCatch", &[]);
    let dont_catch = p.b.call(f, "doThingThrowingException", Some(p.throwing));

    // fun callInTryCatch() { try { ... } catch (e: CheckedException) {} }
    let f = p.b.function(None, "callInTryCatch", &[]);
    let t = p.try_catch_checked(f);
    let in_try_catch = p.b.call(t, "doThingThrowingException", Some(p.throwing));

    // @Throws(CheckedException::class) fun callButDeclareThrows() { ... }
    let f = p.b.function(None, "callButDeclareThrows", &[CHECKED_EXCEPTION_FQN]);
    let declare_throws = p.b.call(f, "doThingThrowingException", Some(p.throwing));

    // fun doCallSafely() { callSafely { doThingThrowingException() } }
    let f = p.b.function(None, "doCallSafely", &[]);
    let (helper, contract) = (p.call_safely, Some(p.checked_block));
    let l = p.closure_arg(f, "callSafely", helper, contract);
    let call_safely = p.b.call(l, "doThingThrowingException", Some(p.throwing));

    // fun doCallSafelyWithReturn() { val result = callSafely { doThingThatReturnsThrowing() } }
    let f = p.b.function(None, "doCallSafelyWithReturn", &[]);
    let stmt = p.b.block(f);
    let l = p.closure_arg(stmt, "callSafely", helper, contract);
    let call_safely_with_return = p.b.call(l, "doThingThatReturnsThrowing", Some(p.returns_throwing));

    // fun doCallInSafeScope() { callInSafeScope { doThingThrowingException() } }
    let f = p.b.function(None, "doCallInSafeScope", &[]);
    let (helper, contract) = (p.call_in_safe_scope, Some(p.suspend_function0));
    let l = p.closure_arg(f, "callInSafeScope", helper, contract);
    let in_safe_scope = p.b.call(l, "doThingThrowingException", Some(p.throwing));

    // fun doCallNotSafe() { callNotSafe { doThingThrowingException() } }
    let f = p.b.function(None, "doCallNotSafe", &[]);
    let (helper, contract) = (p.call_not_safe, Some(p.function0));
    let l = p.closure_arg(f, "callNotSafe", helper, contract);
    let not_safe = p.b.call(l, "doThingThrowingException", Some(p.throwing));

    // fun <T> callSafely(block: CheckedBlock<T>) = try { Result.success(block()) } catch (...) { ... }
    let f = p.b.function(None, "callSafely", &[]);
    let t = p.try_catch_checked(f);
    let success = p.b.call(t, "success", None);
    let helper_block_invoke = p.b.call(success, "block", Some(p.checked_block_invoke));

    // @SafeForCheckedException fun callInSafeScope(block: suspend () -> Unit) { safeScope.launch { block() } }
    let f = p.b.function(None, "callInSafeScope", &[]);
    let launch = p.b.call(f, "launch", None);
    let l = p.b.lambda(launch, Some(p.suspend_function0));
    let safe_scope_block_invoke = p.b.call(l, "block", Some(p.suspend_function0_invoke));

    // private fun handleException(...) { println("caught in safeScope") }
    let f = p.b.function(None, "handleException", &[]);
    let println = p.b.call(f, "println", Some(p.println));

    Demo {
        tree: p.build(),
        assign_and_dont_catch,
        dont_catch,
        in_try_catch,
        declare_throws,
        call_safely,
        call_safely_with_return,
        in_safe_scope,
        not_safe,
        helper_block_invoke,
        safe_scope_block_invoke,
        println,
    }
}

#[test]
fn test_demo_reports_exactly_the_three_unhandled_calls() {
    let demo = demo();
    let report = analyzer().analyze_tree(&demo.tree);

    let callees: Vec<&str> = report.violations.iter().map(|v| v.callee.as_str()).collect();
    assert_eq!(
        callees,
        vec![
            "doThingThatReturnsThrowing",
            "doThingThrowingException",
            "doThingThrowingException",
        ]
    );
}

#[test]
fn test_demo_counters() {
    let demo = demo();
    let info = analyzer().analyze_tree(&demo.tree).info;

    // 8 demo calls, 4 helper calls (callSafely x2, callInSafeScope, callNotSafe),
    // block() x2, success, launch, println.
    assert_eq!(info.call_sites, 17);
    assert_eq!(info.checked_calls, 9);
    assert_eq!(info.handled, 3);
    assert_eq!(info.exempted, 3);
    assert_eq!(info.unresolved, 2);
    assert_eq!(info.skipped_malformed, 0);
}

#[test]
fn test_demo_outcomes_per_site() {
    let demo = demo();
    let config = AnalyzerConfig::default();
    let outcome = |id| check_call_site(&demo.tree, id, &config, None);

    assert!(matches!(outcome(demo.assign_and_dont_catch), SiteOutcome::Violation(_)));
    assert!(matches!(outcome(demo.dont_catch), SiteOutcome::Violation(_)));
    assert!(matches!(outcome(demo.not_safe), SiteOutcome::Violation(_)));

    assert!(matches!(outcome(demo.in_try_catch), SiteOutcome::Handled(HandledBy::Catch { .. })));
    assert!(matches!(
        outcome(demo.declare_throws),
        SiteOutcome::Handled(HandledBy::Declaration { .. })
    ));
    assert!(matches!(
        outcome(demo.helper_block_invoke),
        SiteOutcome::Handled(HandledBy::Catch { .. })
    ));

    assert!(matches!(
        outcome(demo.call_safely),
        SiteOutcome::Exempt(Exemption::ThrowingContract { .. })
    ));
    assert!(matches!(
        outcome(demo.call_safely_with_return),
        SiteOutcome::Exempt(Exemption::ThrowingContract { .. })
    ));
    assert!(matches!(
        outcome(demo.in_safe_scope),
        SiteOutcome::Exempt(Exemption::SafeMarker { .. })
    ));

    assert!(matches!(outcome(demo.safe_scope_block_invoke), SiteOutcome::Unchecked));
    assert!(matches!(outcome(demo.println), SiteOutcome::Unchecked));
}

#[test]
fn test_demo_analysis_is_repeatable() {
    let demo = demo();
    let a = analyzer();
    let first: Vec<String> = a.analyze_tree(&demo.tree).violations.into_iter().map(|v| v.fingerprint).collect();
    let second: Vec<String> = a.analyze_tree(&demo.tree).violations.into_iter().map(|v| v.fingerprint).collect();
    assert_eq!(first, second);
}
