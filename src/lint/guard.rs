//! Recovery boundary around rule code.

use std::any::Any;
use std::cell::Cell;
use std::panic::{self, catch_unwind, AssertUnwindSafe};

thread_local! {
    static IN_RULE: Cell<bool> = const { Cell::new(false) };
}

/// Run `f`, converting a panic into its message.
pub(crate) fn guarded<T>(f: impl FnOnce() -> T) -> Result<T, String> {
    let outer = IN_RULE.with(|flag| flag.replace(true));
    let outcome = catch_unwind(AssertUnwindSafe(f));
    IN_RULE.with(|flag| flag.set(outer));
    outcome.map_err(|payload| panic_message(payload.as_ref()))
}

fn in_rule() -> bool {
    IN_RULE.with(Cell::get)
}

/// Keep panics raised inside rule code off stderr.
///
/// Those panics already become `Fatal` results and a `warn` log naming the
/// lint. Panics anywhere else still reach the previously installed hook.
pub fn silence_rule_panics() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        if !in_rule() {
            previous(info);
        }
    }));
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_through_values() {
        assert_eq!(guarded(|| 7), Ok(7));
    }

    #[test]
    fn captures_static_message() {
        assert_eq!(guarded(|| -> u8 { panic!("boom") }), Err("boom".to_string()));
    }

    #[test]
    fn captures_formatted_message() {
        let n = 3;
        let err = guarded(|| -> u8 { panic!("index {} out of range", n) }).unwrap_err();
        assert_eq!(err, "index 3 out of range");
    }

    #[test]
    fn marks_rule_code_while_it_runs() {
        assert!(!in_rule());
        assert_eq!(guarded(in_rule), Ok(true));
        assert!(!in_rule());
    }

    #[test]
    fn rule_marker_resets_after_panic() {
        let _ = guarded(|| -> u8 { panic!("boom") });
        assert!(!in_rule());
    }

    #[test]
    fn nested_guard_restores_outer_marker() {
        let outer = guarded(|| {
            let _ = guarded(|| -> u8 { panic!("inner") });
            in_rule()
        });
        assert_eq!(outer, Ok(true));
        assert!(!in_rule());
    }

    #[test]
    fn opaque_payload() {
        let err = guarded(|| -> u8 { std::panic::panic_any(42_u32) }).unwrap_err();
        assert_eq!(err, "unknown panic");
    }
}
