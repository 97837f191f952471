use crate::stage::Stage;
use std::borrow::Cow;

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// General test samples (may or may not trigger changes)
    fn samples() -> &'static [&'static str] {
        &["Tunisia", " Côte d'Ivoire ", "SAUDI ARABIA", "مصر، تونس", ""]
    }

    /// Samples that must pass through unchanged and unallocated.
    fn should_pass_through() -> &'static [&'static str] {
        &["TUNISIA", "UNITED KINGDOM", "تونس", ""]
    }

    /// Input/output pairs that verify correct transformations.
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[]
    }
}

/// Assert that a stage satisfies every universal stage contract.
///
/// 1. `zero_copy_when_no_changes` → no allocation when input == output
/// 2. `stage_is_idempotent` → applying twice yields same result as once
/// 3. `needs_apply_is_sound` → `needs_apply == false` implies no change
/// 4. `handles_empty_string` → `""` in, `""` out
/// 5. `no_panic_on_mixed_scripts` → survives pathological real-world input
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes($stage);
        $crate::testing::stage_contract::stage_is_idempotent($stage);
        $crate::testing::stage_contract::needs_apply_is_sound($stage);
        $crate::testing::stage_contract::handles_empty_string($stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts($stage);
    };
}

fn run<'a, S: Stage>(stage: &S, text: Cow<'a, str>) -> Cow<'a, str> {
    if stage.needs_apply(&text) {
        stage.apply(text)
    } else {
        text
    }
}

pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: S) {
    for &input in S::samples() {
        let first = run(&stage, Cow::Borrowed(input));
        if first.as_ref() == input {
            assert_eq!(
                input as *const str,
                first.as_ref() as *const str,
                "stage `{}` copied unchanged input `{input}`",
                stage.name()
            );
        }

        // Second pass must never allocate again
        let old_ptr = first.as_ref() as *const str;
        let second = run(&stage, first);
        assert_eq!(
            old_ptr,
            second.as_ref() as *const str,
            "stage `{}` allocated on second pass for `{input}`",
            stage.name()
        );
    }

    for &pass_through in S::should_pass_through() {
        let out = run(&stage, Cow::Borrowed(pass_through));
        assert_eq!(out.as_ref(), pass_through);
        assert!(
            matches!(out, Cow::Borrowed(s) if s.as_ptr() == pass_through.as_ptr()),
            "stage `{}` copied pass-through sample `{pass_through}`",
            stage.name()
        );
    }

    for &(input, expected) in S::should_transform() {
        let out = run(&stage, Cow::Borrowed(input));
        assert_eq!(out.as_ref(), expected, "stage `{}` on `{input}`", stage.name());
    }
}

pub fn stage_is_idempotent<S: StageTestConfig>(stage: S) {
    let transformed = S::should_transform().iter().map(|(input, _)| *input);
    for input in S::samples().iter().copied().chain(transformed) {
        let once = stage.apply(Cow::Borrowed(input)).into_owned();
        let twice = stage.apply(Cow::Borrowed(&once)).into_owned();
        assert_eq!(once, twice, "stage `{}` not idempotent on `{input}`", stage.name());
    }
}

pub fn needs_apply_is_sound<S: StageTestConfig>(stage: S) {
    let clean = ["", "TUNISIA", "world123"];
    for input in S::samples().iter().chain(clean.iter()) {
        let predicted = stage.needs_apply(input);
        let output = stage.apply(Cow::Owned(input.to_string()));
        if output.as_ref() != *input {
            assert!(
                predicted,
                "needs_apply() missed a change for stage `{}` on `{input}` (output = {output:?})",
                stage.name()
            );
        }
    }
}

pub fn handles_empty_string<S: StageTestConfig>(stage: S) {
    assert_eq!(run(&stage, Cow::Borrowed("")).as_ref(), "");
    assert_eq!(stage.apply(Cow::Borrowed("")).as_ref(), "");
}

pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: S) {
    let _ = stage.apply(Cow::Borrowed(
        "Hello 世界 русский Türkçe العربية؛ ﬁ ß ǅ e\u{0301}\u{0323} \u{200B}",
    ));
}
