use std::collections::BTreeSet;

use nav_harness::{Harness, NAV_SELECTOR, OPEN_CLASS, TOGGLE_SELECTOR};
use proptest::collection::vec;
use proptest::prelude::*;
use proptest::test_runner::{TestCaseError, TestCaseResult};

fn class_token_strategy() -> BoxedStrategy<String> {
    prop_oneof![
        Just("site-nav"),
        Just("sticky"),
        Just("compact"),
        Just("theme-dark"),
        Just("is-loading"),
        Just("with-banner"),
        Just("nav-open"),
    ]
    .prop_map(str::to_string)
    .boxed()
}

fn class_set_strategy() -> BoxedStrategy<Vec<String>> {
    vec(class_token_strategy(), 0..5)
        .prop_map(|tokens| {
            let mut seen = BTreeSet::new();
            tokens
                .into_iter()
                .filter(|token| seen.insert(token.clone()))
                .collect()
        })
        .boxed()
}

fn harness_with_nav_classes(tokens: &[String]) -> Result<Harness, TestCaseError> {
    let html = format!(
        "<nav class='{}'><ul><li><a href='/'>Home</a></li></ul></nav>\
         <button class='nav-toggle' type='button'>Menu</button>",
        tokens.join(" ")
    );
    let mut harness =
        Harness::from_html(&html).map_err(|err| TestCaseError::fail(err.to_string()))?;
    harness
        .document_loaded()
        .map_err(|err| TestCaseError::fail(err.to_string()))?;
    Ok(harness)
}

fn nav_class_set(harness: &Harness) -> Result<BTreeSet<String>, TestCaseError> {
    let class_attr = harness
        .attr(NAV_SELECTOR, "class")
        .map_err(|err| TestCaseError::fail(err.to_string()))?
        .unwrap_or_default();
    Ok(class_attr
        .split_whitespace()
        .map(str::to_string)
        .collect())
}

fn check_single_click_flips_only_the_open_class(tokens: Vec<String>) -> TestCaseResult {
    let mut harness = harness_with_nav_classes(&tokens)?;
    let before = nav_class_set(&harness)?;

    harness
        .click(TOGGLE_SELECTOR)
        .map_err(|err| TestCaseError::fail(err.to_string()))?;
    let after = nav_class_set(&harness)?;

    prop_assert_eq!(
        after.contains(OPEN_CLASS),
        !before.contains(OPEN_CLASS),
        "open class membership must flip"
    );

    let mut expected = before.clone();
    if !expected.remove(OPEN_CLASS) {
        expected.insert(OPEN_CLASS.to_string());
    }
    prop_assert_eq!(after, expected);
    Ok(())
}

fn check_double_click_restores_the_class_set(tokens: Vec<String>) -> TestCaseResult {
    let mut harness = harness_with_nav_classes(&tokens)?;
    let before = nav_class_set(&harness)?;

    for _ in 0..2 {
        harness
            .click(TOGGLE_SELECTOR)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
    }

    prop_assert_eq!(nav_class_set(&harness)?, before);
    Ok(())
}

proptest! {
    #[test]
    fn single_click_flips_only_the_open_class(tokens in class_set_strategy()) {
        check_single_click_flips_only_the_open_class(tokens)?;
    }

    #[test]
    fn double_click_restores_the_class_set(tokens in class_set_strategy()) {
        check_double_click_restores_the_class_set(tokens)?;
    }

    #[test]
    fn any_even_click_count_is_identity(tokens in class_set_strategy(), clicks in 0usize..4) {
        let mut harness = harness_with_nav_classes(&tokens)?;
        let before = nav_class_set(&harness)?;

        for _ in 0..clicks * 2 {
            harness
                .click(TOGGLE_SELECTOR)
                .map_err(|err| TestCaseError::fail(err.to_string()))?;
        }

        prop_assert_eq!(nav_class_set(&harness)?, before);
    }
}
